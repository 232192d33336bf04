use clap::Subcommand;

use super::open_engine;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Read-only snapshot across session and quick reset state
    Show,
    /// The lock banner and cycle counter messages
    Messages,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let engine = open_engine()?;

    match action {
        StatsAction::Show => {
            let stats = engine.session_stats();
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        StatsAction::Messages => {
            println!("{}", engine.defocus_lock_message());
            println!("{}", engine.cycle_completion_message());
        }
    }
    Ok(())
}
