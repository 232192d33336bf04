use clap::Subcommand;
use defocus_core::storage::Config;

use super::open_engine;

#[derive(Subcommand)]
pub enum DefocusAction {
    /// Start a defocus activity (fails while defocus is locked)
    Start {
        /// Activity name, e.g. "journaling" or "walk"
        activity: String,
        /// Activity length in minutes (defaults to the configured length)
        #[arg(long)]
        duration: Option<u32>,
    },
    /// End the defocus activity (the lock stays until the next focus session
    /// completes)
    End,
    /// Print availability and the lock message as JSON
    Status,
}

pub fn run(action: DefocusAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = open_engine()?;

    match action {
        DefocusAction::Start { activity, duration } => {
            let config = Config::load()?;
            let duration = duration.unwrap_or(config.defocus.default_duration_min);
            if engine.start_defocus(&activity, duration) {
                println!("defocus started: {activity} ({duration} min)");
            } else {
                eprintln!("{}", engine.defocus_lock_message());
                std::process::exit(1);
            }
        }
        DefocusAction::End => {
            engine.end_defocus();
            println!("{}", engine.defocus_lock_message());
        }
        DefocusAction::Status => {
            let status = serde_json::json!({
                "available": engine.is_defocus_available(),
                "message": engine.defocus_lock_message(),
            });
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
    }
    Ok(())
}
