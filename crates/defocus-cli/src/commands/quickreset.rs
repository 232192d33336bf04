use std::time::Duration;

use clap::Subcommand;
use defocus_core::storage::Config;

use super::open_engine;

#[derive(Subcommand)]
pub enum QuickResetAction {
    /// Run a quick reset countdown to completion, printing each second
    Start {
        /// Countdown length in seconds (defaults to the configured length)
        #[arg(long)]
        duration: Option<u32>,
    },
    /// Cancel the countdown
    End,
    /// Print the countdown state as JSON
    Status,
}

pub fn run(action: QuickResetAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = open_engine()?;

    match action {
        QuickResetAction::Start { duration } => {
            let config = Config::load()?;
            let duration = duration.unwrap_or(config.quick_reset.duration_secs);
            if !engine.start_quick_reset(duration) {
                eprintln!("a quick reset is already running");
                std::process::exit(1);
            }

            // The countdown is caller-driven: tick once a second until it
            // reports completion. Always available, locked or not.
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(async {
                let mut interval = tokio::time::interval(Duration::from_secs(1));
                interval.tick().await; // first tick fires immediately
                loop {
                    interval.tick().await;
                    let finished = engine.tick();
                    println!("{}", engine.quick_reset_state().remaining_secs);
                    if finished {
                        break;
                    }
                }
            });
            println!("quick reset complete");
        }
        QuickResetAction::End => {
            engine.end_quick_reset();
            println!("quick reset ended");
        }
        QuickResetAction::Status => {
            let state = engine.quick_reset_state();
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
    }
    Ok(())
}
