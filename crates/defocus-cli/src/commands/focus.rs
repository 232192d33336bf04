use clap::Subcommand;
use defocus_core::session::{FocusKind, FocusOptions};
use defocus_core::storage::Config;

use super::open_engine;

#[derive(Subcommand)]
pub enum FocusAction {
    /// Start a focus session (replaces a running one)
    Start {
        /// Session length in minutes (defaults to the configured length)
        #[arg(long)]
        duration: Option<u32>,
        /// Session kind: "pomodoro" or "custom"
        #[arg(long)]
        kind: Option<String>,
    },
    /// End the focus session, closing the cycle and unlocking defocus
    End,
    /// Print the current focus session as JSON
    Status,
}

pub fn run(action: FocusAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = open_engine()?;

    match action {
        FocusAction::Start { duration, kind } => {
            let config = Config::load()?;
            let kind = match kind {
                Some(name) => name.parse::<FocusKind>()?,
                None => config.session.default_kind,
            };
            let session = engine.start_focus(FocusOptions {
                duration_min: Some(duration.unwrap_or(config.session.focus_duration_min)),
                kind: Some(kind),
            });
            println!("{}", serde_json::to_string_pretty(&session)?);
        }
        FocusAction::End => {
            let completion = engine.end_focus();
            println!("{}", serde_json::to_string_pretty(&completion)?);
            println!("{}", engine.cycle_completion_message());
        }
        FocusAction::Status => match engine.state().current_focus_session {
            Some(ref session) => println!("{}", serde_json::to_string_pretty(session)?),
            None => println!("null"),
        },
    }
    Ok(())
}
