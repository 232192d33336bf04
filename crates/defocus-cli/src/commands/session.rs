use clap::Subcommand;
use defocus_core::session::SESSION_STATE_KEY;
use defocus_core::storage::SessionStore;

use super::open_engine;

#[derive(Subcommand)]
pub enum SessionAction {
    /// Print the persisted session record as stored
    Show,
    /// Force session state back to defaults and delete the persisted record
    Reset,
}

pub fn run(action: SessionAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = open_engine()?;

    match action {
        SessionAction::Show => match engine.store().get(SESSION_STATE_KEY)? {
            Some(json) => {
                let record: serde_json::Value = serde_json::from_str(&json)?;
                println!("{}", serde_json::to_string_pretty(&record)?);
            }
            None => println!("null"),
        },
        SessionAction::Reset => {
            engine.reset_session_state();
            println!("session state reset");
        }
    }
    Ok(())
}
