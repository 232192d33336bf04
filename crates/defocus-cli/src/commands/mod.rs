pub mod config;
pub mod defocus;
pub mod focus;
pub mod quickreset;
pub mod session;
pub mod stats;

use defocus_core::clock::SystemClock;
use defocus_core::session::SessionCycleEngine;
use defocus_core::storage::SqliteStore;

pub type Engine = SessionCycleEngine<SqliteStore, SystemClock>;

/// Open the durable store and construct the engine over it.
pub fn open_engine() -> Result<Engine, Box<dyn std::error::Error>> {
    let store = SqliteStore::open()?;
    Ok(SessionCycleEngine::new(store, SystemClock))
}
