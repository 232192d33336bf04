mod config;
pub mod sqlite;
mod store;

pub use config::Config;
pub use sqlite::SqliteStore;
pub use store::{MemoryStore, SessionStore};

use std::path::PathBuf;

/// Returns `~/.config/defocus[-dev]/` based on DEFOCUS_ENV.
///
/// Set DEFOCUS_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("DEFOCUS_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("defocus-dev")
    } else {
        base_dir.join("defocus")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
