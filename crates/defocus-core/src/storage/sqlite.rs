//! SQLite-backed key-value store.
//!
//! A single `kv` table at `~/.config/defocus/defocus.db` holds the persisted
//! state records. The schema is created on open.

use std::path::PathBuf;

use rusqlite::{params, Connection};

use super::data_dir;
use crate::error::StoreError;
use crate::storage::store::SessionStore;

/// Durable [`SessionStore`] over a SQLite kv table.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open the store at `~/.config/defocus/defocus.db`, creating the file
    /// and schema if needed.
    ///
    /// # Errors
    /// Returns an error if the data directory or database cannot be opened.
    pub fn open() -> Result<Self, StoreError> {
        let dir = data_dir()?;
        Self::open_at(dir.join("defocus.db"))
    }

    /// Open the store at an explicit path.
    pub fn open_at(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let conn = Connection::open(&path).map_err(|source| StoreError::OpenFailed {
            path: path.clone(),
            source,
        })?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// Open an in-memory store (for tests).
    #[cfg(test)]
    pub fn open_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(|source| StoreError::OpenFailed {
            path: PathBuf::from(":memory:"),
            source,
        })?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }
}

impl SessionStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }
}
