//! Key-value store contract.
//!
//! The engine's only I/O dependency: a durable string-keyed store with
//! `get`/`set`/`remove`. Implementations decide durability; the engine only
//! assumes last-write-wins for a single writer.

use std::collections::HashMap;

use crate::error::StoreError;

/// Durable key-value storage for engine state records.
pub trait SessionStore {
    /// Fetch the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete the record under `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Volatile in-memory store for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}
