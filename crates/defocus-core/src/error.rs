//! Core error types for defocus-core.
//!
//! Storage and configuration failures are the only fallible edges of this
//! library. Engine commands never return these errors (see the session
//! engine docs); the types below surface from store and config constructors.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for defocus-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Persistent store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persistent store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the backing database
    #[error("Failed to open store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Store is locked by another writer
    #[error("Store is locked")]
    Locked,

    /// Data directory could not be created
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Record could not be serialized
    #[error("Failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    StoreError::Locked
                } else {
                    StoreError::QueryFailed(err.to_string())
                }
            }
            _ => StoreError::QueryFailed(err.to_string()),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
