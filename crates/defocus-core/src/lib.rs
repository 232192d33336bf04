//! # Defocus Core Library
//!
//! Core business logic for Defocus, a focus/break cycle app that gates
//! mindful breaks ("defocus") behind completed focus sessions. All
//! operations are available through this library; the CLI binary is a thin
//! presentation layer over the same surface.
//!
//! ## Architecture
//!
//! - **Session Cycle Engine**: owns the session state and the defocus lock;
//!   commands mutate in memory and persist the full record after every
//!   mutation
//! - **Quick Reset Timer**: an always-available wall-clock countdown driven
//!   by caller ticks, independent of the lock
//! - **Storage**: a key-value store contract with SQLite and in-memory
//!   implementations, plus TOML-based configuration
//! - **Clock**: injected time source so rollover and countdowns are
//!   deterministic under test
//!
//! ## Key Components
//!
//! - [`SessionCycleEngine`]: commands and queries over the session cycle
//! - [`QuickResetTimer`]: the countdown state machine
//! - [`SessionStore`]: persistence contract; [`SqliteStore`] is the durable
//!   implementation
//! - [`Config`]: application configuration management

pub mod clock;
pub mod error;
pub mod quick_reset;
pub mod session;
pub mod storage;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{ConfigError, CoreError, StoreError};
pub use quick_reset::{QuickResetState, QuickResetTimer, DEFAULT_QUICK_RESET_SECS};
pub use session::{
    CycleCompletion, FocusKind, FocusOptions, FocusSession, SessionCycleEngine, SessionState,
    SessionStats,
};
pub use storage::{Config, MemoryStore, SessionStore, SqliteStore};
