mod engine;
mod messages;
mod state;

pub use engine::{SessionCycleEngine, SESSION_STATE_KEY};
pub use messages::{cycle_completion_message, defocus_lock_message};
pub use state::{
    CycleCompletion, FocusKind, FocusOptions, FocusSession, SessionState, SessionStats,
    DEFAULT_FOCUS_DURATION_MIN,
};
