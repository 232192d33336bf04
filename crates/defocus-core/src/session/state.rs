//! Session state model.
//!
//! One [`SessionState`] exists per engine. The defocus lock is never stored:
//! it is derived from the two source flags on every read, so it cannot go
//! stale across mutations.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default focus session length in minutes.
pub const DEFAULT_FOCUS_DURATION_MIN: u32 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusKind {
    #[default]
    Pomodoro,
    Custom,
}

impl std::str::FromStr for FocusKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pomodoro" => Ok(FocusKind::Pomodoro),
            "custom" => Ok(FocusKind::Custom),
            other => Err(format!("unknown focus kind '{other}'")),
        }
    }
}

impl std::fmt::Display for FocusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FocusKind::Pomodoro => f.write_str("pomodoro"),
            FocusKind::Custom => f.write_str("custom"),
        }
    }
}

/// An in-progress focus session. Owned by [`SessionState`] while active,
/// dropped when the session ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusSession {
    pub id: Uuid,
    pub start_time: DateTime<Utc>,
    /// Duration in minutes. Informational: the engine does not enforce it.
    pub duration_min: u32,
    pub kind: FocusKind,
}

impl FocusSession {
    pub fn begin(start_time: DateTime<Utc>, options: FocusOptions) -> Self {
        Self {
            id: Uuid::new_v4(),
            start_time,
            duration_min: options.duration_min.unwrap_or(DEFAULT_FOCUS_DURATION_MIN),
            kind: options.kind.unwrap_or_default(),
        }
    }
}

/// Optional overrides for a new focus session.
#[derive(Debug, Clone, Copy, Default)]
pub struct FocusOptions {
    pub duration_min: Option<u32>,
    pub kind: Option<FocusKind>,
}

/// Result of ending a focus session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleCompletion {
    /// True when a defocus activity preceded this focus session, i.e. a
    /// full defocus -> focus cycle closed.
    pub cycle_completed: bool,
    pub total_cycles_today: u32,
}

/// Read-only snapshot combining session and quick reset state.
#[derive(Debug, Clone, Serialize)]
pub struct SessionStats {
    pub cycles_completed_today: u32,
    pub is_defocus_available: bool,
    pub is_focus_active: bool,
    pub current_focus_session: Option<FocusSession>,
    pub quick_reset_active: bool,
    pub quick_reset_remaining_secs: u32,
}

/// The engine's session state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// True while a focus session is running.
    pub is_focus_active: bool,
    /// True once a defocus activity started since the last completed focus
    /// session.
    pub is_defocus_used: bool,
    pub current_focus_session: Option<FocusSession>,
    /// Focus sessions ended today (see the counter rules on `end_focus`).
    pub completed_cycles_today: u32,
    /// Local calendar date of the last daily-counter mutation. `None` until
    /// the first completed focus session.
    pub last_cycle_date: Option<NaiveDate>,
}

impl SessionState {
    /// Whether starting a new defocus activity is currently disallowed.
    ///
    /// Derived, never stored: locked while a focus session runs or while an
    /// unredeemed defocus use is outstanding.
    pub fn is_defocus_locked(&self) -> bool {
        self.is_focus_active || self.is_defocus_used
    }

    /// Daily rollover: clear the counters and the usage lock, discard any
    /// in-progress session carried over from a prior day.
    pub(crate) fn roll_over(&mut self, today: NaiveDate) {
        self.completed_cycles_today = 0;
        self.is_defocus_used = false;
        self.is_focus_active = false;
        self.current_focus_session = None;
        self.last_cycle_date = Some(today);
    }
}

/// Wire form of [`SessionState`].
///
/// Carries the derived lock flag for round-trip compatibility; loads ignore
/// it and recompute from the source flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct PersistedSession {
    pub is_focus_active: bool,
    pub is_defocus_used: bool,
    pub is_defocus_locked: bool,
    pub current_focus_session: Option<FocusSession>,
    pub completed_cycles_today: u32,
    pub last_cycle_date: Option<NaiveDate>,
}

impl From<&SessionState> for PersistedSession {
    fn from(state: &SessionState) -> Self {
        Self {
            is_focus_active: state.is_focus_active,
            is_defocus_used: state.is_defocus_used,
            is_defocus_locked: state.is_defocus_locked(),
            current_focus_session: state.current_focus_session.clone(),
            completed_cycles_today: state.completed_cycles_today,
            last_cycle_date: state.last_cycle_date,
        }
    }
}

impl From<PersistedSession> for SessionState {
    fn from(record: PersistedSession) -> Self {
        Self {
            is_focus_active: record.is_focus_active,
            is_defocus_used: record.is_defocus_used,
            current_focus_session: record.current_focus_session,
            completed_cycles_today: record.completed_cycles_today,
            last_cycle_date: record.last_cycle_date,
        }
    }
}
