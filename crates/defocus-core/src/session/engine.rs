//! Session cycle engine.
//!
//! Owns the [`SessionState`] and the quick reset countdown, and is the only
//! writer of either. Commands mutate in-memory state synchronously, then
//! write the full state record to the injected [`SessionStore`]; a failed
//! write is reported on stderr and rewritten by the next mutation, never
//! surfaced to the caller.
//!
//! ## The lock cycle
//!
//! ```text
//! unlocked --start_defocus--> locked (used) --start_focus--> locked (active)
//!     ^                                                          |
//!     +---------------------- end_focus ------------------------+
//! ```
//!
//! Ending a defocus activity does not unlock; only completing a focus
//! session does. That is the incentive loop this engine exists to enforce.

use crate::clock::Clock;
use crate::quick_reset::{QuickResetState, QuickResetTimer};
use crate::storage::SessionStore;

use super::messages;
use super::state::{
    CycleCompletion, FocusOptions, FocusSession, PersistedSession, SessionState, SessionStats,
};

/// Fixed storage key for the persisted session record.
pub const SESSION_STATE_KEY: &str = "focus_session_state";

/// The session cycle engine. One instance per process root; tests construct
/// their own with a [`crate::storage::MemoryStore`] and a
/// [`crate::clock::ManualClock`].
pub struct SessionCycleEngine<S: SessionStore, C: Clock> {
    state: SessionState,
    quick_reset: QuickResetTimer,
    store: S,
    clock: C,
}

impl<S: SessionStore, C: Clock> SessionCycleEngine<S, C> {
    /// Construct the engine, loading any persisted record.
    ///
    /// A record from a prior calendar day triggers the daily rollover:
    /// counters and the usage lock reset, and any stale in-progress focus
    /// session is discarded. A missing or corrupt record loads as defaults.
    pub fn new(store: S, clock: C) -> Self {
        let mut engine = Self {
            state: SessionState::default(),
            quick_reset: QuickResetTimer::default(),
            store,
            clock,
        };
        engine.load();
        engine
    }

    fn load(&mut self) {
        let record = match self.store.get(SESSION_STATE_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<PersistedSession>(&json) {
                Ok(record) => record,
                Err(e) => {
                    eprintln!("Warning: corrupt session record, starting fresh: {e}");
                    return;
                }
            },
            Ok(None) => return,
            Err(e) => {
                eprintln!("Warning: failed to load session state: {e}");
                return;
            }
        };

        self.state = record.into();
        let today = self.clock.today();
        if self.state.last_cycle_date != Some(today) {
            self.state.roll_over(today);
            self.persist();
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start a focus session.
    ///
    /// Permissive: starting while a session is already running replaces it
    /// with a fresh session (new id, new start time).
    pub fn start_focus(&mut self, options: FocusOptions) -> FocusSession {
        let session = FocusSession::begin(self.clock.now(), options);
        self.state.is_focus_active = true;
        self.state.current_focus_session = Some(session.clone());
        self.persist();
        session
    }

    /// End the focus session and close the cycle. This is the only command
    /// that clears the defocus usage lock.
    ///
    /// Daily counter rules: on the same calendar day as the last counter
    /// mutation, the count increments only when a defocus activity preceded
    /// this session; the first completion of a new day counts as 1
    /// unconditionally.
    pub fn end_focus(&mut self) -> CycleCompletion {
        let today = self.clock.today();
        let was_defocus_used = self.state.is_defocus_used;

        self.state.is_focus_active = false;
        self.state.is_defocus_used = false;
        self.state.current_focus_session = None;
        self.state.completed_cycles_today = if self.state.last_cycle_date == Some(today) {
            self.state.completed_cycles_today + u32::from(was_defocus_used)
        } else {
            1
        };
        self.state.last_cycle_date = Some(today);
        self.persist();

        CycleCompletion {
            cycle_completed: was_defocus_used,
            total_cycles_today: self.state.completed_cycles_today,
        }
    }

    /// Start a defocus activity.
    ///
    /// Fails (returns `false`, mutating nothing) while defocus is locked.
    /// On success the usage lock engages, so the next defocus stays locked
    /// until a focus session completes. The activity name and duration are
    /// informational to this engine; it does not enforce them.
    pub fn start_defocus(&mut self, _activity: &str, _duration_min: u32) -> bool {
        if self.state.is_defocus_locked() {
            return false;
        }
        self.state.is_defocus_used = true;
        self.persist();
        true
    }

    /// End a defocus activity.
    ///
    /// Deliberately does not touch the lock flags: the usage lock clears
    /// only on `end_focus`. Idempotent; nothing changes, nothing is written.
    pub fn end_defocus(&mut self) {}

    /// Start the quick reset countdown. Available regardless of the defocus
    /// lock. Returns `false` if a countdown is already running.
    pub fn start_quick_reset(&mut self, duration_secs: u32) -> bool {
        self.quick_reset.start(duration_secs, self.clock.now())
    }

    /// Cancel the quick reset countdown. Idempotent.
    pub fn end_quick_reset(&mut self) {
        self.quick_reset.cancel();
    }

    /// Periodic callback driving the quick reset countdown. Returns `true`
    /// on the tick that completes it. No-op while no countdown is active.
    pub fn tick(&mut self) -> bool {
        self.quick_reset.tick(self.clock.now())
    }

    /// Force the session state back to defaults and delete the persisted
    /// record entirely, as on a fresh install.
    pub fn reset_session_state(&mut self) {
        self.state = SessionState::default();
        if let Err(e) = self.store.remove(SESSION_STATE_KEY) {
            eprintln!("Warning: failed to remove session record: {e}");
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn is_defocus_available(&self) -> bool {
        !self.state.is_defocus_locked()
    }

    pub fn defocus_lock_message(&self) -> &'static str {
        messages::defocus_lock_message(&self.state)
    }

    pub fn cycle_completion_message(&self) -> String {
        messages::cycle_completion_message(self.state.completed_cycles_today)
    }

    /// Read-only snapshot across both state objects.
    pub fn session_stats(&self) -> SessionStats {
        let quick_reset = self.quick_reset.state();
        SessionStats {
            cycles_completed_today: self.state.completed_cycles_today,
            is_defocus_available: self.is_defocus_available(),
            is_focus_active: self.state.is_focus_active,
            current_focus_session: self.state.current_focus_session.clone(),
            quick_reset_active: quick_reset.is_active,
            quick_reset_remaining_secs: quick_reset.remaining_secs,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn quick_reset_state(&self) -> QuickResetState {
        self.quick_reset.state()
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn persist(&mut self) {
        let record = PersistedSession::from(&self.state);
        let json = match serde_json::to_string(&record) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Warning: failed to serialize session state: {e}");
                return;
            }
        };
        // Failures are non-fatal: in-memory state stays authoritative and
        // the next mutation rewrites the full record.
        if let Err(e) = self.store.set(SESSION_STATE_KEY, &json) {
            eprintln!("Warning: failed to persist session state: {e}");
        }
    }
}
