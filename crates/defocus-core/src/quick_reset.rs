//! Quick reset countdown.
//!
//! A short breathing exercise timer that stays available regardless of the
//! defocus lock. Wall-clock based with no internal thread: the caller invokes
//! [`QuickResetTimer::tick`] periodically (once a second is the intended
//! cadence), and remaining time is recomputed from the start instant, so a
//! late tick cannot under-count.
//!
//! Cancellation and natural expiry land on the same idle shape, and `tick`
//! is a no-op unless the countdown is active, so a revoked countdown can
//! never fire again.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Default countdown length in seconds.
pub const DEFAULT_QUICK_RESET_SECS: u32 = 60;

/// Snapshot of the countdown. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickResetState {
    pub is_active: bool,
    pub duration_secs: u32,
    pub remaining_secs: u32,
}

impl Default for QuickResetState {
    fn default() -> Self {
        Self {
            is_active: false,
            duration_secs: DEFAULT_QUICK_RESET_SECS,
            remaining_secs: 0,
        }
    }
}

/// The countdown state machine. At most one countdown is active at a time.
#[derive(Debug, Clone, Default)]
pub struct QuickResetTimer {
    state: QuickResetState,
    started_at: Option<DateTime<Utc>>,
}

impl QuickResetTimer {
    /// Begin a countdown of `duration_secs`.
    ///
    /// Returns `false` without touching the running countdown if one is
    /// already active.
    pub fn start(&mut self, duration_secs: u32, now: DateTime<Utc>) -> bool {
        if self.state.is_active {
            return false;
        }
        self.state = QuickResetState {
            is_active: true,
            duration_secs,
            remaining_secs: duration_secs,
        };
        self.started_at = Some(now);
        true
    }

    /// Periodic callback. Recomputes remaining time; returns `true` on the
    /// tick that reaches zero, after which the timer is idle again.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        if !self.state.is_active {
            return false;
        }
        let Some(started_at) = self.started_at else {
            return false;
        };
        let elapsed = (now - started_at).num_seconds().max(0) as u64;
        let remaining = u64::from(self.state.duration_secs).saturating_sub(elapsed);
        self.state.remaining_secs = remaining as u32;
        if remaining == 0 {
            self.deactivate();
            return true;
        }
        false
    }

    /// Cancel the countdown. Idempotent; safe after natural expiry.
    pub fn cancel(&mut self) {
        self.deactivate();
    }

    pub fn state(&self) -> QuickResetState {
        self.state
    }

    fn deactivate(&mut self) {
        self.state.is_active = false;
        self.state.remaining_secs = 0;
        self.started_at = None;
    }
}
