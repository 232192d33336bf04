//! Clock abstraction.
//!
//! The engine never reads the system time directly. It asks an injected
//! [`Clock`] for "now" and "today", which keeps daily rollover and countdown
//! behavior deterministic under test.
//!
//! "Today" is the user's local calendar date: a session finished at 23:55
//! and one finished at 00:05 belong to different days from the user's point
//! of view, regardless of their UTC timestamps.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Utc};

/// Source of the current instant and the current local calendar date.
pub trait Clock {
    /// Current instant, UTC.
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar date in the user's timezone.
    fn today(&self) -> NaiveDate;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Settable clock for tests and simulations.
///
/// Clones share the same underlying instant, so a test can keep a handle
/// and advance time while the engine owns its own copy.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    /// Create a clock pinned to the given instant.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    /// Create a clock pinned to midnight of the given date.
    pub fn at_date(date: NaiveDate) -> Self {
        let midnight = date.and_hms_opt(0, 0, 0).expect("valid midnight");
        Self::new(Utc.from_utc_datetime(&midnight))
    }

    /// Jump to an absolute instant.
    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().expect("clock lock") = now;
    }

    /// Move the clock forward.
    pub fn advance(&self, delta: Duration) {
        let mut now = self.now.lock().expect("clock lock");
        *now = *now + delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock lock")
    }

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}
