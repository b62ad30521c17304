//! Wall-clock access for the `today` and `now` keywords.
//!
//! Evaluation never reads the system clock directly. Callers hand in a
//! [`Clock`], so tests can pin "now" with [`FixedClock`] while the CLI uses
//! [`SystemClock`].

use chrono::{Local, NaiveDateTime, Timelike};

/// Source of the current local date and time.
pub trait Clock {
    /// The current local date-time, with whole-second precision.
    fn now(&self) -> NaiveDateTime;
}

/// Reads the operating system's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        let now = Local::now().naive_local();
        // Sub-second precision would leak into durations computed from `now`.
        now.with_nanosecond(0).unwrap_or(now)
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
