//! Time source abstraction for note timestamping.
//!
//! # Responsibility
//! - Define the `Clock` contract used by `Notebook` to stamp new notes.
//! - Provide the wall-clock default and a fixed clock for deterministic tests.
//!
//! # Invariants
//! - All timestamps are Unix epoch milliseconds.
//! - `SystemClock` never panics; a pre-epoch system clock reads as 0.

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of "now" in epoch milliseconds.
///
/// Injected into `Notebook` so tests and embedders can control time instead
/// of depending on the wall clock.
pub trait Clock {
    /// Returns the current instant as Unix epoch milliseconds.
    fn now_millis(&self) -> i64;
}

/// Wall-clock implementation backed by `SystemTime`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX),
            // Clock set before the epoch; clamp instead of failing.
            Err(_) => 0,
        }
    }
}

/// Clock that always reports one programmed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now_millis: i64,
}

impl FixedClock {
    /// Creates a clock pinned to the given epoch-millisecond instant.
    pub fn at(now_millis: i64) -> Self {
        Self { now_millis }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.now_millis
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, FixedClock, SystemClock};

    #[test]
    fn system_clock_is_after_a_known_past_instant() {
        // 2024-01-01T00:00:00Z
        assert!(SystemClock.now_millis() > 1_704_067_200_000);
    }

    #[test]
    fn system_clock_does_not_run_backwards_across_reads() {
        let first = SystemClock.now_millis();
        let second = SystemClock.now_millis();
        assert!(second >= first);
    }

    #[test]
    fn fixed_clock_reports_programmed_instant() {
        let clock = FixedClock::at(1_700_000_000_000);
        assert_eq!(clock.now_millis(), 1_700_000_000_000);
        assert_eq!(clock.now_millis(), 1_700_000_000_000);
    }
}
