//! Clock implementations.

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::traits::Clock;

/// Wall clock backed by [`SystemTime`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Current Unix time in whole seconds. Clocks set before the epoch read as 0.
    pub fn unix_now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
            .unwrap_or_default()
    }
}

impl Clock for SystemClock {
    fn now_unix(&self) -> i64 {
        Self::unix_now()
    }
}

/// Clock that only moves when told to.
///
/// Useful for deterministic expiration and freshness checks.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    /// Creates a clock frozen at `now`.
    pub fn new(now: i64) -> Self {
        Self {
            now: AtomicI64::new(now),
        }
    }

    /// Sets the current time.
    pub fn set(&self, now: i64) {
        self.now.store(now, Ordering::SeqCst);
    }

    /// Moves the clock forward by `seconds`.
    pub fn advance(&self, seconds: i64) {
        self.now.fetch_add(seconds, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_unix(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_recent() {
        // 2023-01-01T00:00:00Z
        assert!(SystemClock.now_unix() > 1_672_531_200);
    }

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::new(100);
        assert_eq!(clock.now_unix(), 100);
        clock.advance(5);
        assert_eq!(clock.now_unix(), 105);
        clock.set(7);
        assert_eq!(clock.now_unix(), 7);
    }

    fn read<C: Clock>(clock: C) -> i64 {
        clock.now_unix()
    }

    #[test]
    fn test_clock_through_reference_and_arc() {
        let clock = std::sync::Arc::new(ManualClock::new(42));
        assert_eq!(read(&*clock), 42);
        assert_eq!(read(clock.clone()), 42);
        clock.advance(1);
        assert_eq!(read(clock), 43);
    }
}
