//! Time budgets polled by the searchers.

use std::cell::Cell;
use std::time::{Duration, Instant};

use thiserror::Error;

/// Raised when the remaining budget drops to the timeout threshold.
///
/// This is a cancellation signal rather than a domain error: it propagates
/// through every active search frame and is handled only by the caller that
/// started the search.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("search timed out")]
pub struct SearchTimeout;

/// A read-only countdown for the current turn.
///
/// `remaining` must be monotonically non-increasing between calls. Polling is
/// cooperative: a search observes expiry only at its next recursive entry, so
/// a slow `Evaluator` or move generator can overrun the threshold by the cost
/// of one node. That bounds latency, not correctness.
pub trait Deadline {
    fn remaining(&self) -> Duration;

    /// Returns `Err(SearchTimeout)` once the remaining budget is at or below
    /// `threshold`.
    #[inline]
    fn check(&self, threshold: Duration) -> Result<(), SearchTimeout> {
        if self.remaining() <= threshold {
            Err(SearchTimeout)
        } else {
            Ok(())
        }
    }
}

impl<D: Deadline + ?Sized> Deadline for &D {
    #[inline]
    fn remaining(&self) -> Duration {
        (**self).remaining()
    }
}

/// Wall-clock countdown ending at a fixed instant.
#[derive(Clone, Copy, Debug)]
pub struct Countdown {
    expires_at: Instant,
}

impl Countdown {
    pub fn new(budget: Duration) -> Self {
        Self {
            expires_at: Instant::now() + budget,
        }
    }

    pub fn until(expires_at: Instant) -> Self {
        Self { expires_at }
    }

    pub fn expires_at(&self) -> Instant {
        self.expires_at
    }
}

impl Deadline for Countdown {
    #[inline]
    fn remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }
}

/// A budget that never runs out.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unlimited;

impl Deadline for Unlimited {
    #[inline]
    fn remaining(&self) -> Duration {
        Duration::MAX
    }
}

/// Deterministic clock that loses a fixed step every time it is read.
///
/// Useful for reproducing a cancellation at an exact node count in tests and
/// benchmarks, independent of machine speed.
#[derive(Debug)]
pub struct StepClock {
    remaining: Cell<Duration>,
    step: Duration,
    reads: Cell<u64>,
}

impl StepClock {
    pub fn new(budget: Duration, step: Duration) -> Self {
        Self {
            remaining: Cell::new(budget),
            step,
            reads: Cell::new(0),
        }
    }

    /// A clock that allows exactly `reads` polls above a zero threshold before
    /// expiring.
    pub fn with_reads(reads: u64) -> Self {
        Self::new(Duration::from_millis(reads), Duration::from_millis(1))
    }

    pub fn reads(&self) -> u64 {
        self.reads.get()
    }
}

impl Deadline for StepClock {
    fn remaining(&self) -> Duration {
        let current = self.remaining.get();
        self.remaining.set(current.saturating_sub(self.step));
        self.reads.set(self.reads.get() + 1);
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlimited_never_expires() {
        assert_eq!(Unlimited.check(Duration::from_secs(3600)), Ok(()));
    }

    #[test]
    fn test_expired_countdown_times_out() {
        let countdown = Countdown::new(Duration::ZERO);
        assert_eq!(countdown.remaining(), Duration::ZERO);
        assert_eq!(countdown.check(Duration::ZERO), Err(SearchTimeout));
    }

    #[test]
    fn test_countdown_is_non_increasing() {
        let countdown = Countdown::new(Duration::from_secs(60));
        let first = countdown.remaining();
        let second = countdown.remaining();
        assert!(second <= first);
        assert!(countdown.check(Duration::from_millis(10)).is_ok());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let clock = StepClock::new(Duration::from_millis(10), Duration::ZERO);
        assert_eq!(clock.check(Duration::from_millis(10)), Err(SearchTimeout));
        assert_eq!(clock.check(Duration::from_millis(9)), Ok(()));
    }

    #[test]
    fn test_step_clock_counts_reads() {
        let clock = StepClock::with_reads(3);
        assert!(clock.check(Duration::ZERO).is_ok());
        assert!(clock.check(Duration::ZERO).is_ok());
        assert!(clock.check(Duration::ZERO).is_ok());
        assert_eq!(clock.check(Duration::ZERO), Err(SearchTimeout));
        assert_eq!(clock.reads(), 4);
    }

    #[test]
    fn test_step_clock_keeps_large_read_budgets() {
        let reads = u64::from(u32::MAX) + 5;
        let clock = StepClock::with_reads(reads);
        assert_eq!(clock.remaining(), Duration::from_millis(reads));
        assert_eq!(clock.remaining(), Duration::from_millis(reads - 1));
    }
}
