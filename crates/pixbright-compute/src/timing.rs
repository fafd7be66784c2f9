//! Elapsed-time instrumentation.
//!
//! Every mutating entry point is wrapped by [`measure`], which reads the
//! processor's [`Clock`] immediately before and after the transform. The
//! clock is injected, so tests can drive it deterministically.

use std::fmt;
use std::time::Instant;

/// Monotonic time source in whole microseconds.
pub trait Clock: Send + Sync + fmt::Debug {
    /// Current reading. Must never decrease.
    fn now_micros(&self) -> u64;
}

/// [`Clock`] backed by [`std::time::Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_micros(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_micros()).unwrap_or(u64::MAX)
    }
}

/// A value paired with the time it took to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measured<T> {
    /// Result of the measured closure.
    pub value: T,
    /// Elapsed whole microseconds.
    pub elapsed_us: u64,
}

/// Runs `f` between two clock readings.
///
/// # Example
///
/// ```rust
/// use pixbright_compute::timing::{measure, MonotonicClock};
///
/// let clock = MonotonicClock::new();
/// let m = measure(&clock, || 6 * 7);
/// assert_eq!(m.value, 42);
/// ```
#[inline]
pub fn measure<T>(clock: &dyn Clock, f: impl FnOnce() -> T) -> Measured<T> {
    let start = clock.now_micros();
    let value = f();
    let end = clock.now_micros();
    Measured {
        value,
        elapsed_us: end.saturating_sub(start),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Advances by a fixed step on every reading.
    #[derive(Debug)]
    struct StepClock {
        now: AtomicU64,
        step: u64,
    }

    impl Clock for StepClock {
        fn now_micros(&self) -> u64 {
            self.now.fetch_add(self.step, Ordering::Relaxed)
        }
    }

    #[test]
    fn test_measure_uses_clock_difference() {
        let clock = StepClock {
            now: AtomicU64::new(1_000),
            step: 250,
        };
        let m = measure(&clock, || "done");
        assert_eq!(m.value, "done");
        assert_eq!(m.elapsed_us, 250);
    }

    #[test]
    fn test_monotonic_clock_non_decreasing() {
        let clock = MonotonicClock::new();
        let a = clock.now_micros();
        let b = clock.now_micros();
        assert!(b >= a);
    }

    #[test]
    fn test_measure_real_clock() {
        let clock = MonotonicClock::new();
        let m = measure(&clock, || std::thread::sleep(std::time::Duration::from_millis(2)));
        assert!(m.elapsed_us >= 1_000);
    }
}
