//! Wall-clock timing source
//!
//! `Instant` is monotonic and counts elapsed real time, so time spent
//! blocked in allocation or plan construction is included. CPU-time clocks
//! would miss it.

use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Nanoseconds since an arbitrary fixed epoch. Only differences are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// Nanoseconds elapsed from `earlier` to `self`, clamped at zero.
    #[inline(always)]
    pub fn nanos_since(self, earlier: Timestamp) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

/// Source of timing boundaries for the benchmark driver
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Monotonic clock anchored at construction
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    epoch: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { epoch: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[inline(always)]
    fn now(&self) -> Timestamp {
        Timestamp(self.epoch.elapsed().as_nanos() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hint::black_box;

    #[test]
    fn test_monotonic_never_goes_back() {
        let clock = MonotonicClock::new();
        let mut last = clock.now();
        for _ in 0..10_000 {
            let now = clock.now();
            assert!(now >= last);
            last = now;
        }
    }

    #[test]
    fn test_measures_wall_time_while_sleeping() {
        let clock = MonotonicClock::new();
        let start = clock.now();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let end = clock.now();
        // A CPU-time clock would report close to zero here
        assert!(end.nanos_since(start) >= 2_000_000);
    }

    #[test]
    fn test_sub_microsecond_resolution() {
        let clock = MonotonicClock::new();
        let mut last = clock.now();
        let mut smallest = u64::MAX;
        for _ in 0..100_000 {
            let now = black_box(clock.now());
            let delta = now.nanos_since(last);
            if delta > 0 {
                smallest = smallest.min(delta);
            }
            last = now;
        }
        assert!(smallest < 1_000, "smallest observable step was {smallest}ns");
    }

    #[test]
    fn test_nanos_since_saturates() {
        assert_eq!(Timestamp(5).nanos_since(Timestamp(10)), 0);
        assert_eq!(Timestamp(10).nanos_since(Timestamp(4)), 6);
    }
}
