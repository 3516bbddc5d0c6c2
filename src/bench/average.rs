//! Incremental mean accumulator

use serde::{Deserialize, Serialize};

/// Mean of all samples seen so far, without keeping the samples.
///
/// Trial `i` (0-based) folds in via `(i * old + sample) / (i + 1)`. This
/// rounds differently from sum-then-divide; results are compared against
/// this exact recurrence, so keep it as is.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RunningAverage {
    mean: f64,
    count: u64,
}

impl RunningAverage {
    pub const fn new() -> Self {
        Self { mean: 0.0, count: 0 }
    }

    /// Fold in the next sample and return the updated accumulator
    #[inline]
    #[must_use]
    pub fn update(self, sample: u64) -> Self {
        let i = self.count as f64;
        Self {
            mean: (i * self.mean + sample as f64) / (i + 1.0),
            count: self.count + 1,
        }
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

impl FromIterator<u64> for RunningAverage {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::update)
    }
}
