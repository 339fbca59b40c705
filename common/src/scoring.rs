//! Percentage and pass/fail derivation for a single attempt.

use serde::{Deserialize, Serialize};

/// Minimum percentage (inclusive) an attempt needs to count as passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassThreshold(u32);

impl PassThreshold {
    /// Creates a threshold, capped at 100.
    pub fn new(percent: u32) -> Self {
        Self(percent.min(100))
    }

    pub fn percent(self) -> u32 {
        self.0
    }

    pub fn passes(self, percentage: i64) -> bool {
        percentage >= i64::from(self.0)
    }
}

impl Default for PassThreshold {
    fn default() -> Self {
        Self(60)
    }
}

/// Score as a whole percentage of `total_points`, rounded to nearest (halves up).
///
/// A non-positive total yields 0 instead of dividing by zero.
pub fn percentage(score: i64, total_points: i64) -> i64 {
    if total_points <= 0 {
        return 0;
    }
    (score as f64 / total_points as f64 * 100.0).round() as i64
}

/// Derived grade for one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Grade {
    pub percentage: i64,
    pub passed: bool,
}

impl Grade {
    pub fn new(score: i64, total_points: i64, threshold: PassThreshold) -> Self {
        let percentage = percentage(score, total_points);
        Self {
            percentage,
            passed: threshold.passes(percentage),
        }
    }
}
