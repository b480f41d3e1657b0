//! Timing Samples
//!
//! Per-iteration timings of one version, kept in ascending order as they are
//! recorded so the extremes and the median can be read off directly.

use crate::summary::{SummaryStatistics, compute_summary};
use std::time::Duration;

/// Ascending sequence of per-iteration timings in seconds
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimingSample {
    seconds: Vec<f64>,
}

impl TimingSample {
    /// Empty sample with room for `iterations` entries
    pub fn with_capacity(iterations: usize) -> Self {
        Self {
            seconds: Vec::with_capacity(iterations),
        }
    }

    /// Insert one timing, keeping the sequence sorted
    pub fn insert(&mut self, seconds: f64) {
        let seconds = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
        let at = self.seconds.partition_point(|&s| s <= seconds);
        self.seconds.insert(at, seconds);
    }

    /// Insert one measured duration
    pub fn record(&mut self, elapsed: Duration) {
        self.insert(elapsed.as_secs_f64());
    }

    /// Timings, ascending
    pub fn as_slice(&self) -> &[f64] {
        &self.seconds
    }

    /// Number of timings
    pub fn len(&self) -> usize {
        self.seconds.len()
    }

    /// Whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.seconds.is_empty()
    }

    /// Fastest timing
    pub fn min(&self) -> Option<f64> {
        self.seconds.first().copied()
    }

    /// Slowest timing
    pub fn max(&self) -> Option<f64> {
        self.seconds.last().copied()
    }

    /// Summary statistics; `None` when empty
    pub fn summary(&self) -> Option<SummaryStatistics> {
        compute_summary(&self.seconds)
    }
}

impl FromIterator<f64> for TimingSample {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut sample = Self::default();
        for seconds in iter {
            sample.insert(seconds);
        }
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order() {
        let sample: TimingSample = [0.3, 0.1, 0.2, 0.1].into_iter().collect();
        assert_eq!(sample.as_slice(), &[0.1, 0.1, 0.2, 0.3]);
        assert_eq!(sample.min(), Some(0.1));
        assert_eq!(sample.max(), Some(0.3));
    }

    #[test]
    fn test_negative_and_nan_clamped() {
        let sample: TimingSample = [-1.0, f64::NAN, 0.5].into_iter().collect();
        assert_eq!(sample.as_slice(), &[0.0, 0.0, 0.5]);
    }

    #[test]
    fn test_record_duration() {
        let mut sample = TimingSample::with_capacity(2);
        sample.record(Duration::from_millis(250));
        sample.record(Duration::from_millis(125));
        assert_eq!(sample.as_slice(), &[0.125, 0.25]);
        assert_eq!(sample.summary().unwrap().sample_count, 2);
    }

    #[test]
    fn test_empty() {
        let sample = TimingSample::default();
        assert!(sample.is_empty());
        assert!(sample.summary().is_none());
    }
}
