//! Summary Statistics
//!
//! Aggregates computed from an ascending timing sample:
//! - Min and max read from the ends of the sample
//! - Median interpolated between the middle elements
//! - Standard deviation uses the N-1 (sample) denominator, 0.0 for one sample

use crate::percentiles::percentile_sorted;

/// Aggregates of one version's timings, in seconds
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStatistics {
    /// Sum of all timings
    pub total: f64,
    /// Fastest timing
    pub min: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Slowest timing
    pub max: f64,
    /// Middle timing, or the mean of the two middle timings
    pub median: f64,
    /// Sample standard deviation
    pub std_dev: f64,
    /// Number of timings
    pub sample_count: usize,
}

/// Compute summary statistics of an ascending sample
///
/// Returns `None` for an empty sample.
///
/// # Examples
///
/// ```
/// # use eulerbench_stats::compute_summary;
/// let summary = compute_summary(&[0.001, 0.002, 0.003]).unwrap();
/// assert!((summary.mean - 0.002).abs() < 1e-12);
/// assert!((summary.std_dev - 0.001).abs() < 1e-12);
/// ```
pub fn compute_summary(samples: &[f64]) -> Option<SummaryStatistics> {
    debug_assert!(
        samples.windows(2).all(|w| w[0] <= w[1]),
        "samples must be ascending"
    );

    let (&min, &max) = (samples.first()?, samples.last()?);
    let n = samples.len();
    let total: f64 = samples.iter().sum();
    let mean = total / n as f64;

    let std_dev = if n < 2 {
        0.0
    } else {
        let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        variance.sqrt()
    };

    Some(SummaryStatistics {
        total,
        min,
        mean,
        max,
        median: percentile_sorted(samples, 50.0),
        std_dev,
        sample_count: n,
    })
}
