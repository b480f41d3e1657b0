//! Percentile Computation
//!
//! Percentiles of an already ascending sample, so no copy or sort is needed.

/// Compute a single percentile of an ascending sample
///
/// Uses linear interpolation between nearest ranks, so the 50th percentile of
/// an even-length sample is the mean of the two middle elements.
///
/// # Examples
///
/// ```
/// # use eulerbench_stats::percentile_sorted;
/// let samples = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(percentile_sorted(&samples, 50.0), 2.5);
/// assert_eq!(percentile_sorted(&samples, 100.0), 4.0);
/// ```
pub fn percentile_sorted(samples: &[f64], percentile: f64) -> f64 {
    match samples {
        [] => 0.0,
        [only] => *only,
        _ => {
            let n = samples.len();
            let p = percentile.clamp(0.0, 100.0) / 100.0;

            // Linear interpolation between nearest ranks
            let rank = p * (n - 1) as f64;
            let lower_idx = rank.floor() as usize;
            let upper_idx = (lower_idx + 1).min(n - 1);
            let fraction = rank - lower_idx as f64;

            samples[lower_idx] + fraction * (samples[upper_idx] - samples[lower_idx])
        }
    }
}
