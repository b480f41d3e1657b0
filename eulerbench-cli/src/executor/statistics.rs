//! Statistics Computation
//!
//! Summary statistics for timed versions, computed after dispatch finishes.
//!
//! A perf run times a handful of versions, so they are summarized in order on
//! the calling thread. Each timed version yields:
//! - Total, min, max of its iterations
//! - Mean and median
//! - Sample standard deviation (0 for a single iteration)

use super::dispatch::BenchOutcome;
use eulerbench_core::VersionId;
use eulerbench_stats::SummaryStatistics;

/// Compute statistics for benchmark outcomes
///
/// Returns one entry per outcome, in the same order. Versions that were not
/// timed (skipped or broken) map to `None`.
pub fn compute_statistics(
    outcomes: &[(VersionId, BenchOutcome)],
) -> Vec<(VersionId, Option<SummaryStatistics>)> {
    outcomes
        .iter()
        .map(|(version, outcome)| match outcome {
            BenchOutcome::Timed(sample) => (*version, sample.summary()),
            BenchOutcome::Skipped | BenchOutcome::Broken(_) => (*version, None),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use eulerbench_stats::TimingSample;

    #[test]
    fn test_statistics_follow_outcomes() {
        let sample: TimingSample = [0.3, 0.1, 0.2].into_iter().collect();
        let outcomes = vec![
            (1, BenchOutcome::Timed(sample)),
            (2, BenchOutcome::Skipped),
        ];

        let stats = compute_statistics(&outcomes);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].0, 1);
        let summary = stats[0].1.as_ref().unwrap();
        assert_eq!(summary.sample_count, 3);
        assert!((summary.median - 0.2).abs() < 1e-12);
        assert_eq!(stats[1], (2, None));
    }

    #[test]
    fn test_single_iteration_has_zero_deviation() {
        let sample: TimingSample = [0.5].into_iter().collect();
        let stats = compute_statistics(&[(7, BenchOutcome::Timed(sample))]);
        assert_eq!(stats[0].1.as_ref().unwrap().std_dev, 0.0);
    }
}
