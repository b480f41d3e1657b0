#![warn(missing_docs)]
//! EulerBench Statistics
//!
//! Aggregates repeated-run timings of a solution:
//! - `TimingSample`, kept ascending with ordered insertion
//! - Total, min, max, mean, median and sample standard deviation
//! - Percentiles over an ascending sample

mod percentiles;
mod sample;
mod summary;

pub use percentiles::percentile_sorted;
pub use sample::TimingSample;
pub use summary::{SummaryStatistics, compute_summary};
