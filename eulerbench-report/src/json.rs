//! JSON Output

use crate::report::{Listing, Report};

/// Generate a prettified JSON report.
///
/// Serializes the run or perf report into machine-readable JSON format.
pub fn generate_json_report(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Generate a prettified JSON problem listing.
pub fn generate_json_listing(listing: &Listing) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(listing)
}
