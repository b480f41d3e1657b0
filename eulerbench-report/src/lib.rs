#![warn(missing_docs)]
//! EulerBench Report - Result Model and Output
//!
//! Generates the output formats of the harness:
//! - JSON (machine-readable) for run, perf and info results
//! - Fixed-width timing columns used by the human-readable output

mod format;
mod json;
mod report;

pub use format::{TIMING_WIDTH, format_seconds};
pub use json::{generate_json_listing, generate_json_report};
pub use report::{
    Listing, ListingEntry, ListingStatus, ListingVersion, ProblemInfo, Report, ReportConfig,
    ReportMeta, ReportSummary, RunMode, SystemInfo, TimingMetrics, VersionReport, VersionStatus,
};

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON with full schema
    Json,
    /// Human-readable terminal output
    #[default]
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "human" | "text" => Ok(OutputFormat::Human),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
