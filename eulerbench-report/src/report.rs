//! Report Data Structures

use chrono::{DateTime, Utc};
use eulerbench_stats::SummaryStatistics;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome of one `run` or `perf` invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub meta: ReportMeta,
    pub problem: ProblemInfo,
    pub mode: RunMode,
    pub versions: Vec<VersionReport>,
    pub summary: ReportSummary,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    pub schema_version: u32,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub system: SystemInfo,
    pub config: ReportConfig,
}

/// Request parameters captured in report metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Version selector as given, `None` for all versions
    pub selector: Option<String>,
    /// Iterations per version (perf only)
    pub iterations: Option<usize>,
    /// Problem arguments after defaults were applied
    pub args: BTreeMap<String, String>,
}

/// System information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    pub os: String,
    pub arch: String,
    pub cpu_cores: u32,
}

/// The problem a report is about
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemInfo {
    pub id: u32,
    pub number: String,
    pub name: Option<String>,
    pub display_name: String,
    pub description: String,
}

/// Which command produced the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Each version invoked once, answers reported
    Run,
    /// Each version timed over several iterations
    Perf,
}

/// Result for one requested version
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionReport {
    pub version: u32,
    pub unit: String,
    pub name: Option<String>,
    pub status: VersionStatus,
    pub answer: Option<String>,
    pub metrics: Option<TimingMetrics>,
    pub failure: Option<String>,
}

/// Per-version status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionStatus {
    /// Invoked once and returned an answer
    Returned,
    /// Timed over the requested iterations
    Timed,
    /// Requested but not discovered
    NotImplemented,
    /// Discovered but its entry point could not be resolved
    Broken,
}

/// Timing metrics of one version, in seconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingMetrics {
    pub samples: usize,
    pub total_s: f64,
    pub min_s: f64,
    pub mean_s: f64,
    pub max_s: f64,
    pub median_s: f64,
    pub std_dev_s: f64,
}

impl From<&SummaryStatistics> for TimingMetrics {
    fn from(stats: &SummaryStatistics) -> Self {
        Self {
            samples: stats.sample_count,
            total_s: stats.total,
            min_s: stats.min,
            mean_s: stats.mean,
            max_s: stats.max,
            median_s: stats.median,
            std_dev_s: stats.std_dev,
        }
    }
}

/// Report summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub requested: usize,
    pub executed: usize,
    pub not_implemented: usize,
    pub broken: usize,
    pub total_duration_ms: f64,
}

impl ReportSummary {
    /// Tally statuses of a version list
    pub fn from_versions(versions: &[VersionReport], total_duration_ms: f64) -> Self {
        let mut summary = Self {
            requested: versions.len(),
            total_duration_ms,
            ..Self::default()
        };
        for version in versions {
            match version.status {
                VersionStatus::Returned | VersionStatus::Timed => summary.executed += 1,
                VersionStatus::NotImplemented => summary.not_implemented += 1,
                VersionStatus::Broken => summary.broken += 1,
            }
        }
        summary
    }
}

/// Output of the `info` command
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Listing {
    pub problems: Vec<ListingEntry>,
    /// Whether any listed problem lacks its metadata
    pub incomplete: bool,
}

/// One problem in a listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingEntry {
    pub id: u32,
    pub number: String,
    pub status: ListingStatus,
    pub display_name: String,
    pub versions: Vec<ListingVersion>,
}

/// Implementation state of a listed problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    /// Entry and metadata present
    Implemented,
    /// Entry present, metadata missing
    MissingMetadata,
    /// Selected but no entry exists
    NotImplemented,
}

/// One version in a verbose listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingVersion {
    pub version: u32,
    pub display_name: String,
}
