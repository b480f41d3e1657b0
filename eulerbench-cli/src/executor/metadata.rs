//! System Metadata Collection
//!
//! Collects the environment a report was produced in.
//!
//! ## Collected Data
//!
//! - **OS**: Operating system name and architecture
//! - **CPU**: Core count
//! - **Timestamp**: UTC time of report generation
//! - **Request**: Version selector, iteration count and problem arguments

use chrono::Utc;
use eulerbench_report::{ReportConfig, ReportMeta, SystemInfo};

/// Report schema version written to JSON output
pub const SCHEMA_VERSION: u32 = 1;

/// Build report metadata including system info and the request parameters
pub fn build_report_meta(config: ReportConfig) -> ReportMeta {
    let system = SystemInfo {
        os: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        cpu_cores: num_cpus(),
    };

    ReportMeta {
        schema_version: SCHEMA_VERSION,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        system,
        config,
    }
}

/// Get number of available CPU cores
fn num_cpus() -> u32 {
    std::thread::available_parallelism()
        .map(|n| n.get() as u32)
        .unwrap_or(1)
}
