//! Output Formatting
//!
//! Human-readable output for reports and listings.
//!
//! Generates terminal-friendly output with:
//! - The problem's display name as a heading
//! - One line per requested version for `run` (answer, not implemented, broken)
//! - A fixed-width timing block per timed version for `perf`
//! - The problem listing of `info`, with a warning when metadata is missing

use super::report::version_display_name;
use eulerbench_report::{
    Listing, Report, RunMode, TIMING_WIDTH, TimingMetrics, VersionReport, VersionStatus,
    format_seconds,
};
use std::fmt::Write;

/// Prefix of each version line under its problem in the `info` listing
pub const VERSION_INDENT: &str = "    ";

/// Heading of the `info` listing
pub const LISTING_HEADER: &str = "[Project Euler Solution Implementations]";

/// Printed after a listing that contains problems without metadata
pub const INCOMPLETE_WARNING: &str =
    "WARNING: Some problems are not implemented properly. Check that each problem registers its metadata.";

/// Format a report for human-readable terminal display
pub fn format_human_output(report: &Report) -> String {
    let mut output = String::new();
    output.push_str(&report.problem.display_name);
    output.push('\n');

    for version in &report.versions {
        match (report.mode, version.status) {
            (_, VersionStatus::NotImplemented) => {
                let _ = writeln!(output, "  {} - not implemented", version.unit);
            }
            (_, VersionStatus::Broken) => {
                let _ = writeln!(
                    output,
                    "  {} - broken: {}",
                    version.unit,
                    version.failure.as_deref().unwrap_or("unresolved entry point")
                );
            }
            (RunMode::Run, _) => {
                let _ = writeln!(
                    output,
                    "  {} - returned '{}'",
                    version.unit,
                    version.answer.as_deref().unwrap_or_default()
                );
            }
            (RunMode::Perf, _) => format_timed_version(&mut output, version),
        }
    }

    output
}

fn format_timed_version(output: &mut String, version: &VersionReport) {
    let _ = writeln!(
        output,
        "  {}",
        version_display_name(&version.unit, version.name.as_deref())
    );
    let Some(metrics) = &version.metrics else {
        let _ = writeln!(output, "    no timings recorded");
        return;
    };
    format_metrics(output, metrics);
}

fn format_metrics(output: &mut String, metrics: &TimingMetrics) {
    let rows = [
        ("total runtime", metrics.total_s),
        ("min.  runtime", metrics.min_s),
        ("avg.  runtime", metrics.mean_s),
        ("max.  runtime", metrics.max_s),
        ("med.  runtime", metrics.median_s),
    ];
    for (label, seconds) in rows {
        let _ = writeln!(output, "    {label}   {}  seconds", format_seconds(seconds));
    }

    // label column is 4 wider than the runtime rows, so the value column shrinks
    let _ = writeln!(
        output,
        "    standard deviation{:>width$}  seconds",
        format!("{:.6}", metrics.std_dev_s),
        width = TIMING_WIDTH - 2
    );
}

/// Format the `info` listing
pub fn format_listing(listing: &Listing) -> String {
    let mut output = String::new();
    output.push('\n');
    output.push_str(LISTING_HEADER);
    output.push_str("\n\n");

    for problem in &listing.problems {
        output.push_str(&problem.display_name);
        output.push('\n');
        for version in &problem.versions {
            let _ = writeln!(output, "{VERSION_INDENT}{}", version.display_name);
        }
    }

    if listing.incomplete {
        output.push('\n');
        output.push_str(INCOMPLETE_WARNING);
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use eulerbench_report::{
        ListingEntry, ListingStatus, ListingVersion, ProblemInfo, ReportConfig, ReportMeta,
        ReportSummary, SystemInfo,
    };

    fn report(mode: RunMode, versions: Vec<VersionReport>) -> Report {
        Report {
            meta: ReportMeta {
                schema_version: 1,
                version: "0.1.0".into(),
                timestamp: chrono::Utc::now(),
                system: SystemInfo {
                    os: "linux".into(),
                    arch: "x86_64".into(),
                    cpu_cores: 1,
                },
                config: ReportConfig::default(),
            },
            problem: ProblemInfo {
                id: 1,
                number: "001".into(),
                name: Some("Multiples of 3 and 5".into()),
                display_name: "Problem 001 - Multiples of 3 and 5".into(),
                description: String::new(),
            },
            mode,
            versions,
            summary: ReportSummary::default(),
        }
    }

    fn version(version: u32, status: VersionStatus) -> VersionReport {
        VersionReport {
            version,
            unit: format!("version{version:03}"),
            name: Some("Brute Force".into()),
            status,
            answer: None,
            metrics: None,
            failure: None,
        }
    }

    #[test]
    fn test_run_output() {
        let returned = VersionReport {
            answer: Some("233168".into()),
            ..version(1, VersionStatus::Returned)
        };
        let output = format_human_output(&report(
            RunMode::Run,
            vec![returned, version(5, VersionStatus::NotImplemented)],
        ));

        assert_eq!(
            output,
            "Problem 001 - Multiples of 3 and 5\n  version001 - returned '233168'\n  version005 - not implemented\n"
        );
    }

    #[test]
    fn test_perf_output_alignment() {
        let timed = VersionReport {
            metrics: Some(TimingMetrics {
                samples: 3,
                total_s: 1234.5,
                min_s: 0.25,
                mean_s: 0.5,
                max_s: 1.0,
                median_s: 0.5,
                std_dev_s: 0.125,
            }),
            ..version(1, VersionStatus::Timed)
        };
        let output = format_human_output(&report(RunMode::Perf, vec![timed]));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[1], "  Version001 - Brute Force");
        assert_eq!(lines[2], "    total runtime           1 234.500000  seconds");
        assert_eq!(lines[5], "    max.  runtime               1.000000  seconds");
        assert_eq!(lines[7], "    standard deviation          0.125000  seconds");
        // every value column ends at the same offset
        assert!(lines[2..].iter().all(|l| l.len() == lines[2].len()));
    }

    #[test]
    fn test_broken_version_line() {
        let broken = VersionReport {
            failure: Some("registered 2 times".into()),
            ..version(4, VersionStatus::Broken)
        };
        let output = format_human_output(&report(RunMode::Perf, vec![broken]));
        assert!(output.ends_with("  version004 - broken: registered 2 times\n"));
    }

    #[test]
    fn test_listing_output() {
        let listing = Listing {
            problems: vec![
                ListingEntry {
                    id: 1,
                    number: "001".into(),
                    status: ListingStatus::Implemented,
                    display_name: "Problem 001 - Multiples of 3 and 5".into(),
                    versions: vec![ListingVersion {
                        version: 1,
                        display_name: "Version001 - Brute Force".into(),
                    }],
                },
                ListingEntry {
                    id: 2,
                    number: "002".into(),
                    status: ListingStatus::MissingMetadata,
                    display_name: "Problem 002 - NO PROBLEM FILE FOUND".into(),
                    versions: Vec::new(),
                },
            ],
            incomplete: true,
        };

        let output = format_listing(&listing);
        assert!(output.starts_with("\n[Project Euler Solution Implementations]\n\n"));
        assert!(output.contains("Problem 001 - Multiples of 3 and 5\n    Version001 - Brute Force\n"));
        assert!(output.ends_with(&format!("\n{INCOMPLETE_WARNING}\n")));
    }
}
