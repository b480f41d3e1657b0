//! Report Building
//!
//! Turns dispatch outcomes into `Report`s and problem lookups into a `Listing`.

use super::dispatch::{BenchOutcome, RunOutcome};
use super::formatting::VERSION_INDENT;
use super::metadata::build_report_meta;
use eulerbench_core::{
    Catalog, CoreError, NamingConvention, ProblemDescriptor, ProblemId, ProblemResolver,
    SolutionHandle, VersionId,
};
use eulerbench_report::{
    Listing, ListingEntry, ListingStatus, ListingVersion, ProblemInfo, Report, ReportConfig,
    ReportSummary, RunMode, TimingMetrics, VersionReport, VersionStatus,
};
use eulerbench_stats::SummaryStatistics;

/// What every report of one problem shares
pub struct ReportContext<'a> {
    /// Registration table the problem was resolved against
    pub catalog: &'a Catalog,
    /// The problem that was dispatched
    pub problem: &'a ProblemDescriptor,
    /// Version naming convention
    pub versions: &'a NamingConvention,
    /// Request parameters
    pub config: ReportConfig,
}

impl ReportContext<'_> {
    fn problem_info(&self) -> ProblemInfo {
        ProblemInfo {
            id: self.problem.id(),
            number: self.problem.number().to_string(),
            name: self.problem.name().map(str::to_string),
            display_name: self.problem.display_name(usize::MAX),
            description: self.problem.description().to_string(),
        }
    }

    fn version_report(&self, version: VersionId, status: VersionStatus) -> VersionReport {
        let name = self
            .problem
            .registry()
            .get(version)
            .and_then(|handle| handle.resolve(self.catalog).ok())
            .map(|def| def.name)
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        VersionReport {
            version,
            unit: self.versions.label(version),
            name,
            status,
            answer: None,
            metrics: None,
            failure: None,
        }
    }

    fn finish(self, mode: RunMode, versions: Vec<VersionReport>, total_duration_ms: f64) -> Report {
        Report {
            problem: self.problem_info(),
            mode,
            summary: ReportSummary::from_versions(&versions, total_duration_ms),
            versions,
            meta: build_report_meta(self.config),
        }
    }
}

/// Build the report of a `run` batch
pub fn build_run_report(
    ctx: ReportContext<'_>,
    outcomes: &[(VersionId, RunOutcome)],
    total_duration_ms: f64,
) -> Report {
    let versions = outcomes
        .iter()
        .map(|(version, outcome)| match outcome {
            RunOutcome::Returned(answer) => VersionReport {
                answer: Some(answer.to_string()),
                ..ctx.version_report(*version, VersionStatus::Returned)
            },
            RunOutcome::Skipped => ctx.version_report(*version, VersionStatus::NotImplemented),
            RunOutcome::Broken(e) => VersionReport {
                failure: Some(e.to_string()),
                ..ctx.version_report(*version, VersionStatus::Broken)
            },
        })
        .collect();

    ctx.finish(RunMode::Run, versions, total_duration_ms)
}

/// Build the report of a `perf` batch
///
/// `stats` must come from `compute_statistics` over the same outcomes.
pub fn build_perf_report(
    ctx: ReportContext<'_>,
    outcomes: &[(VersionId, BenchOutcome)],
    stats: &[(VersionId, Option<SummaryStatistics>)],
    total_duration_ms: f64,
) -> Report {
    let versions = outcomes
        .iter()
        .zip(stats)
        .map(|((version, outcome), (_, summary))| match outcome {
            BenchOutcome::Timed(_) => VersionReport {
                metrics: summary.as_ref().map(TimingMetrics::from),
                ..ctx.version_report(*version, VersionStatus::Timed)
            },
            BenchOutcome::Skipped => ctx.version_report(*version, VersionStatus::NotImplemented),
            BenchOutcome::Broken(e) => VersionReport {
                failure: Some(e.to_string()),
                ..ctx.version_report(*version, VersionStatus::Broken)
            },
        })
        .collect();

    ctx.finish(RunMode::Perf, versions, total_duration_ms)
}

/// `Version001 - Title`, or the capitalized unit name when the title is empty
pub fn version_display_name(unit: &str, name: Option<&str>) -> String {
    let mut chars = unit.chars();
    let heading: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    match name {
        Some(name) if !name.is_empty() => format!("{heading} - {name}"),
        _ => heading,
    }
}

fn truncate(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

/// `limit` bounds the indented line, so the name gets the indent's width less
fn listing_version(catalog: &Catalog, handle: &SolutionHandle, limit: usize) -> ListingVersion {
    let display_name = match handle.resolve(catalog) {
        Ok(def) => version_display_name(handle.unit(), Some(def.name)),
        Err(e) => format!("{} - BROKEN ({e})", version_display_name(handle.unit(), None)),
    };
    ListingVersion {
        version: handle.version(),
        display_name: truncate(&display_name, limit.saturating_sub(VERSION_INDENT.len())),
    }
}

/// Build the `info` listing for `ids`
///
/// Problems without an entry are listed as not implemented; any other lookup
/// failure aborts the listing.
pub fn build_listing(
    resolver: &ProblemResolver<'_>,
    ids: &[ProblemId],
    verbose: bool,
    name_width: usize,
) -> Result<Listing, CoreError> {
    let mut listing = Listing::default();

    for &id in ids {
        let number = resolver.naming().problems.number(id);
        let entry = match resolver.resolve(id) {
            Ok(problem) => {
                let (status, display_name) = if problem.has_metadata() {
                    (ListingStatus::Implemented, problem.display_name(name_width))
                } else {
                    listing.incomplete = true;
                    (
                        ListingStatus::MissingMetadata,
                        truncate(&format!("Problem {number} - NO PROBLEM FILE FOUND"), name_width),
                    )
                };
                let versions = if verbose {
                    problem
                        .registry()
                        .iter()
                        .map(|(_, handle)| listing_version(resolver.catalog(), handle, name_width))
                        .collect()
                } else {
                    Vec::new()
                };
                ListingEntry {
                    id,
                    number,
                    status,
                    display_name,
                    versions,
                }
            }
            Err(CoreError::ProblemNotImplemented { .. }) => ListingEntry {
                id,
                display_name: truncate(&format!("Problem {number} - NOT IMPLEMENTED"), name_width),
                number,
                status: ListingStatus::NotImplemented,
                versions: Vec::new(),
            },
            Err(e) => return Err(e),
        };
        listing.problems.push(entry);
    }

    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::dispatch::Dispatcher;
    use crate::planner::plan_versions;
    use crate::tests_support::{resolve, test_catalog};
    use eulerbench_core::{CatalogStore, NamingScheme, ProblemArgs};

    fn context<'a>(
        catalog: &'a Catalog,
        problem: &'a ProblemDescriptor,
        naming: &'a NamingScheme,
    ) -> ReportContext<'a> {
        ReportContext {
            catalog,
            problem,
            versions: &naming.versions,
            config: ReportConfig::default(),
        }
    }

    #[test]
    fn test_version_display_name() {
        assert_eq!(
            version_display_name("version001", Some("Brute Force")),
            "Version001 - Brute Force"
        );
        assert_eq!(version_display_name("version002", Some("")), "Version002");
        assert_eq!(version_display_name("version003", None), "Version003");
    }

    #[test]
    fn test_run_report() {
        let catalog = test_catalog();
        let problem = resolve(&catalog, 1);
        let naming = NamingScheme::default();
        let args = ProblemArgs::parse::<&str>(problem.params(), &[]).unwrap();
        let plan = plan_versions(&problem, Some("1..4")).unwrap();
        let outcomes = Dispatcher::new(&catalog, &problem, &args, None, &naming.versions)
            .run(&plan)
            .unwrap();

        let report = build_run_report(context(&catalog, &problem, &naming), &outcomes, 1.0);
        assert_eq!(report.mode, RunMode::Run);
        assert_eq!(report.problem.display_name, "Problem 001 - Doubling");

        let first = &report.versions[0];
        assert_eq!(first.status, VersionStatus::Returned);
        assert_eq!(first.answer.as_deref(), Some("42"));
        assert_eq!(first.name.as_deref(), Some("Doubled"));

        assert_eq!(report.versions[2].status, VersionStatus::NotImplemented);
        assert_eq!(report.versions[2].unit, "version003");
        assert_eq!(report.versions[3].status, VersionStatus::Broken);
        assert!(report.versions[3].failure.is_some());

        assert_eq!(report.summary.requested, 4);
        assert_eq!(report.summary.executed, 2);
        assert_eq!(report.summary.broken, 1);
    }

    #[test]
    fn test_perf_report_carries_metrics() {
        let catalog = test_catalog();
        let problem = resolve(&catalog, 1);
        let naming = NamingScheme::default();
        let args = ProblemArgs::parse::<&str>(problem.params(), &[]).unwrap();
        let plan = plan_versions(&problem, Some("2,3")).unwrap();
        let outcomes = Dispatcher::new(&catalog, &problem, &args, None, &naming.versions)
            .benchmark(&plan, 4)
            .unwrap();
        let stats = crate::executor::compute_statistics(&outcomes);

        let report = build_perf_report(context(&catalog, &problem, &naming), &outcomes, &stats, 1.0);
        assert_eq!(report.mode, RunMode::Perf);
        let metrics = report.versions[0].metrics.as_ref().unwrap();
        assert_eq!(metrics.samples, 4);
        assert!(metrics.min_s <= metrics.max_s);
        assert!(report.versions[1].metrics.is_none());
    }

    #[test]
    fn test_listing() {
        let catalog = test_catalog();
        let naming = NamingScheme::default();
        let store = CatalogStore::new(&catalog, &naming);
        let resolver = ProblemResolver::new(&catalog, &store, naming);

        let listing = build_listing(&resolver, &[1, 3], true, 65).unwrap();
        assert!(!listing.incomplete);
        assert_eq!(listing.problems.len(), 2);

        let first = &listing.problems[0];
        assert_eq!(first.status, ListingStatus::Implemented);
        assert_eq!(first.display_name, "Problem 001 - Doubling");
        assert_eq!(first.versions.len(), 3);
        assert_eq!(first.versions[0].display_name, "Version001 - Doubled");
        assert!(first.versions[2].display_name.starts_with("Version004 - BROKEN"));

        let missing = &listing.problems[1];
        assert_eq!(missing.status, ListingStatus::NotImplemented);
        assert_eq!(missing.display_name, "Problem 003 - NOT IMPLEMENTED");
    }

    #[test]
    fn test_listing_missing_metadata_and_width() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("problem009");
        std::fs::create_dir(&dir).unwrap();
        std::fs::write(dir.join("version001.rs"), "").unwrap();

        let catalog = test_catalog();
        let store = eulerbench_core::DirectoryStore::new(tmp.path());
        let resolver = ProblemResolver::new(&catalog, &store, NamingScheme::default());

        let listing = build_listing(&resolver, &[9], false, 20).unwrap();
        assert!(listing.incomplete);
        assert_eq!(listing.problems[0].status, ListingStatus::MissingMetadata);
        assert_eq!(listing.problems[0].display_name, "Problem 009 - NO PRO");
        assert!(listing.problems[0].versions.is_empty());
    }

    #[test]
    fn test_indented_versions_fit_width() {
        let catalog = test_catalog();
        let naming = NamingScheme::default();
        let store = CatalogStore::new(&catalog, &naming);
        let resolver = ProblemResolver::new(&catalog, &store, naming);

        let listing = build_listing(&resolver, &[1], true, 16).unwrap();
        assert_eq!(listing.problems[0].display_name, "Problem 001 - Do");
        assert_eq!(listing.problems[0].versions[0].display_name, "Version001 -");

        let output = crate::executor::format_listing(&listing);
        assert!(output.contains("\n    Version001 -\n"));
        let entries = output
            .lines()
            .filter(|line| line.starts_with("Problem") || line.starts_with(' '));
        for line in entries {
            assert!(line.chars().count() <= 16, "{line:?} is wider than 16");
        }
    }
}
