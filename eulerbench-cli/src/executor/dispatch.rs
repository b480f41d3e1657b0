//! Version Dispatch
//!
//! Invokes the planned versions of one problem, strictly one after another on
//! the calling thread, in ascending version order.
//!
//! Requested versions fall into three buckets before anything is invoked:
//! - not discovered: logged and reported as not implemented
//! - discovered but unresolvable: reported as broken, the batch continues
//! - resolved: invoked once (`run`) or `iterations` times (`benchmark`)
//!
//! An error returned by a solution aborts the whole batch.

use crate::planner::VersionPlan;
use eulerbench_core::{
    Answer, Catalog, NamingConvention, ProblemArgs, ProblemDescriptor, ProblemId, ResolutionError,
    ResourceBundle, SolveError, Timer, VersionDef, VersionId,
};
use eulerbench_stats::TimingSample;
use indicatif::{ProgressBar, ProgressStyle};
use thiserror::Error;

/// A solution failed while the batch was running
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The solution returned an error
    #[error("problem {problem}, {unit} failed: {source}")]
    Solve {
        /// Problem number
        problem: ProblemId,
        /// Version number
        version: VersionId,
        /// Unit name of the failing version
        unit: String,
        /// Error returned by the solution
        #[source]
        source: SolveError,
    },
}

/// Result of invoking one version once
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The version returned this answer
    Returned(Answer),
    /// The version was requested but not discovered
    Skipped,
    /// The version was discovered but its entry point could not be resolved
    Broken(ResolutionError),
}

/// Result of timing one version
#[derive(Debug, Clone)]
pub enum BenchOutcome {
    /// Per-iteration wall-clock times in seconds, ascending
    Timed(TimingSample),
    /// The version was requested but not discovered
    Skipped,
    /// The version was discovered but its entry point could not be resolved
    Broken(ResolutionError),
}

enum Lookup {
    Ready(&'static VersionDef),
    Skipped,
    Broken(ResolutionError),
}

/// Runs the versions of one problem against shared arguments and resources
pub struct Dispatcher<'a> {
    catalog: &'a Catalog,
    problem: &'a ProblemDescriptor,
    args: &'a ProblemArgs,
    resources: Option<&'a ResourceBundle>,
    versions: &'a NamingConvention,
    show_progress: bool,
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher with the progress bar disabled
    pub fn new(
        catalog: &'a Catalog,
        problem: &'a ProblemDescriptor,
        args: &'a ProblemArgs,
        resources: Option<&'a ResourceBundle>,
        versions: &'a NamingConvention,
    ) -> Self {
        Self {
            catalog,
            problem,
            args,
            resources,
            versions,
            show_progress: false,
        }
    }

    /// Draw a progress bar on stderr while benchmarking
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Invoke each planned version once
    pub fn run(&self, plan: &VersionPlan) -> Result<Vec<(VersionId, RunOutcome)>, DispatchError> {
        let mut outcomes = Vec::with_capacity(plan.versions.len());

        for &version in &plan.versions {
            let outcome = match self.lookup(version) {
                Lookup::Skipped => RunOutcome::Skipped,
                Lookup::Broken(e) => RunOutcome::Broken(e),
                Lookup::Ready(def) => {
                    let answer = self.invoke(def)?;
                    tracing::debug!(
                        problem = self.problem.id(),
                        version,
                        answer = %answer,
                        "version returned"
                    );
                    RunOutcome::Returned(answer)
                }
            };
            outcomes.push((version, outcome));
        }

        Ok(outcomes)
    }

    /// Invoke each planned version `iterations` times, timing every call
    ///
    /// `iterations` below 1 is treated as 1.
    pub fn benchmark(
        &self,
        plan: &VersionPlan,
        iterations: usize,
    ) -> Result<Vec<(VersionId, BenchOutcome)>, DispatchError> {
        let iterations = iterations.max(1);
        let lookups: Vec<(VersionId, Lookup)> = plan
            .versions
            .iter()
            .map(|&version| (version, self.lookup(version)))
            .collect();

        let runnable = lookups
            .iter()
            .filter(|(_, lookup)| matches!(lookup, Lookup::Ready(_)))
            .count();
        let pb = self.progress_bar((runnable * iterations) as u64);

        let mut outcomes = Vec::with_capacity(lookups.len());
        for (version, lookup) in lookups {
            let outcome = match lookup {
                Lookup::Skipped => BenchOutcome::Skipped,
                Lookup::Broken(e) => BenchOutcome::Broken(e),
                Lookup::Ready(def) => {
                    pb.set_message(self.versions.label(version));
                    let mut sample = TimingSample::with_capacity(iterations);
                    for _ in 0..iterations {
                        let timer = Timer::start();
                        let result = def.invoke(self.args, self.resources);
                        let elapsed = timer.stop();
                        if let Err(e) = result {
                            pb.abandon();
                            return Err(self.solve_error(def, e));
                        }
                        sample.record(elapsed);
                        pb.inc(1);
                    }
                    tracing::debug!(
                        problem = self.problem.id(),
                        version,
                        iterations,
                        "version timed"
                    );
                    BenchOutcome::Timed(sample)
                }
            };
            outcomes.push((version, outcome));
        }

        pb.finish_and_clear();
        Ok(outcomes)
    }

    fn lookup(&self, version: VersionId) -> Lookup {
        let Some(handle) = self.problem.registry().get(version) else {
            tracing::warn!(
                problem = self.problem.id(),
                version,
                "{} not implemented",
                self.versions.label(version)
            );
            return Lookup::Skipped;
        };

        match handle.resolve(self.catalog) {
            Ok(def) => Lookup::Ready(def),
            Err(e) => {
                tracing::warn!(problem = self.problem.id(), version, "{e}");
                Lookup::Broken(e)
            }
        }
    }

    fn invoke(&self, def: &VersionDef) -> Result<Answer, DispatchError> {
        def.invoke(self.args, self.resources)
            .map_err(|e| self.solve_error(def, e))
    }

    fn solve_error(&self, def: &VersionDef, source: SolveError) -> DispatchError {
        DispatchError::Solve {
            problem: def.problem,
            version: def.version,
            unit: self.versions.label(def.version),
            source,
        }
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.show_progress || len == 0 {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(len);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::plan_versions;
    use crate::tests_support::{resolve, test_catalog};
    use eulerbench_core::NamingScheme;

    fn args(problem: &ProblemDescriptor, raw: &[&str]) -> ProblemArgs {
        ProblemArgs::parse(problem.params(), raw).unwrap()
    }

    #[test]
    fn test_run_mixed_plan() {
        let catalog = test_catalog();
        let problem = resolve(&catalog, 1);
        let naming = NamingScheme::default();
        let args = args(&problem, &["--number", "5"]);
        let dispatcher = Dispatcher::new(&catalog, &problem, &args, None, &naming.versions);

        let plan = plan_versions(&problem, Some("1..5,1000")).unwrap();
        let outcomes = dispatcher.run(&plan).unwrap();

        let versions: Vec<_> = outcomes.iter().map(|(v, _)| *v).collect();
        assert_eq!(versions, vec![1, 2, 3, 4, 5, 1000]);
        assert_eq!(outcomes[0].1, RunOutcome::Returned(Answer::from(10u64)));
        assert_eq!(outcomes[1].1, RunOutcome::Returned(Answer::from(42u32)));
        assert_eq!(outcomes[2].1, RunOutcome::Skipped);
        assert!(matches!(
            outcomes[3].1,
            RunOutcome::Broken(ResolutionError::Ambiguous { count: 2, .. })
        ));
        assert_eq!(outcomes[4].1, RunOutcome::Skipped);
        assert_eq!(outcomes[5].1, RunOutcome::Skipped);
    }

    #[test]
    fn test_run_uses_defaults() {
        let catalog = test_catalog();
        let problem = resolve(&catalog, 1);
        let naming = NamingScheme::default();
        let args = args(&problem, &[]);
        let dispatcher = Dispatcher::new(&catalog, &problem, &args, None, &naming.versions);

        let plan = plan_versions(&problem, Some("1")).unwrap();
        let outcomes = dispatcher.run(&plan).unwrap();
        assert_eq!(outcomes, vec![(1, RunOutcome::Returned(Answer::from("42")))]);
    }

    #[test]
    fn test_solve_error_aborts_batch() {
        let catalog = test_catalog();
        let problem = resolve(&catalog, 2);
        let naming = NamingScheme::default();
        let args = args(&problem, &[]);
        let dispatcher = Dispatcher::new(&catalog, &problem, &args, None, &naming.versions);

        let plan = plan_versions(&problem, None).unwrap();
        let err = dispatcher.run(&plan).unwrap_err();
        let DispatchError::Solve {
            problem,
            version,
            unit,
            source,
        } = err;
        assert_eq!((problem, version), (2, 1));
        assert_eq!(unit, "version001");
        assert_eq!(source, SolveError::NoSolution);

        assert!(dispatcher.benchmark(&plan, 3).is_err());
    }

    #[test]
    fn test_benchmark_collects_sorted_samples() {
        let catalog = test_catalog();
        let problem = resolve(&catalog, 1);
        let naming = NamingScheme::default();
        let args = args(&problem, &[]);
        let dispatcher = Dispatcher::new(&catalog, &problem, &args, None, &naming.versions);

        let plan = plan_versions(&problem, Some("1,3")).unwrap();
        let outcomes = dispatcher.benchmark(&plan, 5).unwrap();

        assert_eq!(outcomes.len(), 2);
        match &outcomes[0].1 {
            BenchOutcome::Timed(sample) => {
                assert_eq!(sample.len(), 5);
                assert!(sample.as_slice().windows(2).all(|w| w[0] <= w[1]));
            }
            other => panic!("expected timings, got {other:?}"),
        }
        assert!(matches!(outcomes[1].1, BenchOutcome::Skipped));
    }

    #[test]
    fn test_benchmark_clamps_iterations() {
        let catalog = test_catalog();
        let problem = resolve(&catalog, 1);
        let naming = NamingScheme::default();
        let args = args(&problem, &[]);
        let dispatcher = Dispatcher::new(&catalog, &problem, &args, None, &naming.versions);

        let plan = plan_versions(&problem, Some("2")).unwrap();
        let outcomes = dispatcher.benchmark(&plan, 0).unwrap();
        match &outcomes[0].1 {
            BenchOutcome::Timed(sample) => assert_eq!(sample.len(), 1),
            other => panic!("expected timings, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_plan() {
        let catalog = test_catalog();
        let problem = resolve(&catalog, 1);
        let naming = NamingScheme::default();
        let args = args(&problem, &[]);
        let dispatcher = Dispatcher::new(&catalog, &problem, &args, None, &naming.versions);

        let plan = plan_versions(&problem, Some("9..2")).unwrap();
        assert!(dispatcher.run(&plan).unwrap().is_empty());
        assert!(dispatcher.benchmark(&plan, 3).unwrap().is_empty());
    }
}
