#![warn(missing_docs)]
//! # EulerBench
//!
//! Run, time and list alternative solutions to Project Euler problems.
//!
//! EulerBench keeps several implementations ("versions") of every problem side
//! by side and lets you compare them:
//! - **Discovery**: problems and versions are found by naming convention
//!   (`problem001`, `version002`), either in the compiled-in catalog or in a
//!   directory of solution files
//! - **Registration**: `#[problem]` and `#[version]` attach metadata and entry
//!   points at compile time, no central list to maintain
//! - **Run**: invoke selected versions once and print their answers
//! - **Perf**: time selected versions over many iterations and summarize
//!   total, min, mean, max, median and standard deviation
//! - **Info**: list implemented problems and their versions
//!
//! ## Writing a Solution
//!
//! ```ignore
//! use eulerbench::{Answer, ProblemArgs, ResourceBundle, SolveError, problem, version};
//!
//! /// Find the sum of all the multiples of 3 or 5 below 1000.
//! #[problem(id = 1, name = "Multiples of 3 and 5", params = ["number=1000"])]
//! pub struct Problem001;
//!
//! /// Brute force, iterate through all integers below the limit.
//! #[version(problem = 1, id = 1, name = "Brute Force, Iterative")]
//! pub fn solution(args: &ProblemArgs, _: Option<&ResourceBundle>) -> Result<Answer, SolveError> {
//!     let number: u64 = args.get("number")?;
//!     Ok((1..number).filter(|n| n % 3 == 0 || n % 5 == 0).sum::<u64>().into())
//! }
//! ```
//!
//! ## Command Line
//!
//! ```text
//! euler info -v
//! euler run -p 1 -v 1..4 -- --number 1000
//! euler perf -p 4 -c 10 -- --digits 3
//! ```

// Re-export core types
pub use eulerbench_core::{
    Answer, Catalog, NamingScheme, ParamDef, ProblemArgs, ProblemDef, ProblemDescriptor,
    ProblemId, ProblemResolver, ResourceBundle, SolveError, VersionDef, VersionId, parse_range,
};

// Re-export macros
pub use eulerbench_core::{problem, version};

// Re-export stats
pub use eulerbench_stats::{SummaryStatistics, TimingSample, compute_summary};

// Re-export report types
pub use eulerbench_report::{Listing, OutputFormat, Report, VersionStatus};

// Re-export the CLI entry points
pub use eulerbench_cli::{Cli, Commands, EulerConfig, run_with_cli};

/// Keep the bundled solutions linked; see `eulerbench_solutions::link`
pub use eulerbench_solutions::link;

/// Run the `euler` command line with the bundled solutions.
///
/// ```ignore
/// fn main() -> anyhow::Result<()> {
///     eulerbench::run()
/// }
/// ```
pub fn run() -> anyhow::Result<()> {
    let problems = link();
    tracing::trace!(count = problems.len(), "bundled solutions linked");
    eulerbench_cli::run()
}
