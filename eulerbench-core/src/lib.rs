#![warn(missing_docs)]
//! EulerBench Core - Registration and Discovery
//!
//! This crate provides everything the harness needs to find and call a solution:
//! - `ProblemDef` / `VersionDef` registration records (submitted via `#[problem]` / `#[version]`)
//! - `Catalog`, the process-wide registration table built from those records
//! - Naming-convention discovery over a `SolutionStore` (compiled catalog or a directory)
//! - `ProblemResolver` producing a `ProblemDescriptor` per problem id
//! - Range expressions, problem arguments, resource bundles and timing

mod answer;
mod args;
mod catalog;
mod error;
mod measure;
mod naming;
mod problem;
mod range;
mod registry;
mod resources;
mod store;

pub use answer::Answer;
pub use args::ProblemArgs;
pub use catalog::Catalog;
pub use error::{ArgsError, CoreError, RangeError, ResolutionError, ResourceError, SolveError};
pub use measure::Timer;
pub use naming::{NamingConvention, NamingScheme};
pub use problem::{DEFAULT_NAME_WIDTH, ProblemDescriptor, ProblemResolver, ResolveWarning};
pub use range::{MAX_RANGE_VALUES, parse_range};
pub use registry::{ImplementationRegistry, SolutionHandle, discover_versions};
pub use resources::ResourceBundle;
pub use store::{CatalogStore, DirectoryStore, SolutionStore};

pub use eulerbench_macros::{problem, version};

/// Canonical problem number
pub type ProblemId = u32;

/// Version number, unique within one problem
pub type VersionId = u32;

/// Signature every registered `solution` entry point must have
pub type SolutionFn = fn(&ProblemArgs, Option<&ResourceBundle>) -> Result<Answer, SolveError>;

/// A named argument a problem accepts on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamDef {
    /// Argument name, passed as `--name value`
    pub name: &'static str,
    /// Value used when the argument is omitted; `None` makes it required
    pub default: Option<&'static str>,
}

/// Problem metadata registered via `#[problem]`
#[derive(Debug, Clone)]
pub struct ProblemDef {
    /// Problem number
    pub id: ProblemId,
    /// Short title, without the "Problem NNN" prefix
    pub name: &'static str,
    /// Full problem statement
    pub description: &'static str,
    /// Arguments understood by every version of this problem
    pub params: &'static [ParamDef],
    /// Source file path
    pub file: &'static str,
    /// Module path
    pub module_path: &'static str,
}

/// A version (alternative algorithm) registered via `#[version]`
#[derive(Debug, Clone)]
pub struct VersionDef {
    /// Problem this version solves
    pub problem: ProblemId,
    /// Version number
    pub version: VersionId,
    /// Short title, without the "Version NNN" prefix
    pub name: &'static str,
    /// Description of the approach
    pub description: &'static str,
    /// The `solution` entry point
    pub solution: SolutionFn,
    /// Source file path
    pub file: &'static str,
    /// Source line number
    pub line: u32,
    /// Module path
    pub module_path: &'static str,
}

impl VersionDef {
    /// Call the entry point.
    ///
    /// Errors raised by the solution are returned untouched.
    #[inline]
    pub fn invoke(
        &self,
        args: &ProblemArgs,
        resources: Option<&ResourceBundle>,
    ) -> Result<Answer, SolveError> {
        (self.solution)(args, resources)
    }
}

/// Internal re-exports for macro use
#[doc(hidden)]
pub mod internal {
    pub use inventory;
}

// Collect all registered problems and versions
inventory::collect!(ProblemDef);
inventory::collect!(VersionDef);

/// Anchor to prevent LTO from stripping inventory entries
#[used]
#[doc(hidden)]
pub static REGISTRY_ANCHOR: fn() = || {
    for _ in inventory::iter::<ProblemDef> {}
    for _ in inventory::iter::<VersionDef> {}
};
