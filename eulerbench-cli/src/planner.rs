//! Version Planner
//!
//! Builds the list of versions to dispatch for one problem.
//!
//! Selection options:
//! - No selector: every discovered version, ascending
//! - Range expression (`1..3,5`): exactly the listed numbers, discovered or not
//!
//! Requested versions that were not discovered stay in the plan so the
//! dispatcher can report them as not implemented.

use eulerbench_core::{ProblemDescriptor, ProblemId, RangeError, VersionId, parse_range};

/// Versions to dispatch for one problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionPlan {
    /// Problem the plan belongs to
    pub problem: ProblemId,
    /// Selector as given, `None` for all versions
    pub selector: Option<String>,
    /// Requested version numbers, ascending and distinct
    pub versions: Vec<VersionId>,
}

impl VersionPlan {
    /// Whether nothing was selected
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

/// Build the plan for `problem`
///
/// A malformed selector fails before anything is dispatched.
pub fn plan_versions(
    problem: &ProblemDescriptor,
    selector: Option<&str>,
) -> Result<VersionPlan, RangeError> {
    let versions = match selector {
        Some(expression) => parse_range(expression)?,
        None => problem.registry().ids().collect(),
    };

    tracing::debug!(
        problem = problem.id(),
        selected = versions.len(),
        "versions planned"
    );

    Ok(VersionPlan {
        problem: problem.id(),
        selector: selector.map(str::to_string),
        versions,
    })
}
