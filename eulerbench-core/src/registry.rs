//! Implementation Registry
//!
//! Maps version numbers of one problem to deferred `SolutionHandle`s.
//!
//! ```text
//! units of problem001            registry
//! ─────────────────────          ─────────────────────────────
//! problem001          ──skip
//! version001          ──────▶    1 → handle(problem 1, version001)
//! version12           ──skip     (wrong width)
//! version000          ──skip     (zero is never a version)
//! version003          ──────▶    3 → handle(problem 1, version003)
//! ```
//!
//! Handles are resolved against the `Catalog` only when first used, so a
//! version whose registration is broken still shows up as implemented.

use crate::error::ResolutionError;
use crate::naming::{NamingConvention, NamingScheme};
use crate::{Catalog, ProblemId, VersionDef, VersionId};
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::sync::OnceLock;

/// Deferred reference to a version's entry point.
///
/// The first successful or failed resolution is cached; every handle is
/// meant to be resolved against the one process-wide `Catalog`.
#[derive(Debug, Clone)]
pub struct SolutionHandle {
    problem: ProblemId,
    version: VersionId,
    unit: String,
    problems: NamingConvention,
    resolved: OnceLock<Result<&'static VersionDef, ResolutionError>>,
}

impl SolutionHandle {
    /// Handle for `unit`, which names `version` of `problem`
    pub fn new(
        problem: ProblemId,
        version: VersionId,
        unit: impl Into<String>,
        problems: NamingConvention,
    ) -> Self {
        Self {
            problem,
            version,
            unit: unit.into(),
            problems,
            resolved: OnceLock::new(),
        }
    }

    /// Problem number
    pub fn problem(&self) -> ProblemId {
        self.problem
    }

    /// Version number
    pub fn version(&self) -> VersionId {
        self.version
    }

    /// Unit name, e.g. `version003`
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Whether `resolve` has already run
    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }

    /// Look up the registered entry point
    pub fn resolve(&self, catalog: &Catalog) -> Result<&'static VersionDef, ResolutionError> {
        self.resolved
            .get_or_init(|| self.lookup(catalog))
            .clone()
    }

    fn lookup(&self, catalog: &Catalog) -> Result<&'static VersionDef, ResolutionError> {
        let def = catalog
            .version(self.problem, self.version)
            .ok_or_else(|| ResolutionError::MissingEntryPoint {
                problem: self.problem,
                version: self.version,
                unit: self.unit.clone(),
            })?;

        let count = catalog.registrations(self.problem, self.version);
        if count > 1 {
            return Err(ResolutionError::Ambiguous {
                problem: self.problem,
                version: self.version,
                unit: self.unit.clone(),
                count,
            });
        }

        let claimed_elsewhere = def
            .module_path
            .split("::")
            .filter_map(|segment| self.problems.parse(segment))
            .any(|id| id != self.problem);
        if claimed_elsewhere {
            return Err(ResolutionError::ProblemMismatch {
                problem: self.problem,
                version: self.version,
                unit: self.unit.clone(),
                module: def.module_path.to_string(),
            });
        }

        tracing::debug!(
            problem = self.problem,
            version = self.version,
            file = def.file,
            line = def.line,
            "resolved entry point"
        );
        Ok(def)
    }
}

/// Keep the units that name a version and key them by version number
pub fn discover_versions<S: AsRef<str>>(
    problem: ProblemId,
    units: &[S],
    naming: &NamingScheme,
) -> BTreeMap<VersionId, SolutionHandle> {
    units
        .iter()
        .map(AsRef::as_ref)
        .filter_map(|unit| {
            let version = naming.versions.parse(unit).filter(|&v| v != 0)?;
            Some((
                version,
                SolutionHandle::new(problem, version, unit, naming.problems.clone()),
            ))
        })
        .collect()
}

/// The versions discovered for one problem
#[derive(Debug, Clone, Default)]
pub struct ImplementationRegistry {
    versions: BTreeMap<VersionId, SolutionHandle>,
}

impl ImplementationRegistry {
    /// Discover versions among the units of one problem entry
    pub fn discover<S: AsRef<str>>(problem: ProblemId, units: &[S], naming: &NamingScheme) -> Self {
        Self {
            versions: discover_versions(problem, units, naming),
        }
    }

    /// Whether a version was discovered. Never resolves anything.
    pub fn is_implemented(&self, version: VersionId) -> bool {
        self.versions.contains_key(&version)
    }

    /// Handle of a discovered version
    pub fn get(&self, version: VersionId) -> Option<&SolutionHandle> {
        self.versions.get(&version)
    }

    /// Discovered version numbers, ascending
    pub fn ids(&self) -> impl Iterator<Item = VersionId> + '_ {
        self.versions.keys().copied()
    }

    /// Discovered handles, ascending by version
    pub fn iter(&self) -> btree_map::Iter<'_, VersionId, SolutionHandle> {
        self.versions.iter()
    }

    /// The underlying map
    pub fn as_map(&self) -> &BTreeMap<VersionId, SolutionHandle> {
        &self.versions
    }

    /// Number of discovered versions
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Whether no version was discovered
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

impl<'a> IntoIterator for &'a ImplementationRegistry {
    type Item = (&'a VersionId, &'a SolutionHandle);
    type IntoIter = btree_map::Iter<'a, VersionId, SolutionHandle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
