//! Problem Resolution
//!
//! Turns a problem number into a `ProblemDescriptor`: the problem's metadata
//! (if registered) plus the versions discovered in its storage entry.

use crate::error::CoreError;
use crate::naming::NamingScheme;
use crate::registry::{ImplementationRegistry, SolutionHandle};
use crate::store::SolutionStore;
use crate::{Catalog, ParamDef, ProblemId, VersionId};
use std::collections::BTreeMap;

/// Default limit for display names in listings
pub const DEFAULT_NAME_WIDTH: usize = 65;

/// Non-fatal finding made while resolving a problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveWarning {
    /// The entry exists but its metadata unit is absent or unregistered
    MissingMetadata {
        /// Problem number
        problem: ProblemId,
        /// Expected metadata unit, e.g. `problem007`
        unit: String,
    },
}

impl std::fmt::Display for ResolveWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingMetadata { unit, .. } => {
                write!(f, "no problem metadata registered for {unit}")
            }
        }
    }
}

/// Everything known about one problem for the duration of an invocation
#[derive(Debug, Clone)]
pub struct ProblemDescriptor {
    id: ProblemId,
    number: String,
    name: Option<String>,
    description: String,
    params: &'static [ParamDef],
    registry: ImplementationRegistry,
    warnings: Vec<ResolveWarning>,
}

impl ProblemDescriptor {
    /// Problem number
    pub fn id(&self) -> ProblemId {
        self.id
    }

    /// Zero-padded problem number, e.g. `007`
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Short title, if metadata is registered
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Problem statement; empty without metadata
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Declared arguments; empty without metadata
    pub fn params(&self) -> &'static [ParamDef] {
        self.params
    }

    /// Whether the metadata unit was found and registered
    pub fn has_metadata(&self) -> bool {
        self.name.is_some()
    }

    /// Discovered versions
    pub fn registry(&self) -> &ImplementationRegistry {
        &self.registry
    }

    /// Discovered versions keyed by number
    pub fn versions(&self) -> &BTreeMap<VersionId, SolutionHandle> {
        self.registry.as_map()
    }

    /// Whether a version was discovered
    pub fn is_implemented(&self, version: VersionId) -> bool {
        self.registry.is_implemented(version)
    }

    /// Non-fatal findings
    pub fn warnings(&self) -> &[ResolveWarning] {
        &self.warnings
    }

    /// `Problem NNN - Title`, cut to `limit` characters
    pub fn display_name(&self, limit: usize) -> String {
        let full = match &self.name {
            Some(name) => format!("Problem {} - {}", self.number, name),
            None => format!("Problem {}", self.number),
        };
        full.chars().take(limit).collect()
    }
}

/// Looks problems up in a store and the registration table
pub struct ProblemResolver<'a> {
    catalog: &'a Catalog,
    store: &'a dyn SolutionStore,
    naming: NamingScheme,
}

impl<'a> ProblemResolver<'a> {
    /// Resolver over `store`, resolving metadata from `catalog`
    pub fn new(catalog: &'a Catalog, store: &'a dyn SolutionStore, naming: NamingScheme) -> Self {
        Self {
            catalog,
            store,
            naming,
        }
    }

    /// Registration table used for metadata and entry points
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Naming scheme in effect
    pub fn naming(&self) -> &NamingScheme {
        &self.naming
    }

    /// Build the descriptor of one problem
    pub fn resolve(&self, problem: ProblemId) -> Result<ProblemDescriptor, CoreError> {
        let number = self.naming.problems.number(problem);
        let not_implemented = || CoreError::ProblemNotImplemented {
            problem,
            number: number.clone(),
        };

        let unit = self.naming.problems.format(problem).ok_or_else(not_implemented)?;
        let units = self.store.units(&unit)?.ok_or_else(not_implemented)?;

        let def = units
            .iter()
            .any(|u| *u == unit)
            .then(|| self.catalog.problem(problem))
            .flatten();

        let mut warnings = Vec::new();
        if def.is_none() {
            tracing::warn!(problem, unit = %unit, "problem metadata not found");
            warnings.push(ResolveWarning::MissingMetadata {
                problem,
                unit: unit.clone(),
            });
        }

        let registry = ImplementationRegistry::discover(problem, &units, &self.naming);
        tracing::debug!(
            problem,
            versions = registry.len(),
            store = %self.store.describe(),
            "problem resolved"
        );

        Ok(ProblemDescriptor {
            id: problem,
            number,
            name: def.map(|d| d.name.to_string()),
            description: def.map(|d| d.description.to_string()).unwrap_or_default(),
            params: def.map(|d| d.params).unwrap_or(&[]),
            registry,
            warnings,
        })
    }

    /// Every problem number with an entry in the store, ascending
    pub fn implemented_problems(&self) -> Result<Vec<ProblemId>, CoreError> {
        let mut ids: Vec<ProblemId> = self
            .store
            .problem_units()?
            .iter()
            .filter_map(|unit| self.naming.problems.parse(unit))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        Ok(ids)
    }
}
