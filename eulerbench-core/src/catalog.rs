//! Registration Table
//!
//! `Catalog` is the explicit table of every problem and version compiled into
//! the process. It is built once at startup, owns the `&'static` definitions
//! for the lifetime of the process, and is only ever borrowed afterwards.

use crate::{ProblemDef, ProblemId, VersionDef, VersionId};
use std::collections::{BTreeMap, BTreeSet};

/// Table of registered problem metadata and version entry points
#[derive(Debug, Default)]
pub struct Catalog {
    problems: BTreeMap<ProblemId, &'static ProblemDef>,
    versions: BTreeMap<(ProblemId, VersionId), &'static VersionDef>,
    registrations: BTreeMap<(ProblemId, VersionId), usize>,
}

impl Catalog {
    /// Build the table from everything submitted via `#[problem]` and `#[version]`
    pub fn from_inventory() -> Self {
        Self::from_defs(
            inventory::iter::<ProblemDef>,
            inventory::iter::<VersionDef>,
        )
    }

    /// Build the table from explicit definitions
    pub fn from_defs<P, V>(problems: P, versions: V) -> Self
    where
        P: IntoIterator<Item = &'static ProblemDef>,
        V: IntoIterator<Item = &'static VersionDef>,
    {
        let mut catalog = Self::default();

        for def in problems {
            if let Some(existing) = catalog.problems.get(&def.id) {
                tracing::warn!(
                    problem = def.id,
                    kept = existing.file,
                    ignored = def.file,
                    "problem registered twice"
                );
                continue;
            }
            catalog.problems.insert(def.id, def);
        }

        for def in versions {
            let key = (def.problem, def.version);
            *catalog.registrations.entry(key).or_default() += 1;
            catalog.versions.entry(key).or_insert(def);
        }

        tracing::debug!(
            problems = catalog.problems.len(),
            versions = catalog.versions.len(),
            "catalog built"
        );
        catalog
    }

    /// Metadata for a problem, if registered
    pub fn problem(&self, id: ProblemId) -> Option<&'static ProblemDef> {
        self.problems.get(&id).copied()
    }

    /// Entry point for a version, if registered
    pub fn version(&self, problem: ProblemId, version: VersionId) -> Option<&'static VersionDef> {
        self.versions.get(&(problem, version)).copied()
    }

    /// How many definitions claim this problem and version
    pub fn registrations(&self, problem: ProblemId, version: VersionId) -> usize {
        self.registrations
            .get(&(problem, version))
            .copied()
            .unwrap_or(0)
    }

    /// Every problem with metadata or at least one version, ascending
    pub fn problem_ids(&self) -> BTreeSet<ProblemId> {
        self.problems
            .keys()
            .copied()
            .chain(self.versions.keys().map(|(p, _)| *p))
            .collect()
    }

    /// Registered versions of a problem, ascending
    pub fn version_ids(&self, problem: ProblemId) -> impl Iterator<Item = VersionId> + '_ {
        self.versions
            .range((problem, VersionId::MIN)..=(problem, VersionId::MAX))
            .map(|((_, v), _)| *v)
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty() && self.versions.is_empty()
    }
}
