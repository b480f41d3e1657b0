//! Solution Storage
//!
//! A store is anything that can list problem entries and the units inside
//! them. Discovery only ever looks at names; what a unit contains is decided
//! later, when its handle is resolved against the `Catalog`.
//!
//! ```text
//! solutions/                 DirectoryStore
//! ├── problem001/            problem entry
//! │   ├── problem001.rs      metadata unit
//! │   ├── version001.rs      version unit
//! │   └── notes.md           ignored
//! └── scratch/               entry that matches no problem id
//! ```

use crate::Catalog;
use crate::error::CoreError;
use crate::naming::NamingScheme;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Storage location of problem entries and their units
pub trait SolutionStore {
    /// Short description for log lines
    fn describe(&self) -> String;

    /// Names of all problem entries, in ascending order
    fn problem_units(&self) -> Result<Vec<String>, CoreError>;

    /// Names of the units directly inside a problem entry, or `None` if the
    /// entry does not exist
    fn units(&self, problem_unit: &str) -> Result<Option<Vec<String>>, CoreError>;
}

/// Problem entries are subdirectories; units are the stems of their `*.rs` files
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Store rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_dir(path: &Path) -> Result<fs::ReadDir, CoreError> {
        fs::read_dir(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl SolutionStore for DirectoryStore {
    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }

    fn problem_units(&self) -> Result<Vec<String>, CoreError> {
        let mut names = Vec::new();
        for entry in Self::read_dir(&self.root)? {
            let entry = entry.map_err(|source| CoreError::Io {
                path: self.root.clone(),
                source,
            })?;
            if !entry.path().is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn units(&self, problem_unit: &str) -> Result<Option<Vec<String>>, CoreError> {
        let dir = self.root.join(problem_unit);
        if !dir.is_dir() {
            return Ok(None);
        }

        let mut units = Vec::new();
        for entry in Self::read_dir(&dir)? {
            let path = entry
                .map_err(|source| CoreError::Io {
                    path: dir.clone(),
                    source,
                })?
                .path();
            if !path.is_file() || path.extension().is_none_or(|ext| ext != "rs") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                units.push(stem.to_string());
            }
        }
        units.sort();
        Ok(Some(units))
    }
}

/// Snapshot of the compiled-in registrations, laid out under the naming scheme
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    entries: BTreeMap<String, Vec<String>>,
}

impl CatalogStore {
    /// Lay out every registered problem and version as named units
    pub fn new(catalog: &Catalog, naming: &NamingScheme) -> Self {
        let mut entries = BTreeMap::new();

        for problem in catalog.problem_ids() {
            let Some(problem_unit) = naming.problems.format(problem) else {
                tracing::debug!(problem, "problem id exceeds naming width, not listed");
                continue;
            };

            let mut units = Vec::new();
            if catalog.problem(problem).is_some() {
                units.push(problem_unit.clone());
            }
            units.extend(
                catalog
                    .version_ids(problem)
                    .filter_map(|v| naming.versions.format(v)),
            );
            units.sort();
            entries.insert(problem_unit, units);
        }

        Self { entries }
    }
}

impl SolutionStore for CatalogStore {
    fn describe(&self) -> String {
        "compiled-in catalog".to_string()
    }

    fn problem_units(&self) -> Result<Vec<String>, CoreError> {
        Ok(self.entries.keys().cloned().collect())
    }

    fn units(&self, problem_unit: &str) -> Result<Option<Vec<String>>, CoreError> {
        Ok(self.entries.get(problem_unit).cloned())
    }
}
