//! Configuration loading from euler.toml
//!
//! EulerBench configuration can be specified in a `euler.toml` file in the project root.
//! The configuration is automatically discovered by walking up from the current directory.
//! Relative paths inside the file are resolved against the directory that contains it.

use eulerbench_core::{DEFAULT_NAME_WIDTH, NamingConvention, NamingScheme};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up during discovery
pub const CONFIG_FILE: &str = "euler.toml";

/// EulerBench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EulerConfig {
    /// Runner configuration
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Naming convention configuration
    #[serde(default)]
    pub naming: NamingConfig,
    /// Storage locations
    #[serde(default)]
    pub paths: PathsConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
    /// Directory of the loaded file; relative paths are resolved against it
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

/// Runner configuration for `perf`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Iterations per version when `--count` is not given
    #[serde(default = "default_count")]
    pub count: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
        }
    }
}

fn default_count() -> usize {
    3
}

/// Digit widths of problem and version names
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Digits in `problemNNN`
    #[serde(default = "default_digits")]
    pub problem_digits: usize,
    /// Digits in `versionNNN`
    #[serde(default = "default_digits")]
    pub version_digits: usize,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            problem_digits: default_digits(),
            version_digits: default_digits(),
        }
    }
}

impl NamingConfig {
    /// Naming scheme with the configured widths
    pub fn scheme(&self) -> NamingScheme {
        NamingScheme::new(self.problem_digits, self.version_digits)
    }
}

fn default_digits() -> usize {
    NamingConvention::DEFAULT_WIDTH
}

/// Storage locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Solutions directory to discover from; the compiled-in catalog when unset
    #[serde(default)]
    pub solutions_dir: Option<String>,
    /// Directory holding `problemNNN.txt` resource files
    #[serde(default = "default_resources_dir")]
    pub resources_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            solutions_dir: None,
            resources_dir: default_resources_dir(),
        }
    }
}

fn default_resources_dir() -> String {
    "resources".to_string()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "human" or "json"
    #[serde(default = "default_format")]
    pub format: String,
    /// Characters of a display name shown in listings
    #[serde(default = "default_name_width")]
    pub name_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            name_width: default_name_width(),
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}
fn default_name_width() -> usize {
    DEFAULT_NAME_WIDTH
}

impl EulerConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let dir = std::env::current_dir().ok()?;
        Self::discover_from(&dir)
    }

    /// Walk up from `start` looking for `euler.toml`
    pub fn discover_from(start: &Path) -> Option<Self> {
        let mut dir = start.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE);
            if config_path.exists() {
                return match Self::load(&config_path) {
                    Ok(config) => {
                        tracing::debug!(path = %config_path.display(), "loaded configuration");
                        Some(config)
                    }
                    Err(e) => {
                        tracing::warn!(path = %config_path.display(), "ignoring configuration: {e:#}");
                        None
                    }
                };
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Resolve a configured path against the configuration file's directory
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Configured solutions directory, resolved
    pub fn solutions_dir(&self) -> Option<PathBuf> {
        self.paths.solutions_dir.as_deref().map(|p| self.resolve_path(p))
    }

    /// Configured resources directory, resolved
    pub fn resources_dir(&self) -> PathBuf {
        self.resolve_path(&self.paths.resources_dir)
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# EulerBench Configuration

[runner]
# Iterations per version for `euler perf` when --count is not given
count = 3

[naming]
# Digits in problem names (problem001)
problem_digits = 3
# Digits in version names (version001)
version_digits = 3

[paths]
# Discover problems from a directory of problemNNN/versionNNN.rs files
# instead of the compiled-in catalog (uncomment to enable)
# solutions_dir = "eulerbench-solutions/src"
# Resource files (problemNNN.txt)
resources_dir = "resources"

[output]
# Default output format: human, json
format = "human"
# Characters of a problem or version name shown by `euler info`
name_width = 65
"#
        .to_string()
    }
}
