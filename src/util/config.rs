//! Configuration file support for cextract.
//!
//! cextract reads two configuration files:
//! - Global: `~/.cextract/config.toml` - User-wide defaults
//! - Project: `./cextract.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::extract::{ConstantTable, HeaderParser};

/// Name of the project configuration file.
pub const PROJECT_CONFIG_FILE: &str = "cextract.toml";

/// cextract configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Symbolic constants for array sizes
    pub constants: ConstantTable,

    /// Type filters
    pub filter: FilterConfig,

    /// Output settings
    pub output: OutputConfig,
}

/// Which struct and enum tags to keep.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Types to include (None or empty = all)
    pub include_types: Option<Vec<String>>,

    /// Types to exclude
    pub exclude_types: Option<Vec<String>>,
}

/// Output-related configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output (defaults to true)
    pub pretty: Option<bool>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        self.constants.extend(other.constants);

        if other.filter.include_types.is_some() {
            self.filter.include_types = other.filter.include_types;
        }
        if other.filter.exclude_types.is_some() {
            self.filter.exclude_types = other.filter.exclude_types;
        }

        if other.output.pretty.is_some() {
            self.output.pretty = other.output.pretty;
        }
    }

    /// Whether JSON output should be pretty-printed.
    pub fn pretty(&self) -> bool {
        self.output.pretty.unwrap_or(true)
    }

    /// Build a header parser with the configured type filters.
    pub fn header_parser(&self) -> HeaderParser {
        HeaderParser::new()
            .with_include_types(self.filter.include_types.clone().unwrap_or_default())
            .with_exclude_types(self.filter.exclude_types.clone().unwrap_or_default())
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (./cextract.toml)
/// 2. Global config (~/.cextract/config.toml)
/// 3. Defaults
///
/// An explicitly requested file must exist and parse; the default
/// locations fall back to defaults with a warning.
pub fn load_config(
    global_path: Option<&Path>,
    project_path: &Path,
    explicit: bool,
) -> Result<Config> {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        if global_path.exists() {
            tracing::debug!("loading global config from {}", global_path.display());
            config.merge(Config::load_or_default(global_path));
        }
    }

    if explicit {
        config.merge(Config::load(project_path)?);
    } else if project_path.exists() {
        tracing::debug!("loading project config from {}", project_path.display());
        config.merge(Config::load_or_default(project_path));
    }

    Ok(config)
}

/// Get the global cextract config directory (~/.cextract).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".cextract"))
}

/// Get the global config path (~/.cextract/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (./cextract.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(PROJECT_CONFIG_FILE)
}
