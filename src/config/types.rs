//! Settings type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::policies::ThresholdPolicy;
use crate::domain::services::{DEFAULT_CONFIG_FILE, DEFAULT_TOOL};
use crate::error::LintholdResult;

use super::loader::{self, ConfigWarning, LoadedSettings};

/// Settings file name at the build root
pub const SETTINGS_FILE: &str = "linthold.toml";

/// Conventional version catalog location
pub const DEFAULT_CATALOG_PATH: &str = "gradle/libs.versions.toml";

/// File whose presence marks a directory as a module
pub const DEFAULT_MODULE_MARKER: &str = "build.gradle.kts";

/// Analysis tool configuration applied to every module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Catalog key of the analysis tool
    #[serde(default = "default_tool")]
    pub tool: String,

    /// Rule-set path relative to the build root
    #[serde(default = "default_config_file")]
    pub config_file: String,

    #[serde(default)]
    pub max_errors: u64,

    #[serde(default)]
    pub max_warnings: u64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            tool: default_tool(),
            config_file: default_config_file(),
            max_errors: 0,
            max_warnings: 0,
        }
    }
}

impl AnalysisSettings {
    pub fn policy(&self) -> ThresholdPolicy {
        ThresholdPolicy::new(self.max_errors, self.max_warnings)
    }
}

fn default_tool() -> String {
    DEFAULT_TOOL.to_string()
}

fn default_config_file() -> String {
    DEFAULT_CONFIG_FILE.to_string()
}

/// Version catalog location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Catalog path relative to the build root
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from(DEFAULT_CATALOG_PATH)
}

/// Which directories are modules
///
/// An explicit `members` list wins; otherwise every directory holding
/// `marker` is a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModulesSettings {
    #[serde(default)]
    pub members: Vec<PathBuf>,

    #[serde(default = "default_marker")]
    pub marker: String,
}

impl Default for ModulesSettings {
    fn default() -> Self {
        Self {
            members: Vec::new(),
            marker: default_marker(),
        }
    }
}

fn default_marker() -> String {
    DEFAULT_MODULE_MARKER.to_string()
}

/// Main settings structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub analysis: AnalysisSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub modules: ModulesSettings,
}

impl Settings {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> LintholdResult<Self> {
        let (settings, _warnings) = loader::load_with_warnings(path)?;
        Ok(settings)
    }

    /// Load settings and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> LintholdResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from build settings, user settings, or defaults, then apply
    /// `LINTHOLD_*` environment overrides.
    pub fn load_or_default(build_root: &Path) -> LintholdResult<LoadedSettings> {
        loader::load_or_default(build_root)
    }

    /// Apply environment variable overrides (LINTHOLD_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
