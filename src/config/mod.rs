//! Settings module for Linthold
//!
//! Settings hierarchy (highest priority first):
//! 1. CLI flags
//! 2. Environment variables (LINTHOLD_*)
//! 3. Build settings (<build root>/linthold.toml)
//! 4. User settings (~/.config/linthold/config.toml)
//! 5. Built-in defaults
//!
//! Files do not merge: the first settings file found is used whole.

mod env_validator;
mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{
    user_settings_path, with_env_overrides_from, LoadedSettings, ENV_CATALOG, ENV_CONFIG_FILE,
    ENV_MAX_ERRORS, ENV_MAX_WARNINGS, ENV_TOOL,
};
pub use types::{
    AnalysisSettings, CatalogSettings, ModulesSettings, Settings, DEFAULT_CATALOG_PATH,
    DEFAULT_MODULE_MARKER, SETTINGS_FILE,
};
