//! Error types for Linthold
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::FindingCounts;

/// Result type alias for Linthold operations
pub type LintholdResult<T> = Result<T, LintholdError>;

/// Main error type for Linthold operations
#[derive(Error, Debug)]
pub enum LintholdError {
    /// Catalog has no entry for the requested key
    #[error("unknown catalog key '{key}'{}", suggestion_suffix(.suggestion))]
    UnknownKey {
        key: String,
        suggestion: Option<String>,
    },

    /// Catalog key is syntactically invalid (empty, empty segment)
    #[error("invalid catalog key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    /// Shared configuration file does not exist
    #[error("configuration file not found: {path} (resolved from '{relative}' under {root})")]
    FileNotFound {
        path: PathBuf,
        root: PathBuf,
        relative: String,
    },

    /// Shared configuration path exists but is a directory
    #[error("configuration path is not a file: {path}")]
    NotAFile { path: PathBuf },

    /// Relative configuration path was empty
    #[error("configuration file path is empty")]
    EmptyPath,

    /// Finding report exceeds the threshold policy
    #[error("thresholds exceeded for {module}: {}", .reasons.join(", "))]
    ThresholdExceeded {
        module: String,
        counts: FindingCounts,
        reasons: Vec<String>,
    },

    /// Version catalog could not be loaded
    #[error("invalid version catalog {file}: {message}")]
    InvalidCatalog { file: PathBuf, message: String },

    /// Settings file could not be parsed
    #[error("invalid settings in {file}: {message}")]
    InvalidSettings { file: PathBuf, message: String },

    /// Finding report could not be parsed
    #[error("invalid finding report {file}: {message}")]
    InvalidReport { file: PathBuf, message: String },

    /// Build root directory is missing
    #[error("build root not found: {path}")]
    BuildRootNotFound { path: PathBuf },

    /// Declared module directory is missing
    #[error("module directory not found: {path}")]
    ModuleNotFound { path: PathBuf },

    /// Module directory is not inside the build root
    #[error("module '{path}' is outside build root '{root}'")]
    ModuleOutsideRoot { path: PathBuf, root: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}
