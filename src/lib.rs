//! Linthold - uniform static-analysis configuration for multi-module builds
//!
//! Linthold resolves an analysis tool's version from a shared version
//! catalog, locates the shared rule-set file relative to the build root and
//! enforces per-build ceilings on finding counts, applying one configuration
//! to every module of the build.
//!
//! ```no_run
//! use std::path::PathBuf;
//! use std::sync::Arc;
//!
//! use linthold::domain::ports::CatalogSource;
//! use linthold::domain::services::ConfigPropagator;
//! use linthold::infrastructure::{LocalFs, TomlCatalogSource};
//!
//! # fn main() -> linthold::LintholdResult<()> {
//! let root = PathBuf::from("/path/to/build");
//! let catalog = TomlCatalogSource::new(root.join("gradle/libs.versions.toml")).load()?;
//! let propagator = ConfigPropagator::new(root, Arc::new(catalog), Arc::new(LocalFs::new()))?;
//! let api = propagator.build("api".as_ref())?;
//! println!("{} uses checkstyle {}", api.module, api.tool_version);
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use config::Settings;
pub use domain::entities::{ModuleConfig, VersionCatalog, VersionCatalogEntry};
pub use domain::policies::{ThresholdPolicy, Verdict};
pub use domain::services::{CatalogResolver, ConfigPropagator, PathResolver};
pub use domain::value_objects::{CatalogKey, FindingCounts, ModuleId};
pub use error::{LintholdError, LintholdResult};
