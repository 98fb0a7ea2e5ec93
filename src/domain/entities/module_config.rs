//! Per-module analysis configuration.
//!
//! Assembled by `ConfigPropagator::build` and handed to the analysis tool.
//! Each module owns its own instance; values are identical across a build.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::policies::ThresholdPolicy;
use crate::domain::value_objects::{CatalogKey, Fingerprint, ModuleId};

/// Location of the shared rule-set file.
///
/// `resolved` is canonical and existed on disk when the reference was made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigFileReference {
    root: PathBuf,
    relative: String,
    resolved: PathBuf,
}

impl ConfigFileReference {
    pub(crate) fn new(root: PathBuf, relative: String, resolved: PathBuf) -> Self {
        Self {
            root,
            relative,
            resolved,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn relative_path(&self) -> &str {
        &self.relative
    }

    pub fn resolved_path(&self) -> &Path {
        &self.resolved
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleConfig {
    pub module: ModuleId,
    pub tool: CatalogKey,
    pub tool_version: String,
    pub config_file: ConfigFileReference,
    pub policy: ThresholdPolicy,
    pub fingerprint: Fingerprint,
}

impl ModuleConfig {
    /// Whether two module configs would drive the analysis tool identically.
    pub fn is_uniform_with(&self, other: &ModuleConfig) -> bool {
        self.fingerprint == other.fingerprint
            && self.tool_version == other.tool_version
            && self.policy == other.policy
            && self.config_file.resolved_path() == other.config_file.resolved_path()
    }
}
