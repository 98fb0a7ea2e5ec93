//! Config propagator
//!
//! Builds the `ModuleConfig` for each module of a build from one catalog,
//! one shared config path and one threshold policy, so every module is
//! analysed the same way.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::{ModuleConfig, VersionCatalog};
use crate::domain::policies::ThresholdPolicy;
use crate::domain::ports::{FileSystem, PathKind};
use crate::domain::value_objects::{CatalogKey, Fingerprint, ModuleId};
use crate::error::{LintholdError, LintholdResult};

use super::{CatalogResolver, PathResolver};

/// Catalog key used when none is configured
pub const DEFAULT_TOOL: &str = "checkstyle";

/// Shared rule-set location used when none is configured
pub const DEFAULT_CONFIG_FILE: &str = "config/checkstyle/checkstyle.xml";

#[derive(Clone)]
pub struct ConfigPropagator {
    build_root: PathBuf,
    tool: CatalogKey,
    config_file: String,
    policy: ThresholdPolicy,
    catalog: CatalogResolver,
    paths: PathResolver,
    fs: Arc<dyn FileSystem>,
}

impl ConfigPropagator {
    /// Start from the defaults: `checkstyle`, the conventional rule-set path
    /// and a zero-tolerance policy.
    pub fn new(
        build_root: PathBuf,
        catalog: Arc<VersionCatalog>,
        fs: Arc<dyn FileSystem>,
    ) -> LintholdResult<Self> {
        Ok(Self {
            build_root,
            tool: CatalogKey::parse(DEFAULT_TOOL)?,
            config_file: DEFAULT_CONFIG_FILE.to_string(),
            policy: ThresholdPolicy::default(),
            catalog: CatalogResolver::new(catalog),
            paths: PathResolver::new(fs.clone()),
            fs,
        })
    }

    pub fn with_tool(mut self, tool: CatalogKey) -> Self {
        self.tool = tool;
        self
    }

    /// Rule-set path relative to the build root
    pub fn with_config_file(mut self, config_file: impl Into<String>) -> Self {
        self.config_file = config_file.into();
        self
    }

    pub fn with_policy(mut self, policy: ThresholdPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn build_root(&self) -> &Path {
        &self.build_root
    }

    pub fn policy(&self) -> ThresholdPolicy {
        self.policy
    }

    /// Assemble the configuration for one module.
    ///
    /// Fail-fast: the first failing sub-resolution (tool version, build
    /// root, config file, module directory) is returned and no partial
    /// config is produced.
    pub fn build(&self, module_root: &Path) -> LintholdResult<ModuleConfig> {
        let tool_version = self.catalog.lookup(&self.tool)?.version.clone();
        debug!(tool = %self.tool, version = %tool_version, "resolved tool version");

        let root = self.canonical_root()?;
        let config_file = self.paths.reference(&root, &self.config_file)?;
        let rules = self.fs.read(config_file.resolved_path())?;

        let module = self.module_id(&root, module_root)?;

        let max_errors = self.policy.max_errors().to_le_bytes();
        let max_warnings = self.policy.max_warnings().to_le_bytes();
        let fingerprint = Fingerprint::of_parts(&[
            ("tool", self.tool.as_str().as_bytes()),
            ("version", tool_version.as_bytes()),
            ("config", rules.as_slice()),
            ("max_errors", max_errors.as_slice()),
            ("max_warnings", max_warnings.as_slice()),
        ]);

        info!(module = %module, fingerprint = %fingerprint.short(), "module configured");

        Ok(ModuleConfig {
            module,
            tool: self.tool.clone(),
            tool_version,
            config_file,
            policy: self.policy,
            fingerprint,
        })
    }

    /// Configure every module in order, stopping at the first failure.
    pub fn build_all<I, P>(&self, modules: I) -> LintholdResult<Vec<ModuleConfig>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        modules
            .into_iter()
            .map(|module| self.build(module.as_ref()))
            .collect()
    }

    fn canonical_root(&self) -> LintholdResult<PathBuf> {
        if self.fs.kind(&self.build_root) != PathKind::Dir {
            return Err(LintholdError::BuildRootNotFound {
                path: self.build_root.clone(),
            });
        }
        Ok(self.fs.canonicalize(&self.build_root)?)
    }

    fn module_id(&self, root: &Path, module_root: &Path) -> LintholdResult<ModuleId> {
        let joined = if module_root.is_absolute() {
            module_root.to_path_buf()
        } else {
            root.join(module_root)
        };
        if self.fs.kind(&joined) != PathKind::Dir {
            return Err(LintholdError::ModuleNotFound { path: joined });
        }
        let dir = self.fs.canonicalize(&joined)?;

        ModuleId::from_dirs(root, &dir).ok_or_else(|| LintholdError::ModuleOutsideRoot {
            path: dir,
            root: root.to_path_buf(),
        })
    }
}

impl std::fmt::Debug for ConfigPropagator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigPropagator")
            .field("build_root", &self.build_root)
            .field("tool", &self.tool)
            .field("config_file", &self.config_file)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
