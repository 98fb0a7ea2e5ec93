//! Build workspace
//!
//! A build root with its settings loaded and CLI overrides applied. Every
//! use case starts from one of these.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::{AnalysisSettings, ConfigWarning, Settings};
use crate::domain::entities::VersionCatalog;
use crate::domain::ports::{CatalogSource, FileSystem};
use crate::domain::services::ConfigPropagator;
use crate::domain::value_objects::{CatalogKey, ModuleId};
use crate::error::{LintholdError, LintholdResult};
use crate::infrastructure::{discover_modules, TomlCatalogSource};

/// CLI-level overrides; `None` keeps the settings value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisOverrides {
    pub max_errors: Option<u64>,
    pub max_warnings: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    settings: Settings,
    source: Option<PathBuf>,
    warnings: Vec<ConfigWarning>,
}

impl Workspace {
    /// Load settings for the build at `root` (file, user defaults, env).
    pub fn open(root: impl Into<PathBuf>) -> LintholdResult<Self> {
        let root = root.into();
        let loaded = Settings::load_or_default(&root)?;
        Ok(Self {
            root,
            settings: loaded.settings,
            source: loaded.source,
            warnings: loaded.warnings,
        })
    }

    pub fn from_settings(root: impl Into<PathBuf>, settings: Settings) -> Self {
        Self {
            root: root.into(),
            settings,
            source: None,
            warnings: Vec::new(),
        }
    }

    pub fn with_overrides(mut self, overrides: &AnalysisOverrides) -> Self {
        if let Some(max_errors) = overrides.max_errors {
            self.settings.analysis.max_errors = max_errors;
        }
        if let Some(max_warnings) = overrides.max_warnings {
            self.settings.analysis.max_warnings = max_warnings;
        }
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn analysis(&self) -> &AnalysisSettings {
        &self.settings.analysis
    }

    /// Settings file in effect, if any
    pub fn settings_source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.root.join(&self.settings.catalog.path)
    }

    pub fn catalog_source(&self) -> TomlCatalogSource {
        TomlCatalogSource::new(self.catalog_path())
    }

    /// Module directories: explicit `--module` arguments if given, otherwise
    /// the discovered ones.
    pub fn modules(&self, explicit: &[PathBuf]) -> LintholdResult<Vec<PathBuf>> {
        if explicit.is_empty() {
            discover_modules(&self.root, &self.settings.modules)
        } else {
            Ok(explicit.to_vec())
        }
    }

    /// Discovered modules named by project path, sorted by name.
    pub fn module_ids(&self, fs: &dyn FileSystem) -> LintholdResult<Vec<ModuleId>> {
        let root = fs.canonicalize(&self.root)?;
        let mut ids = self
            .modules(&[])?
            .into_iter()
            .map(|dir| {
                let dir = fs.canonicalize(&dir)?;
                ModuleId::from_dirs(&root, &dir).ok_or_else(|| LintholdError::ModuleOutsideRoot {
                    path: dir,
                    root: root.clone(),
                })
            })
            .collect::<LintholdResult<Vec<_>>>()?;
        ids.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(ids)
    }

    /// The innermost discovered module that contains `dir`.
    ///
    /// Falls back to `dir` itself when no module encloses it.
    pub fn enclosing_module(&self, dir: &Path, fs: &dyn FileSystem) -> LintholdResult<PathBuf> {
        let dir = match fs.canonicalize(dir) {
            Ok(dir) => dir,
            Err(_) => return Ok(dir.to_path_buf()),
        };

        let mut enclosing: Option<PathBuf> = None;
        for module in self.modules(&[])? {
            let module = fs.canonicalize(&module)?;
            let deeper = enclosing.as_ref().map_or(true, |current| {
                module.components().count() > current.components().count()
            });
            if dir.starts_with(&module) && deeper {
                enclosing = Some(module);
            }
        }
        Ok(enclosing.unwrap_or(dir))
    }
}

/// One propagator per run, shared by every module it configures.
pub(crate) fn configure_propagator(
    root: &Path,
    analysis: &AnalysisSettings,
    catalog_source: &dyn CatalogSource,
    fs: Arc<dyn FileSystem>,
) -> LintholdResult<ConfigPropagator> {
    let tool = CatalogKey::parse(&analysis.tool)?;
    let catalog: Arc<VersionCatalog> = Arc::new(catalog_source.load()?);

    Ok(ConfigPropagator::new(root.to_path_buf(), catalog, fs)?
        .with_tool(tool)
        .with_config_file(analysis.config_file.clone())
        .with_policy(analysis.policy()))
}
