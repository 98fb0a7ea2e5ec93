//! Resolve Use Case
//!
//! Configures every requested module of a build:
//! 1. Load the version catalog (once)
//! 2. Assemble one `ConfigPropagator` from the catalog and settings
//! 3. Build each module's `ModuleConfig`, stopping at the first failure

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::config::AnalysisSettings;
use crate::domain::entities::ModuleConfig;
use crate::domain::ports::{CatalogSource, FileSystem, NoopEventSink, RunEvent, RunEventSink};
use crate::error::LintholdResult;

use super::workspace::{configure_propagator, Workspace};

/// Options for the resolve use case
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    pub root: PathBuf,
    pub analysis: AnalysisSettings,
    /// Module directories, absolute or relative to `root`
    pub modules: Vec<PathBuf>,
}

impl ResolveOptions {
    pub fn from_workspace(workspace: &Workspace, modules: Vec<PathBuf>) -> Self {
        Self {
            root: workspace.root().to_path_buf(),
            analysis: workspace.analysis().clone(),
            modules,
        }
    }
}

/// Result of a resolve run
#[derive(Debug, Clone, Default)]
pub struct ResolveResult {
    pub configs: Vec<ModuleConfig>,
}

impl ResolveResult {
    /// Whether every module ended up with the same configuration
    pub fn is_uniform(&self) -> bool {
        self.configs
            .windows(2)
            .all(|pair| pair[0].is_uniform_with(&pair[1]))
    }
}

pub struct ResolveUseCase<CS>
where
    CS: CatalogSource,
{
    catalog_source: CS,
    fs: Arc<dyn FileSystem>,
}

impl<CS> ResolveUseCase<CS>
where
    CS: CatalogSource,
{
    pub fn new(catalog_source: CS, fs: Arc<dyn FileSystem>) -> Self {
        Self { catalog_source, fs }
    }

    pub fn execute(&self, options: &ResolveOptions) -> LintholdResult<ResolveResult> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Execute, reporting each configured module to `events`.
    ///
    /// Events are only emitted once every module has resolved; a failing
    /// run produces no per-module events.
    pub fn execute_with_events(
        &self,
        options: &ResolveOptions,
        events: Arc<dyn RunEventSink>,
    ) -> LintholdResult<ResolveResult> {
        events.on_event(RunEvent::Started {
            root: options.root.clone(),
            module_count: options.modules.len(),
        });

        let propagator = configure_propagator(
            &options.root,
            &options.analysis,
            &self.catalog_source,
            self.fs.clone(),
        )?;
        let configs = propagator.build_all(&options.modules)?;

        for config in &configs {
            events.on_event(RunEvent::ModuleConfigured {
                config: config.clone(),
            });
        }

        let result = ResolveResult { configs };
        info!(
            source = %self.catalog_source.describe(),
            modules = result.configs.len(),
            uniform = result.is_uniform(),
            "resolve complete"
        );
        events.on_event(RunEvent::Completed {
            module_count: result.configs.len(),
            uniform: result.is_uniform(),
        });

        Ok(result)
    }
}
