//! Check Use Case
//!
//! Resolves one module's configuration and evaluates the analysis tool's
//! finding report against its threshold policy.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};

use crate::config::AnalysisSettings;
use crate::domain::entities::ModuleConfig;
use crate::domain::policies::Verdict;
use crate::domain::ports::{
    CatalogSource, FileSystem, NoopEventSink, ReportSource, RunEvent, RunEventSink,
};
use crate::domain::value_objects::FindingCounts;
use crate::error::LintholdResult;

use super::workspace::{configure_propagator, Workspace};

/// Options for the check operation
#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub root: PathBuf,
    pub analysis: AnalysisSettings,
    /// Module directory, absolute or relative to `root`
    pub module: PathBuf,
}

impl CheckOptions {
    pub fn from_workspace(workspace: &Workspace, module: PathBuf) -> Self {
        Self {
            root: workspace.root().to_path_buf(),
            analysis: workspace.analysis().clone(),
            module,
        }
    }
}

/// Result of the check operation
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub config: ModuleConfig,
    pub counts: FindingCounts,
    pub verdict: Verdict,
}

impl CheckResult {
    pub fn is_success(&self) -> bool {
        self.verdict.pass
    }

    /// Turn a failing verdict into `ThresholdExceeded`.
    pub fn enforce(&self) -> LintholdResult<()> {
        self.config
            .policy
            .enforce(self.config.module.name(), &self.counts)
            .map(|_| ())
    }
}

pub struct CheckUseCase<CS, RS>
where
    CS: CatalogSource,
    RS: ReportSource,
{
    catalog_source: CS,
    report: RS,
    fs: Arc<dyn FileSystem>,
}

impl<CS, RS> CheckUseCase<CS, RS>
where
    CS: CatalogSource,
    RS: ReportSource,
{
    pub fn new(catalog_source: CS, report: RS, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            catalog_source,
            report,
            fs,
        }
    }

    pub fn execute(&self, options: &CheckOptions) -> LintholdResult<CheckResult> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Execute the check. A failing verdict is a successful run; use
    /// [`CheckResult::enforce`] to treat it as an error.
    pub fn execute_with_events(
        &self,
        options: &CheckOptions,
        events: Arc<dyn RunEventSink>,
    ) -> LintholdResult<CheckResult> {
        events.on_event(RunEvent::Started {
            root: options.root.clone(),
            module_count: 1,
        });

        let propagator = configure_propagator(
            &options.root,
            &options.analysis,
            &self.catalog_source,
            self.fs.clone(),
        )?;
        let config = propagator.build(&options.module)?;
        events.on_event(RunEvent::ModuleConfigured {
            config: config.clone(),
        });

        let counts = self.report.counts()?;
        let verdict = config.policy.evaluate_counts(&counts);

        if verdict.pass {
            info!(module = %config.module, errors = counts.errors, warnings = counts.warnings, "thresholds met");
        } else {
            warn!(module = %config.module, reasons = ?verdict.reasons, "thresholds exceeded");
        }

        events.on_event(RunEvent::ModuleChecked {
            module: config.module.clone(),
            counts,
            verdict: verdict.clone(),
        });
        events.on_event(RunEvent::Completed {
            module_count: 1,
            uniform: true,
        });

        Ok(CheckResult {
            config,
            counts,
            verdict,
        })
    }
}
