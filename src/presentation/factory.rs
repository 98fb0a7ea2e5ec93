//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::{CatalogQueryUseCase, CheckUseCase, ResolveUseCase, Workspace};
use crate::domain::ports::RunEventSink;
use crate::infrastructure::{JsonEventSink, JsonReportSource, LocalFs, TomlCatalogSource};

/// Type alias for the concrete ResolveUseCase with all dependencies
pub type ConcreteResolveUseCase = ResolveUseCase<TomlCatalogSource>;

/// Type alias for the concrete CheckUseCase with all dependencies
pub type ConcreteCheckUseCase = CheckUseCase<TomlCatalogSource, JsonReportSource>;

pub fn create_resolve_use_case(workspace: &Workspace) -> ConcreteResolveUseCase {
    ResolveUseCase::new(workspace.catalog_source(), Arc::new(LocalFs::new()))
}

/// `report` is taken as given; relative paths resolve against the current
/// directory like any other command-line path.
pub fn create_check_use_case(workspace: &Workspace, report: PathBuf) -> ConcreteCheckUseCase {
    CheckUseCase::new(
        workspace.catalog_source(),
        JsonReportSource::new(report),
        Arc::new(LocalFs::new()),
    )
}

pub fn create_catalog_query(workspace: &Workspace) -> CatalogQueryUseCase<TomlCatalogSource> {
    CatalogQueryUseCase::new(workspace.catalog_source())
}

/// NDJSON sink on stdout when `json` is set, otherwise silent
pub fn create_event_sink(json: bool, command: &'static str) -> Arc<dyn RunEventSink> {
    if json {
        Arc::new(JsonEventSink::stdout(command))
    } else {
        Arc::new(crate::domain::ports::NoopEventSink)
    }
}
