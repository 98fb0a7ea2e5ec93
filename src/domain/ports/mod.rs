//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod catalog_source;
pub mod file_system;
pub mod report_source;
pub mod run_events;

pub use catalog_source::CatalogSource;
pub use file_system::{FileSystem, FsError, FsResult, PathKind};
pub use report_source::ReportSource;
pub use run_events::{NoopEventSink, RunEvent, RunEventSink};
