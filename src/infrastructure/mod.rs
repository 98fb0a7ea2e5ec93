//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system
//! - `catalog/` - Version catalog files
//! - `report/` - Finding reports written by the analysis tool
//! - `events/` - Event sinks (NDJSON)
//! - `discovery` - Build root and module discovery

pub mod catalog;
pub mod discovery;
pub mod events;
pub mod fs;
pub mod report;

// Re-export for convenience
pub use catalog::TomlCatalogSource;
pub use discovery::{discover_build_root, discover_modules};
pub use events::JsonEventSink;
pub use fs::LocalFs;
pub use report::{FindingReport, JsonReportSource};
