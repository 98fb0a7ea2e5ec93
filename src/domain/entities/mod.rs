//! Domain Entities
//!
//! Core domain objects built once per build run.

mod catalog;
mod module_config;

pub use catalog::{CatalogError, EntryKind, VersionCatalog, VersionCatalogEntry};
pub use module_config::{ConfigFileReference, ModuleConfig};
