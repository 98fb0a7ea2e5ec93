//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod catalog_key;
mod config_warning;
mod finding;
mod fingerprint;
mod module_id;
mod severity;

pub use catalog_key::CatalogKey;
pub use config_warning::ConfigWarning;
pub use finding::{Finding, FindingCounts};
pub use fingerprint::Fingerprint;
pub use module_id::ModuleId;
pub use severity::Severity;
