//! CatalogSource port
//!
//! Where the version catalog comes from is an infrastructure concern; the
//! domain only ever sees the loaded, immutable `VersionCatalog`.

use crate::domain::entities::VersionCatalog;
use crate::error::LintholdResult;

pub trait CatalogSource: Send + Sync {
    /// Load the catalog. Called once per build run.
    fn load(&self) -> LintholdResult<VersionCatalog>;

    /// Human-readable origin, used in logs and error messages
    fn describe(&self) -> String;
}
