//! Catalog resolver
//!
//! Pure lookup of a tool key in the shared version catalog.

use std::sync::Arc;

use crate::config::levenshtein;
use crate::domain::entities::{VersionCatalog, VersionCatalogEntry};
use crate::domain::value_objects::CatalogKey;
use crate::error::{LintholdError, LintholdResult};

/// Suggestions further away than this are noise
const MAX_SUGGESTION_DISTANCE: usize = 2;

#[derive(Debug, Clone)]
pub struct CatalogResolver {
    catalog: Arc<VersionCatalog>,
}

impl CatalogResolver {
    pub fn new(catalog: Arc<VersionCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &VersionCatalog {
        &self.catalog
    }

    /// Resolve a raw key to its version string.
    pub fn resolve(&self, key: &str) -> LintholdResult<String> {
        let key = CatalogKey::parse(key)?;
        Ok(self.lookup(&key)?.version.clone())
    }

    /// Resolve an already-normalized key to its full entry.
    pub fn lookup(&self, key: &CatalogKey) -> LintholdResult<&VersionCatalogEntry> {
        self.catalog
            .get(key)
            .ok_or_else(|| LintholdError::UnknownKey {
                key: key.to_string(),
                suggestion: self.suggest(key),
            })
    }

    fn suggest(&self, unknown: &CatalogKey) -> Option<String> {
        let mut best: Option<(&CatalogKey, usize)> = None;
        for candidate in self.catalog.keys() {
            let dist = levenshtein(unknown.as_str(), candidate.as_str());
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((candidate, dist)),
            }
        }

        match best {
            Some((candidate, dist)) if dist <= MAX_SUGGESTION_DISTANCE => {
                Some(candidate.to_string())
            }
            _ => None,
        }
    }
}
