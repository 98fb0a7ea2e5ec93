//! Version catalog entity
//!
//! The centrally maintained key→version mapping shared by every module in a
//! build. Loaded once, read-only afterwards.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::value_objects::CatalogKey;

/// Which catalog table an entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Library,
    Plugin,
    Version,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionCatalogEntry {
    pub key: CatalogKey,
    pub version: String,
    pub kind: EntryKind,
    /// Module (`group:name`) or plugin id, when the entry declares one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<String>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate catalog key '{key}'")]
    DuplicateKey { key: CatalogKey },

    #[error("catalog key '{key}' has an empty version")]
    EmptyVersion { key: CatalogKey },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VersionCatalog {
    entries: BTreeMap<CatalogKey, VersionCatalogEntry>,
}

impl VersionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog, rejecting duplicate keys and blank versions.
    pub fn from_entries<I>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = VersionCatalogEntry>,
    {
        let mut catalog = Self::new();
        for entry in entries {
            if entry.version.trim().is_empty() {
                return Err(CatalogError::EmptyVersion { key: entry.key });
            }
            if catalog.entries.contains_key(&entry.key) {
                return Err(CatalogError::DuplicateKey { key: entry.key });
            }
            catalog.entries.insert(entry.key.clone(), entry);
        }
        Ok(catalog)
    }

    pub fn get(&self, key: &CatalogKey) -> Option<&VersionCatalogEntry> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &CatalogKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Entries sorted by key
    pub fn entries(&self) -> impl Iterator<Item = &VersionCatalogEntry> {
        self.entries.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = &CatalogKey> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
