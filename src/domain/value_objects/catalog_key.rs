//! Catalog Key Value Object
//!
//! A normalized version-catalog alias. Catalog aliases follow version-catalog
//! accessor rules: `-`, `_` and `.` are interchangeable separators and
//! matching ignores case, so `checkstyle-core`, `checkstyle_core` and
//! `Checkstyle.Core` all name the same entry.

use std::fmt;

use serde::Serialize;

use crate::error::{LintholdError, LintholdResult};

/// A validated, normalized catalog key.
///
/// The canonical form is lowercase with `.` between segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CatalogKey(String);

impl CatalogKey {
    /// Parse and normalize a raw alias.
    pub fn parse(raw: &str) -> LintholdResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(invalid(raw, "key is empty"));
        }

        let mut segments = Vec::new();
        for segment in trimmed.split(['-', '_', '.']) {
            if segment.is_empty() {
                return Err(invalid(raw, "key contains an empty segment"));
            }
            if !segment.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(invalid(
                    raw,
                    "only ASCII letters, digits and '-', '_', '.' separators are allowed",
                ));
            }
            segments.push(segment.to_ascii_lowercase());
        }

        Ok(Self(segments.join(".")))
    }

    /// Canonical dotted form, e.g. `checkstyle.core`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn invalid(raw: &str, reason: &str) -> LintholdError {
    LintholdError::InvalidKey {
        key: raw.to_string(),
        reason: reason.to_string(),
    }
}

impl fmt::Display for CatalogKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CatalogKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for CatalogKey {
    type Error = LintholdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
