//! Configuration Fingerprint Value Object
//!
//! A SHA-256 digest over everything that shapes a module's analysis run:
//! tool key, resolved version, shared config file bytes and thresholds.
//! Two modules with equal fingerprints are configured identically.

use std::fmt;

use serde::Serialize;
use sha2::{Digest, Sha256};

/// Fingerprint value object, rendered as `sha256:<hex>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Prefix for SHA-256 digests
    pub const PREFIX: &'static str = "sha256:";

    /// Digest a sequence of labelled parts.
    ///
    /// Each part is length-prefixed so `("ab", "c")` and `("a", "bc")` differ.
    pub fn of_parts(parts: &[(&str, &[u8])]) -> Self {
        let mut hasher = Sha256::new();
        for (label, bytes) in parts {
            hasher.update(label.as_bytes());
            hasher.update((bytes.len() as u64).to_le_bytes());
            hasher.update(bytes);
        }
        Self(format!("{}{:x}", Self::PREFIX, hasher.finalize()))
    }

    /// Full fingerprint with prefix
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Just the hex digest
    pub fn hex(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }

    /// First 12 hex characters, for compact text output
    pub fn short(&self) -> &str {
        let hex = self.hex();
        &hex[..hex.len().min(12)]
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
