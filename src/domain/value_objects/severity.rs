//! Severity Value Object
//!
//! Finding severity levels reported by the analysis tool.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Severity of a single finding.
///
/// Only `Error` and `Warning` count toward thresholds; `Info` and `Ignore`
/// are accepted so tool reports can be passed through unfiltered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
    Ignore,
}

impl Severity {
    /// All accepted severity names
    pub const NAMES: &'static [&'static str] = &["error", "warning", "info", "ignore"];

    /// Whether findings of this severity count toward a threshold.
    pub fn is_counted(self) -> bool {
        matches!(self, Severity::Error | Severity::Warning)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Ignore => "ignore",
        }
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "warning" | "warn" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            "ignore" => Ok(Severity::Ignore),
            other => Err(format!(
                "unknown severity '{}' (expected one of: {})",
                other,
                Self::NAMES.join(", ")
            )),
        }
    }
}

// Case-insensitive on input, lowercase on output.
impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
