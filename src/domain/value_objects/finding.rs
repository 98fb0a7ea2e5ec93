//! Findings and finding counts.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::Severity;

/// A single static-analysis violation reported by the analysis tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u64>,
    #[serde(default)]
    pub message: String,
}

/// Error and warning totals for one module's analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FindingCounts {
    pub errors: u64,
    pub warnings: u64,
}

impl FindingCounts {
    pub fn new(errors: u64, warnings: u64) -> Self {
        Self { errors, warnings }
    }

    /// Tally counted severities; `info` and `ignore` are skipped.
    pub fn tally<'a, I>(findings: I) -> Self
    where
        I: IntoIterator<Item = &'a Finding>,
    {
        findings
            .into_iter()
            .fold(Self::default(), |mut acc, finding| {
                match finding.severity {
                    Severity::Error => acc.errors += 1,
                    Severity::Warning => acc.warnings += 1,
                    Severity::Info | Severity::Ignore => {}
                }
                acc
            })
    }
}
