//! JSON finding report
//!
//! Accepts either explicit totals or a list of findings:
//!
//! ```json
//! { "errors": 3, "warnings": 10 }
//! { "findings": [ { "severity": "error", "rule": "LineLength", "file": "src/A.java", "line": 3 } ] }
//! ```
//!
//! When both are present an explicit total wins; a missing total is taken
//! from the findings list.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::domain::ports::{FileSystem, FsError, ReportSource};
use crate::domain::value_objects::{Finding, FindingCounts};
use crate::error::{LintholdError, LintholdResult};
use crate::infrastructure::fs::LocalFs;

#[derive(Debug, Deserialize)]
struct RawReport {
    errors: Option<u64>,
    warnings: Option<u64>,
    findings: Option<Vec<Finding>>,
}

/// A parsed report: totals plus any individual findings it listed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindingReport {
    pub counts: FindingCounts,
    pub findings: Vec<Finding>,
}

pub struct JsonReportSource {
    path: PathBuf,
    fs: Arc<dyn FileSystem>,
}

impl JsonReportSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_fs(path, Arc::new(LocalFs::new()))
    }

    /// Create with a custom file system (for testing)
    pub fn with_fs(path: impl Into<PathBuf>, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            path: path.into(),
            fs,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> LintholdResult<FindingReport> {
        let bytes = self.fs.read(&self.path).map_err(|e| match e {
            FsError::NotFound(_) => self.invalid("file not found".to_string()),
            other => LintholdError::from(other),
        })?;
        let raw: RawReport =
            serde_json::from_slice(&bytes).map_err(|e| self.invalid(e.to_string()))?;

        let (counts, findings) = match (raw.errors, raw.warnings, raw.findings) {
            (None, None, None) => {
                return Err(self.invalid(
                    "report has neither 'errors'/'warnings' totals nor a 'findings' list"
                        .to_string(),
                ))
            }
            (errors, warnings, Some(findings)) => {
                let tallied = FindingCounts::tally(&findings);
                let counts = FindingCounts::new(
                    errors.unwrap_or(tallied.errors),
                    warnings.unwrap_or(tallied.warnings),
                );
                (counts, findings)
            }
            (errors, warnings, None) => (
                FindingCounts::new(errors.unwrap_or(0), warnings.unwrap_or(0)),
                Vec::new(),
            ),
        };

        debug!(
            path = %self.path.display(),
            errors = counts.errors,
            warnings = counts.warnings,
            "read finding report"
        );
        Ok(FindingReport { counts, findings })
    }

    fn invalid(&self, message: String) -> LintholdError {
        LintholdError::InvalidReport {
            file: self.path.clone(),
            message,
        }
    }
}

impl ReportSource for JsonReportSource {
    fn counts(&self) -> LintholdResult<FindingCounts> {
        Ok(self.load()?.counts)
    }
}
