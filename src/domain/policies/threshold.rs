//! Threshold policy.
//!
//! Inclusive ceilings on finding counts. A count equal to its ceiling passes.
//!
//! This is a pure domain policy - no I/O operations.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::FindingCounts;
use crate::error::{LintholdError, LintholdResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThresholdPolicy {
    max_errors: u64,
    max_warnings: u64,
}

/// Outcome of evaluating finding counts against a policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub pass: bool,
    /// One entry per exceeded ceiling, errors first
    pub reasons: Vec<String>,
}

impl ThresholdPolicy {
    pub fn new(max_errors: u64, max_warnings: u64) -> Self {
        Self {
            max_errors,
            max_warnings,
        }
    }

    pub fn max_errors(&self) -> u64 {
        self.max_errors
    }

    pub fn max_warnings(&self) -> u64 {
        self.max_warnings
    }

    pub fn evaluate(&self, error_count: u64, warning_count: u64) -> Verdict {
        let mut reasons = Vec::new();

        if error_count > self.max_errors {
            reasons.push(format!("errors {} > {}", error_count, self.max_errors));
        }
        if warning_count > self.max_warnings {
            reasons.push(format!("warnings {} > {}", warning_count, self.max_warnings));
        }

        Verdict {
            pass: reasons.is_empty(),
            reasons,
        }
    }

    pub fn evaluate_counts(&self, counts: &FindingCounts) -> Verdict {
        self.evaluate(counts.errors, counts.warnings)
    }

    /// Like [`evaluate_counts`](Self::evaluate_counts), but a failing verdict
    /// becomes `ThresholdExceeded` naming `module`.
    pub fn enforce(&self, module: &str, counts: &FindingCounts) -> LintholdResult<Verdict> {
        let verdict = self.evaluate_counts(counts);
        if verdict.pass {
            Ok(verdict)
        } else {
            Err(LintholdError::ThresholdExceeded {
                module: module.to_string(),
                counts: *counts,
                reasons: verdict.reasons,
            })
        }
    }
}
