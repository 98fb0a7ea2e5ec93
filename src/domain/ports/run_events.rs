//! Run Event Port
//!
//! Observable interface for resolve and check runs. Enables JSON event
//! streams for CI without the use cases knowing about output formats.

use crate::domain::entities::ModuleConfig;
use crate::domain::policies::Verdict;
use crate::domain::value_objects::{FindingCounts, ModuleId};

/// Event emitted during a run
#[derive(Debug, Clone)]
pub enum RunEvent {
    /// Run started
    Started { root: std::path::PathBuf, module_count: usize },

    /// One module's configuration was assembled
    ModuleConfigured { config: ModuleConfig },

    /// A finding report was evaluated for a module
    ModuleChecked {
        module: ModuleId,
        counts: FindingCounts,
        verdict: Verdict,
    },

    /// Run completed
    Completed {
        module_count: usize,
        /// Every configured module shares one fingerprint
        uniform: bool,
    },
}

/// Trait for receiving run events
pub trait RunEventSink: Send + Sync {
    fn on_event(&self, event: RunEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl RunEventSink for NoopEventSink {
    fn on_event(&self, _event: RunEvent) {}
}
