//! JSON Event Sink
//!
//! Outputs run events as NDJSON for CI/automation consumption.

use crate::domain::ports::{RunEvent, RunEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    command: &'static str,
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl RunEventSink for JsonEventSink {
    fn on_event(&self, event: RunEvent) {
        let json = match event {
            RunEvent::Started { root, module_count } => {
                serde_json::json!({
                    "event": "start",
                    "command": self.command,
                    "root": root.display().to_string(),
                    "module_count": module_count,
                })
            }

            RunEvent::ModuleConfigured { config } => {
                serde_json::json!({
                    "event": "module_configured",
                    "command": self.command,
                    "module": config.module.name(),
                    "dir": config.module.dir().display().to_string(),
                    "tool": config.tool.as_str(),
                    "tool_version": config.tool_version,
                    "config_file": config.config_file.resolved_path().display().to_string(),
                    "max_errors": config.policy.max_errors(),
                    "max_warnings": config.policy.max_warnings(),
                    "fingerprint": config.fingerprint.as_str(),
                })
            }

            RunEvent::ModuleChecked {
                module,
                counts,
                verdict,
            } => {
                serde_json::json!({
                    "event": "module_checked",
                    "command": self.command,
                    "module": module.name(),
                    "errors": counts.errors,
                    "warnings": counts.warnings,
                    "pass": verdict.pass,
                    "reasons": verdict.reasons,
                })
            }

            RunEvent::Completed {
                module_count,
                uniform,
            } => {
                serde_json::json!({
                    "event": "complete",
                    "command": self.command,
                    "module_count": module_count,
                    "uniform": uniform,
                })
            }
        };

        self.write_event(json);
    }
}
