//! Output Rendering
//!
//! Text views are rendered to strings so commands decide where they go.
//! JSON mode streams NDJSON lines, one object per line with an `event` field.

use std::fmt::Write as _;

use crate::application::{CheckResult, ResolveResult};
use crate::domain::entities::VersionCatalogEntry;
use crate::domain::value_objects::ModuleId;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// NDJSON events for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    cross: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
        }
    }
}

/// Text renderer
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    /// Whether to use unicode
    pub unicode: bool,
    /// Verbosity level
    pub verbose: u8,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            unicode: true,
            verbose: 0,
        }
    }
}

impl TextRenderer {
    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }

    pub fn render_resolve(&self, result: &ResolveResult) -> String {
        let icons = self.icons();
        let mut out = String::new();

        let count = result.configs.len();
        let noun = if count == 1 { "module" } else { "modules" };
        if result.is_uniform() {
            let _ = writeln!(out, "{} Resolved {} {} (uniform)", icons.check, count, noun);
        } else {
            let _ = writeln!(out, "{} Resolved {} {} (NOT uniform)", icons.cross, count, noun);
        }

        for config in &result.configs {
            let _ = writeln!(out);
            let _ = writeln!(out, "  {}", config.module);
            let _ = writeln!(
                out,
                "    tool         {} {}",
                config.tool, config.tool_version
            );
            let _ = writeln!(
                out,
                "    config       {}",
                config.config_file.relative_path()
            );
            if self.verbose > 0 {
                let _ = writeln!(
                    out,
                    "                 {}",
                    config.config_file.resolved_path().display()
                );
            }
            let _ = writeln!(
                out,
                "    thresholds   max {} errors, max {} warnings",
                config.policy.max_errors(),
                config.policy.max_warnings()
            );
            let fingerprint = if self.verbose > 0 {
                config.fingerprint.as_str().to_string()
            } else {
                config.fingerprint.short().to_string()
            };
            let _ = writeln!(out, "    fingerprint  {}", fingerprint);
        }

        out
    }

    pub fn render_check(&self, result: &CheckResult) -> String {
        let icons = self.icons();
        let mut out = String::new();
        let policy = result.config.policy;

        if result.is_success() {
            let _ = writeln!(out, "{} {} passed", icons.check, result.config.module);
        } else {
            let _ = writeln!(out, "{} {} failed", icons.cross, result.config.module);
        }
        let _ = writeln!(
            out,
            "  errors    {} / {}",
            result.counts.errors,
            policy.max_errors()
        );
        let _ = writeln!(
            out,
            "  warnings  {} / {}",
            result.counts.warnings,
            policy.max_warnings()
        );
        for reason in &result.verdict.reasons {
            let _ = writeln!(out, "  - {}", reason);
        }

        out
    }

    pub fn render_catalog(&self, entries: &[VersionCatalogEntry]) -> String {
        let width = entries
            .iter()
            .map(|e| e.key.as_str().len())
            .max()
            .unwrap_or(0);
        let mut out = String::new();
        for entry in entries {
            let _ = write!(out, "{:<width$}  {}", entry.key.as_str(), entry.version);
            if let Some(coordinate) = &entry.coordinate {
                let _ = write!(out, "  ({})", coordinate);
            }
            let _ = writeln!(out);
        }
        out
    }

    pub fn render_modules(&self, modules: &[ModuleId]) -> String {
        let width = modules.iter().map(|m| m.name().len()).max().unwrap_or(0);
        let mut out = String::new();
        for module in modules {
            if self.verbose > 0 {
                let _ = writeln!(
                    out,
                    "{:<width$}  {}",
                    module.name(),
                    module.dir().display()
                );
            } else {
                let _ = writeln!(out, "{}", module.name());
            }
        }
        out
    }
}

pub fn catalog_entry_json(entry: &VersionCatalogEntry) -> serde_json::Value {
    serde_json::json!({
        "event": "catalog_entry",
        "command": "catalog",
        "key": entry.key.as_str(),
        "version": entry.version,
        "kind": entry.kind,
        "coordinate": entry.coordinate,
    })
}

pub fn module_json(module: &ModuleId) -> serde_json::Value {
    serde_json::json!({
        "event": "module",
        "command": "modules",
        "module": module.name(),
        "dir": module.dir().display().to_string(),
    })
}

pub fn error_json(message: &str) -> serde_json::Value {
    serde_json::json!({
        "event": "error",
        "message": message,
    })
}
