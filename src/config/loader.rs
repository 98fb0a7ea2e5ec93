//! Settings loading

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

pub use crate::domain::value_objects::ConfigWarning;
use crate::error::{LintholdError, LintholdResult};

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{Settings, SETTINGS_FILE};

pub const ENV_TOOL: &str = "LINTHOLD_TOOL";
pub const ENV_CONFIG_FILE: &str = "LINTHOLD_CONFIG_FILE";
pub const ENV_MAX_ERRORS: &str = "LINTHOLD_MAX_ERRORS";
pub const ENV_MAX_WARNINGS: &str = "LINTHOLD_MAX_WARNINGS";
pub const ENV_CATALOG: &str = "LINTHOLD_CATALOG";

/// Settings plus where they came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSettings {
    pub settings: Settings,
    pub warnings: Vec<ConfigWarning>,
    /// Settings file used, `None` when running on defaults
    pub source: Option<PathBuf>,
}

/// Load settings and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> LintholdResult<(Settings, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let settings: Settings = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| LintholdError::InvalidSettings {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let (section, key) = match path_str.split_once('.') {
                Some((section, rest)) => (
                    Some(section),
                    rest.rsplit('.').next().unwrap_or(rest),
                ),
                None => (None, path_str.as_str()),
            };
            ConfigWarning {
                key: key.to_string(),
                file: path.to_path_buf(),
                line: find_line_number(&content, section, key),
                suggestion: suggest_key(section, key),
            }
        })
        .collect();

    Ok((settings, warnings))
}

/// Load from build settings, user settings, or defaults.
///
/// The first settings file found is used whole. One that exists but does
/// not parse is an error.
pub fn load_or_default(build_root: &Path) -> LintholdResult<LoadedSettings> {
    let candidates = std::iter::once(build_root.join(SETTINGS_FILE)).chain(user_settings_path());

    for candidate in candidates {
        if !candidate.is_file() {
            continue;
        }

        debug!(path = %candidate.display(), "loading settings");
        let (settings, warnings) = load_with_warnings(&candidate)?;
        for warning in &warnings {
            warn!("{}", warning);
        }

        return Ok(LoadedSettings {
            settings: with_env_overrides(settings),
            warnings,
            source: Some(candidate),
        });
    }

    debug!("no settings file found, using defaults");
    Ok(LoadedSettings {
        settings: with_env_overrides(Settings::default()),
        warnings: Vec::new(),
        source: None,
    })
}

/// Apply environment variable overrides (LINTHOLD_* prefix)
pub fn with_env_overrides(settings: Settings) -> Settings {
    with_env_overrides_from(
        settings,
        |name| std::env::var(name).ok(),
        &mut std::io::stderr(),
    )
}

/// Apply overrides from an arbitrary variable lookup.
///
/// Invalid numeric values are reported to `writer` and leave the setting
/// unchanged.
pub fn with_env_overrides_from<F, W>(mut settings: Settings, lookup: F, writer: &mut W) -> Settings
where
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    if let Some(tool) = lookup(ENV_TOOL).filter(|v| !v.trim().is_empty()) {
        settings.analysis.tool = tool.trim().to_string();
    }

    if let Some(config_file) = lookup(ENV_CONFIG_FILE).filter(|v| !v.trim().is_empty()) {
        settings.analysis.config_file = config_file.trim().to_string();
    }

    if let Some(catalog) = lookup(ENV_CATALOG).filter(|v| !v.trim().is_empty()) {
        settings.catalog.path = PathBuf::from(catalog.trim());
    }

    if let Some(raw) = lookup(ENV_MAX_ERRORS) {
        let validator = EnvVarValidator::new(ENV_MAX_ERRORS, "a non-negative integer");
        let current = settings.analysis.max_errors;
        settings.analysis.max_errors =
            validator.parse_with_writer(&raw, parse_count, current, writer);
    }

    if let Some(raw) = lookup(ENV_MAX_WARNINGS) {
        let validator = EnvVarValidator::new(ENV_MAX_WARNINGS, "a non-negative integer");
        let current = settings.analysis.max_warnings;
        settings.analysis.max_warnings =
            validator.parse_with_writer(&raw, parse_count, current, writer);
    }

    settings
}

fn parse_count(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

/// User-level settings file: `$XDG_CONFIG_HOME/linthold/config.toml`,
/// falling back to `~/.config/linthold/config.toml`.
pub fn user_settings_path() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .map(|dir| dir.join("linthold/config.toml"))
}

/// Line of `key` inside `[section]`, or of the `[key]` header itself when
/// the unknown path is a whole section.
fn find_line_number(content: &str, section: Option<&str>, key: &str) -> Option<usize> {
    let mut current: Option<&str> = None;
    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if let Some(header) = trimmed.strip_prefix('[') {
            let name = header.split(']').next().unwrap_or(header).trim();
            if section.is_none() && name == key {
                return Some(i + 1);
            }
            current = Some(name);
            continue;
        }
        if current == section && assigns(trimmed, key) {
            return Some(i + 1);
        }
    }
    None
}

fn assigns(line: &str, key: &str) -> bool {
    line.strip_prefix(key)
        .is_some_and(|rest| rest.trim_start().starts_with('='))
}

const SECTIONS: &[(&str, &[&str])] = &[
    ("analysis", &["tool", "config_file", "max_errors", "max_warnings"]),
    ("catalog", &["path"]),
    ("modules", &["members", "marker"]),
];

/// A key that belongs to another section is pointed there; otherwise the
/// closest name within reach of two edits, never the key itself.
fn suggest_key(section: Option<&str>, unknown: &str) -> Option<String> {
    if let Some(section) = section {
        if let Some((home, _)) = SECTIONS
            .iter()
            .find(|(name, keys)| *name != section && keys.contains(&unknown))
        {
            return Some(format!("{}.{}", home, unknown));
        }
    }

    let candidates: Vec<&str> = match section {
        Some(section) => SECTIONS
            .iter()
            .find(|(name, _)| *name == section)
            .map(|(_, keys)| keys.to_vec())
            .unwrap_or_default(),
        None => SECTIONS.iter().map(|(name, _)| *name).collect(),
    };

    let mut best: Option<(&str, usize)> = None;
    for candidate in candidates {
        let dist = levenshtein(unknown, candidate);
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((candidate, dist)),
        }
    }

    match best {
        Some((candidate, dist)) if dist > 0 && dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}
