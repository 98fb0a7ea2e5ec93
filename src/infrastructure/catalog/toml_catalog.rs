//! Gradle-style TOML version catalog
//!
//! Implements the CatalogSource port for `libs.versions.toml` files:
//!
//! ```toml
//! [versions]
//! checkstyle = "10.3"
//!
//! [libraries]
//! checkstyle = { module = "com.puppycrawl.tools:checkstyle", version.ref = "checkstyle" }
//! guava = "com.google.guava:guava:33.0-jre"
//!
//! [plugins]
//! shadow = { id = "com.gradleup.shadow", version = "8.3.0" }
//! ```
//!
//! All three tables are flattened into one key space. On a key collision
//! `[libraries]` wins over `[plugins]`, which wins over `[versions]`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::domain::entities::{EntryKind, VersionCatalog, VersionCatalogEntry};
use crate::domain::ports::{CatalogSource, FileSystem, FsError};
use crate::domain::value_objects::CatalogKey;
use crate::error::{LintholdError, LintholdResult};
use crate::infrastructure::fs::LocalFs;

/// TOML-based catalog source
pub struct TomlCatalogSource {
    path: PathBuf,
    fs: Arc<dyn FileSystem>,
}

impl TomlCatalogSource {
    /// Read the catalog at `path` from the local disk
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

    fn invalid(&self, message: impl Into<String>) -> LintholdError {
        LintholdError::InvalidCatalog {
            file: self.path.clone(),
            message: message.into(),
        }
    }
}

impl CatalogSource for TomlCatalogSource {
    fn load(&self) -> LintholdResult<VersionCatalog> {
        let bytes = self.fs.read(&self.path).map_err(|e| match e {
            FsError::NotFound(_) => self.invalid("file not found"),
            other => LintholdError::from(other),
        })?;
        let content = String::from_utf8(bytes).map_err(|_| self.invalid("not valid UTF-8"))?;

        let catalog = parse_catalog(&content).map_err(|message| self.invalid(message))?;
        debug!(path = %self.path.display(), entries = catalog.len(), "loaded version catalog");
        Ok(catalog)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// TOML representation of the catalog file
#[derive(Debug, Default, Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    versions: BTreeMap<String, TomlVersion>,
    #[serde(default)]
    libraries: BTreeMap<String, TomlDependency>,
    #[serde(default)]
    plugins: BTreeMap<String, TomlDependency>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TomlVersion {
    Plain(String),
    Rich(RichVersion),
}

/// `{ ref = .. }` or a rich constraint; `version.ref = ".."` parses to this too
#[derive(Debug, Deserialize)]
struct RichVersion {
    #[serde(rename = "ref")]
    reference: Option<String>,
    strictly: Option<String>,
    require: Option<String>,
    prefer: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TomlDependency {
    Notation(String),
    Table(DependencyTable),
}

#[derive(Debug, Deserialize)]
struct DependencyTable {
    /// Library `group:name`
    module: Option<String>,
    group: Option<String>,
    name: Option<String>,
    /// Plugin id
    id: Option<String>,
    version: Option<TomlVersion>,
}

/// Parse catalog text into a `VersionCatalog`; errors are plain messages.
pub(crate) fn parse_catalog(content: &str) -> Result<VersionCatalog, String> {
    let raw: TomlCatalog = toml::from_str(content).map_err(|e| e.to_string())?;

    let versions = normalize_table("versions", raw.versions)?;
    let libraries = normalize_table("libraries", raw.libraries)?;
    let plugins = normalize_table("plugins", raw.plugins)?;

    let mut aliases: BTreeMap<CatalogKey, String> = BTreeMap::new();
    for (key, (alias, version)) in &versions {
        let version = match version {
            TomlVersion::Plain(v) => v.clone(),
            TomlVersion::Rich(rich) => {
                if rich.reference.is_some() {
                    return Err(format!("version alias '{}' cannot use 'ref'", alias));
                }
                rich_constraint(rich)
                    .ok_or_else(|| format!("version alias '{}' declares no version", alias))?
            }
        };
        aliases.insert(key.clone(), version);
    }

    let mut merged: BTreeMap<CatalogKey, VersionCatalogEntry> = BTreeMap::new();
    for (key, version) in &aliases {
        merged.insert(
            key.clone(),
            VersionCatalogEntry {
                key: key.clone(),
                version: version.clone(),
                kind: EntryKind::Version,
                coordinate: None,
            },
        );
    }
    for (key, (alias, plugin)) in plugins {
        let entry = plugin_entry(key.clone(), &alias, plugin, &aliases)?;
        merged.insert(key, entry);
    }
    for (key, (alias, library)) in libraries {
        let entry = library_entry(key.clone(), &alias, library, &aliases)?;
        merged.insert(key, entry);
    }

    VersionCatalog::from_entries(merged.into_values()).map_err(|e| e.to_string())
}

/// Normalize the aliases of one table, rejecting aliases that collide.
fn normalize_table<T>(
    table: &str,
    raw: BTreeMap<String, T>,
) -> Result<BTreeMap<CatalogKey, (String, T)>, String> {
    let mut out: BTreeMap<CatalogKey, (String, T)> = BTreeMap::new();
    for (alias, value) in raw {
        let key = CatalogKey::parse(&alias).map_err(|e| format!("[{}] {}", table, e))?;
        if let Some((existing, _)) = out.get(&key) {
            return Err(format!(
                "[{}] aliases '{}' and '{}' both normalize to '{}'",
                table, existing, alias, key
            ));
        }
        out.insert(key, (alias, value));
    }
    Ok(out)
}

fn library_entry(
    key: CatalogKey,
    alias: &str,
    library: TomlDependency,
    aliases: &BTreeMap<CatalogKey, String>,
) -> Result<VersionCatalogEntry, String> {
    let (coordinate, version) = match library {
        TomlDependency::Notation(notation) => {
            let parts: Vec<&str> = notation.split(':').collect();
            match parts.as_slice() {
                [group, name, version] => (format!("{}:{}", group, name), Some(version.to_string())),
                [_, _] => (notation.clone(), None),
                _ => {
                    return Err(format!(
                        "library '{}' has invalid notation '{}' (expected group:name:version)",
                        alias, notation
                    ))
                }
            }
        }
        TomlDependency::Table(table) => {
            let coordinate = match (table.module, table.group, table.name) {
                (Some(module), _, _) => module,
                (None, Some(group), Some(name)) => format!("{}:{}", group, name),
                _ => {
                    return Err(format!(
                        "library '{}' needs 'module' or 'group' and 'name'",
                        alias
                    ))
                }
            };
            let version = table
                .version
                .map(|v| table_version(alias, v, aliases))
                .transpose()?;
            (coordinate, version)
        }
    };

    let version = version.ok_or_else(|| format!("library '{}' has no version", alias))?;
    Ok(VersionCatalogEntry {
        key,
        version,
        kind: EntryKind::Library,
        coordinate: Some(coordinate),
    })
}

fn plugin_entry(
    key: CatalogKey,
    alias: &str,
    plugin: TomlDependency,
    aliases: &BTreeMap<CatalogKey, String>,
) -> Result<VersionCatalogEntry, String> {
    let (id, version) = match plugin {
        TomlDependency::Notation(notation) => match notation.rsplit_once(':') {
            Some((id, version)) => (id.to_string(), version.to_string()),
            None => {
                return Err(format!(
                    "plugin '{}' has invalid notation '{}' (expected id:version)",
                    alias, notation
                ))
            }
        },
        TomlDependency::Table(table) => {
            let id = table
                .id
                .ok_or_else(|| format!("plugin '{}' needs an 'id'", alias))?;
            let version = table
                .version
                .map(|v| table_version(alias, v, aliases))
                .transpose()?
                .ok_or_else(|| format!("plugin '{}' has no version", alias))?;
            (id, version)
        }
    };

    Ok(VersionCatalogEntry {
        key,
        version,
        kind: EntryKind::Plugin,
        coordinate: Some(id),
    })
}

fn table_version(
    alias: &str,
    version: TomlVersion,
    aliases: &BTreeMap<CatalogKey, String>,
) -> Result<String, String> {
    match version {
        TomlVersion::Plain(v) => Ok(v),
        TomlVersion::Rich(rich) => {
            if let Some(reference) = &rich.reference {
                let target = CatalogKey::parse(reference)
                    .ok()
                    .and_then(|k| aliases.get(&k))
                    .ok_or_else(|| {
                        format!(
                            "'{}' references undefined version '{}'",
                            alias, reference
                        )
                    })?;
                return Ok(target.clone());
            }
            rich_constraint(&rich).ok_or_else(|| format!("'{}' declares no version", alias))
        }
    }
}

fn rich_constraint(rich: &RichVersion) -> Option<String> {
    rich.strictly
        .clone()
        .or_else(|| rich.require.clone())
        .or_else(|| rich.prefer.clone())
}
