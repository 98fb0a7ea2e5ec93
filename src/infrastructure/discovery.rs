//! Build root and module discovery

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::debug;

use crate::config::{ModulesSettings, SETTINGS_FILE};
use crate::error::{LintholdError, LintholdResult};

const SETTINGS_GRADLE: &[&str] = &["settings.gradle.kts", "settings.gradle"];

/// Discover the build root from an invocation directory.
///
/// Markers are tried in tiers, each walking upward from `start`:
/// - `linthold.toml`
/// - `settings.gradle.kts` / `settings.gradle`
/// - `.git/` or `.git` file (git repo root / worktree)
///
/// Falls back to `start` when no markers are found.
pub fn discover_build_root(start: &Path) -> PathBuf {
    let tiers: [&dyn Fn(&Path) -> bool; 3] = [
        &|dir: &Path| dir.join(SETTINGS_FILE).is_file(),
        &|dir: &Path| SETTINGS_GRADLE.iter().any(|name| dir.join(name).is_file()),
        &|dir: &Path| dir.join(".git").exists(),
    ];

    for has_marker in tiers {
        if let Some(dir) = start.ancestors().find(|dir| has_marker(dir)) {
            return dir.to_path_buf();
        }
    }
    start.to_path_buf()
}

/// Module directories of the build at `root`, sorted by path.
///
/// Declared `members` are taken as-is (relative to `root`) and must exist.
/// Without members, every directory holding the marker file is a module;
/// `.gitignore`d and hidden directories are skipped.
pub fn discover_modules(root: &Path, modules: &ModulesSettings) -> LintholdResult<Vec<PathBuf>> {
    let mut found = if modules.members.is_empty() {
        scan_for_marker(root, &modules.marker)
    } else {
        declared_members(root, &modules.members)?
    };

    found.sort();
    found.dedup();
    debug!(root = %root.display(), count = found.len(), "discovered modules");
    Ok(found)
}

fn declared_members(root: &Path, members: &[PathBuf]) -> LintholdResult<Vec<PathBuf>> {
    members
        .iter()
        .map(|member| {
            let dir = root.join(member);
            if dir.is_dir() {
                Ok(dir)
            } else {
                Err(LintholdError::ModuleNotFound { path: dir })
            }
        })
        .collect()
}

fn scan_for_marker(root: &Path, marker: &str) -> Vec<PathBuf> {
    let walker = WalkBuilder::new(root)
        .hidden(true)
        .git_ignore(true)
        .git_global(false)
        .git_exclude(true)
        .require_git(false)
        .build();

    walker
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_some_and(|t| t.is_file()))
        .filter(|entry| entry.file_name() == OsStr::new(marker))
        .filter_map(|entry| entry.path().parent().map(Path::to_path_buf))
        .collect()
}
