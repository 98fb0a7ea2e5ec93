//! Module identity.
//!
//! A module is named by its directory relative to the build root, using
//! project-path notation: `:` for the root itself, `:api` for `api/`,
//! `:proxy:native` for `proxy/native/`.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ModuleId {
    name: String,
    dir: PathBuf,
}

impl ModuleId {
    /// Build the id for `dir`, which must already be known to be under `root`.
    ///
    /// Returns `None` when `dir` is not inside `root`.
    pub fn from_dirs(root: &Path, dir: &Path) -> Option<Self> {
        let relative = dir.strip_prefix(root).ok()?;
        Some(Self {
            name: project_path(relative),
            dir: dir.to_path_buf(),
        })
    }

    /// Project-path name, e.g. `:api`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute module directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn is_root(&self) -> bool {
        self.name == ":"
    }
}

fn project_path(relative: &Path) -> String {
    let segments: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    format!(":{}", segments.join(":"))
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
