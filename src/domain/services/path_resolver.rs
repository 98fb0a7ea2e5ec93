//! Path resolver
//!
//! Locates the shared rule-set file relative to the build root.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::ConfigFileReference;
use crate::domain::ports::{FileSystem, FsError, PathKind};
use crate::error::{LintholdError, LintholdResult};

#[derive(Clone)]
pub struct PathResolver {
    fs: Arc<dyn FileSystem>,
}

impl PathResolver {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Resolve `relative` under `root` to a canonical absolute path.
    ///
    /// An absolute `relative` is used as-is.
    pub fn resolve(&self, root: &Path, relative: &str) -> LintholdResult<PathBuf> {
        Ok(self.reference(root, relative)?.resolved_path().to_path_buf())
    }

    /// Same as [`resolve`](Self::resolve), keeping root and relative path.
    pub fn reference(&self, root: &Path, relative: &str) -> LintholdResult<ConfigFileReference> {
        let relative = relative.trim();
        if relative.is_empty() {
            return Err(LintholdError::EmptyPath);
        }

        let candidate = root.join(relative);
        let not_found = || LintholdError::FileNotFound {
            path: candidate.clone(),
            root: root.to_path_buf(),
            relative: relative.to_string(),
        };

        match self.fs.kind(&candidate) {
            PathKind::Missing => return Err(not_found()),
            PathKind::Dir => {
                return Err(LintholdError::NotAFile {
                    path: candidate.clone(),
                })
            }
            PathKind::File => {}
        }

        // Can still race with a deletion between the two calls.
        let resolved = self.fs.canonicalize(&candidate).map_err(|e| match e {
            FsError::NotFound(_) => not_found(),
            other => other.into(),
        })?;

        debug!(relative, resolved = %resolved.display(), "resolved shared config file");

        Ok(ConfigFileReference::new(
            root.to_path_buf(),
            relative.to_string(),
            resolved,
        ))
    }
}

impl std::fmt::Debug for PathResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathResolver").finish_non_exhaustive()
    }
}
