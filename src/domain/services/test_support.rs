//! In-memory fixtures shared by the service tests.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::entities::{EntryKind, VersionCatalog, VersionCatalogEntry};
use crate::domain::ports::{FileSystem, FsError, FsResult, PathKind};
use crate::domain::value_objects::CatalogKey;

pub(crate) fn catalog_of(pairs: &[(&str, &str)]) -> Arc<VersionCatalog> {
    let entries = pairs.iter().map(|(key, version)| VersionCatalogEntry {
        key: CatalogKey::parse(key).unwrap(),
        version: version.to_string(),
        kind: EntryKind::Library,
        coordinate: None,
    });
    Arc::new(VersionCatalog::from_entries(entries).unwrap())
}

/// Mock filesystem: a set of files with contents plus a set of directories.
/// Paths are already canonical; `canonicalize` is identity for known paths.
#[derive(Debug, Default, Clone)]
pub(crate) struct MockFs {
    files: BTreeMap<PathBuf, Vec<u8>>,
    dirs: Vec<PathBuf>,
}

impl MockFs {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_dir(mut self, path: &str) -> Self {
        self.dirs.push(PathBuf::from(path));
        self
    }

    pub(crate) fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files
            .insert(PathBuf::from(path), content.as_bytes().to_vec());
        self
    }

    pub(crate) fn shared(self) -> Arc<dyn FileSystem> {
        Arc::new(self)
    }
}

impl FileSystem for MockFs {
    fn kind(&self, path: &Path) -> PathKind {
        if self.files.contains_key(path) {
            PathKind::File
        } else if self.dirs.iter().any(|d| d == path) {
            PathKind::Dir
        } else {
            PathKind::Missing
        }
    }

    fn canonicalize(&self, path: &Path) -> FsResult<PathBuf> {
        match self.kind(path) {
            PathKind::Missing => Err(FsError::NotFound(path.to_path_buf())),
            _ => Ok(path.to_path_buf()),
        }
    }

    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }
}
