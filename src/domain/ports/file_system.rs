//! FileSystem port - read-only view of the filesystem
//!
//! Path resolution and fingerprinting only inspect files; nothing in a
//! resolution run writes.

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(std::io::Error),
}

impl FsError {
    /// Attach the offending path to an I/O error.
    pub fn from_io(err: std::io::Error, path: &Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for FsError {}

impl From<FsError> for crate::error::LintholdError {
    fn from(err: FsError) -> Self {
        match err {
            FsError::Io(io) => crate::error::LintholdError::Io(io),
            other => crate::error::LintholdError::Io(std::io::Error::other(other.to_string())),
        }
    }
}

/// What a path points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Dir,
    Missing,
}

/// Abstract read-only file system interface
///
/// Implementations:
/// - `LocalFs` - the real disk
/// - in-memory mocks in tests
pub trait FileSystem: Send + Sync {
    /// Classify a path (symlinks followed)
    fn kind(&self, path: &Path) -> PathKind;

    /// Canonical absolute form of an existing path
    fn canonicalize(&self, path: &Path) -> FsResult<PathBuf>;

    /// Read file content as bytes
    fn read(&self, path: &Path) -> FsResult<Vec<u8>>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool {
        self.kind(path) != PathKind::Missing
    }
}
