use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use linthold::infrastructure::discover_build_root;

/// Where the command was run and which build it applies to.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// `-C` directory or the current directory; CLI paths are relative to it
    pub base: PathBuf,
    pub root: PathBuf,
}

impl Invocation {
    /// `-C <dir>` names the build root directly; otherwise the root is
    /// discovered upward from the current directory.
    pub fn from_cli(root: Option<&Path>) -> Result<Self> {
        match root {
            Some(dir) => {
                if !dir.is_dir() {
                    bail!("build root is not a directory: {}", dir.display());
                }
                Ok(Self {
                    base: dir.to_path_buf(),
                    root: dir.to_path_buf(),
                })
            }
            None => {
                let cwd = std::env::current_dir()?;
                Ok(Self {
                    root: discover_build_root(&cwd),
                    base: cwd,
                })
            }
        }
    }

    /// Resolve a command-line path against the invocation directory.
    pub fn path(&self, arg: &Path) -> PathBuf {
        self.base.join(arg)
    }
}
