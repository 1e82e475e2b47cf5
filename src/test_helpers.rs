//! Test helpers for hermetic filesystem tests.
//!
//! Compiled for unit tests and behind the `test-helpers` feature.
//!
//! ```rust,ignore
//! let project = TestProject::new()?;
//! project.add_file("Demo/README.md", "# Demo")?;
//! let before = snapshot(project.root());
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

use crate::{Result, ScaffoldError};

/// Temporary directory that plays the role of the caller's working directory.
pub struct TestProject {
    // Held so the directory lives as long as the project
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestProject {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path().to_path_buf();
        Ok(Self {
            _temp_dir: temp_dir,
            root,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn add_dir(&self, relative: &str) -> Result<PathBuf> {
        let path = self.path(relative);
        fs::create_dir_all(&path).map_err(|e| ScaffoldError::filesystem(&path, e))?;
        Ok(path)
    }

    /// Writes `content`, creating parent directories as needed.
    pub fn add_file(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ScaffoldError::filesystem(parent, e))?;
        }
        fs::write(&path, content).map_err(|e| ScaffoldError::filesystem(&path, e))?;
        Ok(path)
    }

    pub fn read(&self, relative: &str) -> Result<String> {
        let path = self.path(relative);
        fs::read_to_string(&path).map_err(|e| ScaffoldError::filesystem(&path, e))
    }
}

/// Entry kind and content of every path below `root`, keyed by relative path.
///
/// Directories map to `None`. Two equal snapshots mean nothing was created,
/// removed or rewritten with different bytes.
pub fn snapshot(root: &Path) -> BTreeMap<PathBuf, Option<Vec<u8>>> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .map(|entry| {
            let relative = entry
                .path()
                .strip_prefix(root)
                .map(Path::to_path_buf)
                .unwrap_or_else(|_| entry.path().to_path_buf());
            let content = if entry.file_type().is_file() {
                fs::read(entry.path()).ok()
            } else {
                None
            };
            (relative, content)
        })
        .collect()
}
