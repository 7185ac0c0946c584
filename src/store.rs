//! Read-only filesystem access to the docs content tree.
//!
//! The store wraps a rooted directory of content files and is the only module
//! that touches the filesystem. Everything above it (resolver, loader,
//! sequencer) works in terms of root-relative storage paths, which keeps those
//! modules testable against any temp directory and keeps absolute paths out
//! of public identifiers.
//!
//! ## Storage Paths
//!
//! A storage path is the root-relative path of a content file with its
//! extension removed but order tokens intact, e.g. `components/01.button`
//! for `<root>/components/01.button.mdx`. The resolver maps public slugs to
//! storage paths; [`ContentStore::read`] maps a storage path back to bytes.
//!
//! The tree is treated as immutable for the duration of a build. Nothing in
//! this module caches or mutates.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Handle to the content root. Construct once per build and pass by
/// reference; the store holds no open files and no state beyond the paths.
#[derive(Debug, Clone)]
pub struct ContentStore {
    root: PathBuf,
    extension: String,
}

impl ContentStore {
    pub fn new(root: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            root: root.into(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// List the entries of a root-relative directory, sorted by file name.
    ///
    /// Hidden entries and `config.toml` are skipped. Returns
    /// [`StoreError::NotFound`] when the directory does not exist — for the
    /// empty relative path this means the content root itself is missing.
    pub fn entries(&self, rel_dir: &Path) -> Result<Vec<PathBuf>, StoreError> {
        let dir = self.root.join(rel_dir);
        if !dir.is_dir() {
            return Err(StoreError::NotFound(dir));
        }

        let mut entries: Vec<PathBuf> = fs::read_dir(&dir)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                let name = p
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                !name.starts_with('.') && name != "config.toml"
            })
            .collect();

        entries.sort();
        Ok(entries)
    }

    /// Whether a path is a content file (regular file with the content
    /// extension, compared case-insensitively).
    pub fn is_content_file(&self, path: &Path) -> bool {
        path.is_file()
            && path
                .extension()
                .map(|e| e.eq_ignore_ascii_case(&self.extension))
                .unwrap_or(false)
    }

    /// Read a content file by its extension-less storage path.
    ///
    /// The extension is appended, not substituted — storage paths contain
    /// dots from order tokens (`01.intro`), and `Path::with_extension` would
    /// eat everything after the last one.
    pub fn read(&self, storage_path: &str) -> Result<String, StoreError> {
        let full = self.root.join(format!("{storage_path}.{}", self.extension));
        if !full.is_file() {
            return Err(StoreError::NotFound(full));
        }
        Ok(fs::read_to_string(&full)?)
    }
}
