//! # Schema Sources
//!
//! The file-read and directory-discovery primitives the loader depends on.
//! [`FsSource`] reads the real filesystem; [`MemorySource`] serves fixed
//! contents and is what tests and embedders without a disk use.

use std::collections::BTreeMap;
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Where schema bytes come from.
pub trait SchemaSource: Send + Sync {
    /// Read the raw bytes at `path`.
    fn read(&self, path: &Path) -> impl Future<Output = io::Result<Vec<u8>>> + Send;

    /// List every `*.json` file under `root`, recursively.
    ///
    /// Directories are never returned. Fails if `root` does not exist or is
    /// not a directory.
    fn discover(&self, root: &Path) -> impl Future<Output = io::Result<Vec<PathBuf>>> + Send;
}

/// Reads schemas from the local filesystem.
///
/// Discovery walks the tree without following symlinked directories and
/// returns paths joined onto the given root, sorted.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl SchemaSource for FsSource {
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }

    async fn discover(&self, root: &Path) -> io::Result<Vec<PathBuf>> {
        if !tokio::fs::metadata(root).await?.is_dir() {
            return Err(not_a_directory(root));
        }
        let root = root.to_path_buf();
        tokio::task::spawn_blocking(move || walk_json_files(&root))
            .await
            .map_err(io::Error::other)?
    }
}

fn not_a_directory(root: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("not a directory: {}", root.display()),
    )
}

fn walk_json_files(root: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry?;
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if is_file && entry.path().extension().is_some_and(|ext| ext == "json") {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// In-memory source keyed by path.
///
/// `discover` returns every stored path that lies under the root, compared
/// component-wise. A root with no stored files under it is reported as
/// not found, and a root that is itself a stored file as not a directory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: BTreeMap<PathBuf, Vec<u8>>,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with raw contents.
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }

    /// Add a file holding the serialized form of `value`.
    pub fn with_json(self, path: impl Into<PathBuf>, value: &serde_json::Value) -> Self {
        self.with_file(path, value.to_string())
    }
}

impl SchemaSource for MemorySource {
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )
        })
    }

    async fn discover(&self, root: &Path) -> io::Result<Vec<PathBuf>> {
        if self.files.contains_key(root) {
            return Err(not_a_directory(root));
        }
        let files: Vec<PathBuf> = self
            .files
            .keys()
            .filter(|path| path.starts_with(root))
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .cloned()
            .collect();
        if files.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory: {}", root.display()),
            ));
        }
        Ok(files)
    }
}
