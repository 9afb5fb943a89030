//! File collection for the views and components trees

use crate::{is_source_file, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A source file read from disk
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path as returned by [`collect`]
    pub path: PathBuf,
    /// File extension (one of [`crate::SOURCE_EXTENSIONS`])
    pub extension: String,
    /// Raw text content
    pub content: String,
}

impl SourceFile {
    /// Read a collected file. Non UTF-8 content is reported as an IO error.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_string();

        Ok(Self {
            path: path.to_path_buf(),
            extension,
            content,
        })
    }
}

/// Recursively collect source files under `root`, sorted by full path.
///
/// A missing root yields an empty list. Entries that cannot be walked
/// (permission errors, symlink loops) are skipped with a warning.
pub fn collect<P: AsRef<Path>>(root: P) -> Vec<PathBuf> {
    let root = root.as_ref();

    if !root.is_dir() {
        tracing::debug!("No directory at {:?}, nothing to collect", root);
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry under {:?}: {}", root, e);
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|ext| ext.to_str())
                .map(is_source_file)
                .unwrap_or(false)
        })
        .map(|e| e.into_path())
        .collect();

    // string order, not component order: "a-b" sorts before "a/b"
    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    files.dedup();

    tracing::debug!("Collected {} source files under {:?}", files.len(), root);
    files
}
