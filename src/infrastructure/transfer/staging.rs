//! Staging tree for mirror uploads
//!
//! Copies the working tree minus exclusions into a temporary directory so
//! the upload tool can send it recursively as-is.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

use tempfile::TempDir;
use walkdir::WalkDir;

use crate::domain::value_objects::{PathPatterns, PatternError};

/// A staged copy of the project. Deleted on drop.
#[derive(Debug)]
pub struct StagedTree {
    dir: TempDir,
    files: usize,
}

impl StagedTree {
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Number of regular files staged
    pub fn files(&self) -> usize {
        self.files
    }

    /// Top-level entries, sorted, as passed to the upload tool
    pub fn entries(&self) -> io::Result<Vec<OsString>> {
        let mut entries = fs::read_dir(self.dir.path())?
            .map(|entry| entry.map(|e| e.file_name()))
            .collect::<io::Result<Vec<_>>>()?;
        entries.sort();
        Ok(entries)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StagingError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error("failed to stage {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Copy `root` into a fresh temporary directory, skipping `.git` and
/// everything matched by `excludes`. Symlinks are copied as the file they
/// point to; links to directories are skipped.
pub fn stage_tree(root: &Path, excludes: &[String]) -> Result<StagedTree, StagingError> {
    let patterns = PathPatterns::new(root, excludes)?;
    let dir = tempfile::Builder::new()
        .prefix("ftpush-stage-")
        .tempdir()
        .map_err(|source| StagingError::Io {
            path: "temporary directory".to_string(),
            source,
        })?;

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            let Ok(rel) = entry.path().strip_prefix(root) else {
                return false;
            };
            if rel.as_os_str().is_empty() {
                return true;
            }
            if rel.starts_with(".git") {
                return false;
            }
            !patterns.is_match(rel, entry.file_type().is_dir())
        });

    let mut files = 0;
    for entry in walker {
        let entry = entry.map_err(|e| StagingError::Io {
            path: e
                .path()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            source: e.into(),
        })?;
        let Ok(rel) = entry.path().strip_prefix(root) else {
            continue;
        };
        if rel.as_os_str().is_empty() {
            continue;
        }
        let target = dir.path().join(rel);
        let io_err = |source| StagingError::Io {
            path: rel.display().to_string(),
            source,
        };

        let file_type = entry.file_type();
        let is_file = file_type.is_file()
            || (file_type.is_symlink()
                && fs::metadata(entry.path())
                    .map(|m| m.is_file())
                    .unwrap_or(false));
        if file_type.is_dir() {
            fs::create_dir_all(&target).map_err(io_err)?;
        } else if is_file {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
            fs::copy(entry.path(), &target).map_err(io_err)?;
            files += 1;
        }
    }

    Ok(StagedTree { dir, files })
}
