//! ISO entry repository
//!
//! The repository is a flat directory of `*.yaml` entry files. Only the top
//! level is scanned; hidden files and other extensions are skipped.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::entry::{EntryError, EntrySpec};

/// Extension of entry config files
pub const ENTRY_EXTENSION: &str = "yaml";

/// Errors for repository scanning
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Repository directory not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to scan repository: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Entry file {path} is unreadable: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Entry(#[from] EntryError),
}

/// A directory of entry config files
#[derive(Debug, Clone)]
pub struct Repository {
    root: PathBuf,
}

impl Repository {
    /// Open a repository, failing if the directory does not exist
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(RepositoryError::NotFound(root));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Paths of all entry config files, sorted by file name
    pub fn config_files(&self) -> Result<Vec<PathBuf>, RepositoryError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by(|a, b| a.file_name().cmp(b.file_name()))
        {
            let entry = entry?;
            let path = entry.path();

            if !is_entry_file(path) {
                tracing::debug!(path = %path.display(), "skipping non-entry file");
                continue;
            }

            // Names are matched first; only matching links are resolved.
            let is_file = if entry.file_type().is_symlink() {
                std::fs::metadata(path)
                    .map_err(|source| RepositoryError::Unreadable {
                        path: path.to_path_buf(),
                        source,
                    })?
                    .is_file()
            } else {
                entry.file_type().is_file()
            };

            if !is_file {
                continue;
            }

            tracing::debug!(path = %path.display(), "found entry file");
            files.push(entry.into_path());
        }

        Ok(files)
    }

    /// Parse every entry file, keeping its path alongside
    pub fn entries(&self) -> Result<Vec<(PathBuf, EntrySpec)>, RepositoryError> {
        self.config_files()?
            .into_iter()
            .map(|path| -> Result<_, RepositoryError> {
                let spec = EntrySpec::load(&path)?;
                Ok((path, spec))
            })
            .collect()
    }
}

fn is_entry_file(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .and_then(|n| n.to_str())
        .map_or(true, |n| n.starts_with('.'));

    !hidden && path.extension().and_then(|e| e.to_str()) == Some(ENTRY_EXTENSION)
}
