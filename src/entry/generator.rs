//! GRUB configuration generation for a whole repository

use std::io::Write;

use super::{EntryError, ResolvedEntry};
use crate::repository::{Repository, RepositoryError};
use crate::uuid::UuidLookup;

/// First line of the generated output
pub const HEADER: &str = "# BOOTISO Generated entries below";

/// Errors for generation
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Entry(#[from] EntryError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Renders every entry of a repository
pub struct Generator<'a> {
    repository: &'a Repository,
    lookup: &'a dyn UuidLookup,
}

impl<'a> Generator<'a> {
    pub fn new(repository: &'a Repository, lookup: &'a dyn UuidLookup) -> Self {
        Self { repository, lookup }
    }

    /// Resolve all entries, one at a time, in repository order
    pub fn resolve_all(&self) -> Result<Vec<ResolvedEntry>, GenerateError> {
        let mut resolved = Vec::new();

        for (path, spec) in self.repository.entries()? {
            tracing::info!(path = %path.display(), name = %spec.name, "generating entry");
            resolved.push(ResolvedEntry::resolve(spec, self.lookup)?);
        }

        Ok(resolved)
    }

    /// Write the header and one block per entry.
    ///
    /// Every entry is resolved before the first byte is written.
    pub fn generate(&self, out: &mut dyn Write) -> Result<usize, GenerateError> {
        let entries = self.resolve_all()?;

        writeln!(out, "{}", HEADER)?;
        for entry in &entries {
            write!(out, "{}", entry)?;
        }
        out.flush()?;

        Ok(entries.len())
    }
}
