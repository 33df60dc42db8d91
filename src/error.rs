//! Top-level error type and stable exit codes

use crate::entry::{EntryError, GenerateError};
use crate::repository::RepositoryError;
use crate::settings::SettingsError;

/// Stable process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,
    /// Global settings file is missing
    SettingsMissing = 1,
    /// Global settings file could not be read or parsed
    SettingsInvalid = 2,
    /// Configured repository directory is missing
    RepositoryMissing = 3,
    /// The repository directory could not be scanned
    RepositoryUnreadable = 4,
    /// An entry config file could not be read or parsed
    EntryInvalid = 5,
    /// The UUID-lookup tool could not be run
    UuidLookupFailed = 6,
    /// Writing the output failed
    Output = 7,
}

impl ExitCode {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

/// Any failure that stops the tool
#[derive(Debug, thiserror::Error)]
pub enum BootisoError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Entry(#[from] EntryError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<GenerateError> for BootisoError {
    fn from(err: GenerateError) -> Self {
        match err {
            GenerateError::Repository(e) => BootisoError::Repository(e),
            GenerateError::Entry(e) => BootisoError::Entry(e),
            GenerateError::Output(e) => BootisoError::Output(e),
        }
    }
}

impl BootisoError {
    /// Get the stable exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            BootisoError::Settings(e) => match e {
                SettingsError::NotFound(_) => ExitCode::SettingsMissing,
                SettingsError::Io(_) | SettingsError::Parse(_) => ExitCode::SettingsInvalid,
                SettingsError::RepositoryMissing(_) => ExitCode::RepositoryMissing,
            },
            BootisoError::Repository(e) => match e {
                RepositoryError::NotFound(_) => ExitCode::RepositoryMissing,
                RepositoryError::Walk(_) => ExitCode::RepositoryUnreadable,
                RepositoryError::Unreadable { .. } => ExitCode::EntryInvalid,
                RepositoryError::Entry(e) => entry_exit_code(e),
            },
            BootisoError::Entry(e) => entry_exit_code(e),
            BootisoError::Output(_) | BootisoError::Serialization(_) => ExitCode::Output,
        }
    }
}

fn entry_exit_code(err: &EntryError) -> ExitCode {
    match err {
        EntryError::Io { .. } | EntryError::Parse { .. } => ExitCode::EntryInvalid,
        EntryError::Uuid { .. } => ExitCode::UuidLookupFailed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uuid::UuidError;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes_are_stable() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::SettingsMissing.as_i32(), 1);
        assert_eq!(ExitCode::RepositoryMissing.as_i32(), 3);
        assert_eq!(ExitCode::Output.as_i32(), 7);
    }

    #[test]
    fn test_missing_paths_map_to_nonzero() {
        let err = BootisoError::from(SettingsError::NotFound(PathBuf::from("/etc/bootiso.yaml")));
        assert_eq!(err.exit_code(), ExitCode::SettingsMissing);

        let err = BootisoError::from(SettingsError::RepositoryMissing(PathBuf::from("/x")));
        assert_eq!(err.exit_code(), ExitCode::RepositoryMissing);

        let err = BootisoError::from(RepositoryError::NotFound(PathBuf::from("/x")));
        assert_eq!(err.exit_code(), ExitCode::RepositoryMissing);
    }

    #[test]
    fn test_scan_failure_is_repository_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let walk_err = walkdir::WalkDir::new(temp.path().join("missing"))
            .into_iter()
            .find_map(Result::err)
            .unwrap();

        let err = BootisoError::from(RepositoryError::Walk(walk_err));
        assert_eq!(err.exit_code(), ExitCode::RepositoryUnreadable);
        assert_eq!(err.exit_code().as_i32(), 4);
    }

    #[test]
    fn test_unreadable_entry_link_is_entry_error() {
        let err = BootisoError::from(RepositoryError::Unreadable {
            path: PathBuf::from("/etc/bootiso.d/gone.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "dangling"),
        });
        assert_eq!(err.exit_code(), ExitCode::EntryInvalid);
    }

    #[test]
    fn test_generate_error_flattened() {
        let uuid = UuidError::Spawn {
            tool: PathBuf::from("/sbin/blkid"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let err = BootisoError::from(GenerateError::Entry(EntryError::Uuid {
            name: "Test OS".to_string(),
            source: uuid,
        }));
        assert_eq!(err.exit_code(), ExitCode::UuidLookupFailed);
        assert!(err.to_string().contains("Test OS"));
    }
}
