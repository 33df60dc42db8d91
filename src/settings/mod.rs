//! Global settings
//!
//! Parses the global settings file (default `/etc/bootiso.yaml`). The file
//! names the repository directory holding per-ISO entry files and the
//! UUID-lookup utility used to resolve root devices.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default location of the global settings file
pub const DEFAULT_SETTINGS_PATH: &str = "/etc/bootiso.yaml";

/// Resolved global settings, loaded once at startup
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GlobalSettings {
    /// Directory containing the per-ISO `*.yaml` entry files
    #[serde(rename = "cfgpath")]
    pub repository_path: PathBuf,

    /// Path to the UUID-lookup utility (normally `blkid`)
    #[serde(rename = "blkid")]
    pub uuid_tool_path: PathBuf,
}

/// On-disk layout: everything lives under the `global` key
#[derive(Debug, Deserialize)]
struct SettingsDocument {
    global: GlobalSettings,
}

/// Errors that can occur when loading or validating global settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Settings file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Repository directory not found: {0}")]
    RepositoryMissing(PathBuf),
}

impl GlobalSettings {
    /// Build settings directly from the two paths
    pub fn new(repository_path: impl Into<PathBuf>, uuid_tool_path: impl Into<PathBuf>) -> Self {
        Self {
            repository_path: repository_path.into(),
            uuid_tool_path: uuid_tool_path.into(),
        }
    }

    /// Load settings from a specific path
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Err(SettingsError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let settings = Self::parse(&content)?;
        tracing::debug!(
            path = %path.display(),
            repository = %settings.repository_path.display(),
            uuid_tool = %settings.uuid_tool_path.display(),
            "loaded global settings"
        );
        Ok(settings)
    }

    /// Parse settings from a YAML string
    pub fn parse(content: &str) -> Result<Self, SettingsError> {
        let document: SettingsDocument = serde_yaml::from_str(content)?;
        Ok(document.global)
    }

    /// Check that the repository directory exists.
    ///
    /// The UUID tool is not checked here; it is only needed once an entry
    /// is resolved.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.repository_path.is_dir() {
            return Err(SettingsError::RepositoryMissing(self.repository_path.clone()));
        }

        Ok(())
    }
}
