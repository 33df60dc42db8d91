//! Filesystem UUID lookup
//!
//! Abstracts the device-identification utility for testability:
//! - UuidLookup trait: resolve a block device to its filesystem UUID
//! - BlkidLookup: shells out to the configured utility (normally `blkid`)
//! - StaticLookup: in-process table for tests

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::OnceLock;

use regex_lite::Regex;

/// Matches `UUID="..."` in blkid output, but not `PARTUUID="..."`
const UUID_PATTERN: &str = r#"\bUUID="([^"\s]+)""#;

fn uuid_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(UUID_PATTERN).expect("UUID pattern is a valid regex"))
}

/// Extract the filesystem UUID from one line of lookup output
pub fn parse_uuid(line: &str) -> Option<&str> {
    uuid_regex()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// UUID lookup errors
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    #[error("Failed to run UUID lookup tool {tool}: {source}")]
    Spawn {
        tool: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Resolves a block device to the UUID of the filesystem on it.
///
/// An empty string means the device was looked up but no UUID was reported.
pub trait UuidLookup {
    fn lookup(&self, device: &str) -> Result<String, UuidError>;
}

/// Runs an external utility as `<tool> <device>` and scans its first line
#[derive(Debug, Clone)]
pub struct BlkidLookup {
    tool: PathBuf,
}

impl BlkidLookup {
    pub fn new(tool: impl Into<PathBuf>) -> Self {
        Self { tool: tool.into() }
    }

    pub fn tool(&self) -> &Path {
        &self.tool
    }
}

impl UuidLookup for BlkidLookup {
    fn lookup(&self, device: &str) -> Result<String, UuidError> {
        let output = Command::new(&self.tool)
            .arg(device)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|source| UuidError::Spawn {
                tool: self.tool.clone(),
                source,
            })?;

        if !output.status.success() {
            tracing::debug!(device, status = %output.status, "UUID lookup tool exited unsuccessfully");
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let first_line = stdout.lines().next().unwrap_or("");

        match parse_uuid(first_line) {
            Some(uuid) => {
                tracing::debug!(device, uuid, "resolved filesystem UUID");
                Ok(uuid.to_string())
            }
            None => {
                tracing::warn!(device, "no filesystem UUID reported");
                Ok(String::new())
            }
        }
    }
}

/// Fixed device → UUID table; unknown devices resolve to an empty UUID
#[derive(Debug, Clone, Default)]
pub struct StaticLookup {
    table: HashMap<String, String>,
}

impl StaticLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, device: impl Into<String>, uuid: impl Into<String>) -> Self {
        self.table.insert(device.into(), uuid.into());
        self
    }
}

impl UuidLookup for StaticLookup {
    fn lookup(&self, device: &str) -> Result<String, UuidError> {
        Ok(self.table.get(device).cloned().unwrap_or_default())
    }
}
