//! Boot entry specifications and rendering
//!
//! Each `*.yaml` file in the repository describes one ISO image under a
//! top-level `config` key. Resolving an entry looks up the filesystem UUID of
//! its root device; the resolved entry renders as a GRUB2 `menuentry` block.

mod generator;

pub use generator::{GenerateError, Generator, HEADER};

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::uuid::{UuidError, UuidLookup};

/// One ISO boot entry, as written in its config file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EntrySpec {
    /// Menu title
    pub name: String,

    /// Kernel parameter that receives the ISO location (e.g. `findiso`)
    #[serde(rename = "use")]
    pub use_key: String,

    /// Directory of kernel and initrd inside the ISO
    pub boot_path: String,

    pub kernel: String,

    pub initrd: String,

    /// Block device holding the ISO files, as seen by the running system
    pub root_dev: String,

    /// Same device in GRUB notation (e.g. `hd0,1`)
    pub grub_dev: String,

    /// Directory of the ISO on the root device
    pub iso_path: String,

    pub iso_filename: String,

    /// Extra kernel command line
    pub boot_opts: String,
}

#[derive(Debug, Deserialize)]
struct EntryDocument {
    config: EntrySpec,
}

/// Errors for entry loading and resolution
#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    #[error("Failed to read entry file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid entry file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Entry '{name}': {source}")]
    Uuid {
        name: String,
        #[source]
        source: UuidError,
    },
}

impl EntrySpec {
    /// Load an entry from its config file
    pub fn load(path: &Path) -> Result<Self, EntryError> {
        let content = std::fs::read_to_string(path).map_err(|source| EntryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content).map_err(|source| EntryError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse an entry from a YAML string
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        let document: EntryDocument = serde_yaml::from_str(content)?;
        Ok(document.config)
    }

    /// Short display name, used when listing the repository
    pub fn entry_name(&self) -> &str {
        &self.iso_filename
    }

    /// Full path of the ISO on the root device
    pub fn iso_location(&self) -> String {
        format!("{}{}", self.iso_path, self.iso_filename)
    }
}

/// An entry together with the UUID of its root filesystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    pub spec: EntrySpec,
    pub fs_uuid: String,
}

impl ResolvedEntry {
    /// Look up the root device UUID for `spec`
    pub fn resolve(spec: EntrySpec, lookup: &dyn UuidLookup) -> Result<Self, EntryError> {
        let fs_uuid = lookup.lookup(&spec.root_dev).map_err(|source| EntryError::Uuid {
            name: spec.name.clone(),
            source,
        })?;

        Ok(Self { spec, fs_uuid })
    }
}

impl fmt::Display for ResolvedEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let spec = &self.spec;
        let iso = spec.iso_location();

        writeln!(f, "# BOOT ENTRY for: {}", spec.name)?;
        writeln!(f, "menuentry \"{}\" {{", spec.name)?;
        writeln!(f, "\tinsmod ext2")?;
        writeln!(f, "\tset root='{}'", spec.grub_dev)?;
        writeln!(f, "\tsearch --no-floppy --fs-uuid --set {}", self.fs_uuid)?;
        writeln!(f, "\tloopback loop {}", iso)?;
        writeln!(
            f,
            "\tlinux (loop){}{} {}={} {}",
            spec.boot_path, spec.kernel, spec.use_key, iso, spec.boot_opts
        )?;
        writeln!(f, "\tinitrd (loop){}{}", spec.boot_path, spec.initrd)?;
        writeln!(f, "}}")
    }
}
