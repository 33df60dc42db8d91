//! bootiso - GRUB2 boot entries for loopback-mounted ISO images
//!
//! Reads a repository of per-ISO YAML files and renders one GRUB2
//! `menuentry` block for each, embedding the filesystem UUID of the device
//! that holds the images.

pub mod app;
pub mod entry;
pub mod error;
pub mod listing;
pub mod logging;
pub mod repository;
pub mod settings;
pub mod style;
pub mod uuid;

pub use entry::{EntrySpec, Generator, ResolvedEntry};
pub use error::{BootisoError, ExitCode};
pub use repository::Repository;
pub use settings::{GlobalSettings, DEFAULT_SETTINGS_PATH};
pub use uuid::{BlkidLookup, StaticLookup, UuidLookup};
