//! Repository listing
//!
//! Summarizes the configured entries without resolving any UUIDs.

use std::path::PathBuf;

use serde::Serialize;

use crate::entry::EntrySpec;
use crate::style::{Color, Styler};

pub const LISTING_TITLE: &str = "Configuration files currently defined in the Repository:";

/// One line of the listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedEntry {
    pub name: String,
    pub iso_filename: String,
    pub path: PathBuf,
}

impl ListedEntry {
    pub fn new(path: PathBuf, spec: &EntrySpec) -> Self {
        Self {
            name: spec.name.clone(),
            iso_filename: spec.entry_name().to_string(),
            path,
        }
    }
}

/// Human-readable listing: title, one marker line per entry, trailing blank line
pub fn to_human(entries: &[ListedEntry], styler: &Styler) -> String {
    let mut out = String::new();
    out.push_str(&styler.paint(LISTING_TITLE, Color::Yellow));
    out.push('\n');

    for entry in entries {
        let location = format!(", ({})", entry.path.display());
        out.push_str(&styler.info(&entry.iso_filename));
        out.push_str(&styler.paint(&location, Color::Yellow));
        out.push('\n');
    }

    out.push('\n');
    out
}

pub fn to_json(entries: &[ListedEntry]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(entries)
}
