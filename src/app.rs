//! Command implementations shared by the CLI and integration tests

use std::io::Write;
use std::path::Path;

use crate::entry::Generator;
use crate::error::BootisoError;
use crate::listing::{self, ListedEntry};
use crate::repository::Repository;
use crate::settings::GlobalSettings;
use crate::style::Styler;
use crate::uuid::{BlkidLookup, UuidLookup};

/// Load the settings file and check the paths it names
pub fn load_settings(path: &Path) -> Result<GlobalSettings, BootisoError> {
    let settings = GlobalSettings::load(path)?;
    settings.validate()?;
    Ok(settings)
}

/// Print GRUB entries for every config file, using the configured UUID tool
pub fn generate(settings: &GlobalSettings, out: &mut dyn Write) -> Result<usize, BootisoError> {
    let lookup = BlkidLookup::new(&settings.uuid_tool_path);
    generate_with(settings, &lookup, out)
}

/// Print GRUB entries with a caller-supplied UUID lookup
pub fn generate_with(
    settings: &GlobalSettings,
    lookup: &dyn UuidLookup,
    out: &mut dyn Write,
) -> Result<usize, BootisoError> {
    let repository = Repository::open(&settings.repository_path)?;
    let count = Generator::new(&repository, lookup).generate(out)?;
    tracing::info!(count, "generated boot entries");
    Ok(count)
}

/// Print the repository listing
pub fn list(
    settings: &GlobalSettings,
    json: bool,
    styler: &Styler,
    out: &mut dyn Write,
) -> Result<usize, BootisoError> {
    let repository = Repository::open(&settings.repository_path)?;
    let entries: Vec<ListedEntry> = repository
        .entries()?
        .into_iter()
        .map(|(path, spec)| ListedEntry::new(path, &spec))
        .collect();

    if json {
        writeln!(out, "{}", listing::to_json(&entries)?)?;
    } else {
        write!(out, "{}", listing::to_human(&entries, styler))?;
    }
    out.flush()?;

    Ok(entries.len())
}
