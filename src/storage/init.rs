//! Storage initialization
//!
//! Handles first-run setup: settings file plus an empty expense book.

use crate::config::{paths::BookPaths, settings::Settings};
use crate::error::BookError;
use crate::ledger::Ledger;

use super::adapted::LedgerData;
use super::file_io::write_json_atomic;

/// Initialize storage for a fresh installation
///
/// Existing files are left untouched, so running this twice is harmless.
pub fn initialize_storage(paths: &BookPaths, settings: &Settings) -> Result<(), BookError> {
    paths.ensure_directories()?;

    if !paths.settings_file().exists() {
        settings.save(paths)?;
    }

    if !paths.ledger_file().exists() {
        let ledger = Ledger::with_default_tag(settings.default_tag()?);
        write_json_atomic(paths.ledger_file(), &LedgerData::from(&ledger))?;
    }

    Ok(())
}
