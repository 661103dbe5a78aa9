//! Storage layer for the expense book
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The whole ledger is loaded and saved as one snapshot.

pub mod adapted;
pub mod file_io;
pub mod init;

pub use adapted::{JsonAdaptedBudget, JsonAdaptedExpense, LedgerData};
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;

use tracing::info;

use crate::audit::{AuditEntry, AuditLogger};
use crate::commands::LedgerChange;
use crate::config::paths::BookPaths;
use crate::error::BookError;
use crate::ledger::Ledger;
use crate::models::Tag;

/// Storage coordinator: the ledger snapshot plus the audit log
pub struct Storage {
    paths: BookPaths,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance, making sure its directories exist
    pub fn new(paths: BookPaths) -> Result<Self, BookError> {
        paths.ensure_directories()?;

        Ok(Self {
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &BookPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load the ledger snapshot; a missing file yields an empty ledger
    pub fn load_ledger(&self, default_tag: Tag) -> Result<Ledger, BookError> {
        let path = self.paths.ledger_file();
        let data: LedgerData = read_json(&path)?;
        let ledger = data.to_ledger(default_tag).map_err(|e| {
            BookError::Storage(format!("Invalid data in {}: {}", path.display(), e))
        })?;

        info!(
            expenses = ledger.expenses().len(),
            budgets = ledger.budgets().len(),
            "ledger loaded"
        );
        Ok(ledger)
    }

    /// Save the whole ledger atomically
    pub fn save_ledger(&self, ledger: &Ledger) -> Result<(), BookError> {
        write_json_atomic(self.paths.ledger_file(), &LedgerData::from(ledger))?;
        info!(
            expenses = ledger.expenses().len(),
            budgets = ledger.budgets().len(),
            "ledger saved"
        );
        Ok(())
    }

    /// Append one audit entry per change
    pub fn record(&self, changes: &[LedgerChange]) -> Result<(), BookError> {
        let entries: Vec<AuditEntry> = changes.iter().map(AuditEntry::from).collect();
        self.audit.log_batch(&entries)
    }

    /// Check if storage has been initialized (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}
