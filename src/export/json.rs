//! JSON Export functionality
//!
//! Exports the complete expense book with schema versioning and a few
//! precomputed totals.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::BookResult;
use crate::ledger::Ledger;
use crate::storage::adapted::{JsonAdaptedBudget, JsonAdaptedExpense, LedgerData};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full expense book export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    /// Application version that created the export
    pub app_version: String,
    pub expenses: Vec<JsonAdaptedExpense>,
    pub budgets: Vec<JsonAdaptedBudget>,
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,
    pub budget_count: usize,
    pub total_expenses: String,
    pub total_budgeted: String,
    pub balance: String,
    /// Earliest expense date (DD-MM-YYYY)
    pub earliest_expense: Option<String>,
    /// Latest expense date (DD-MM-YYYY)
    pub latest_expense: Option<String>,
}

impl FullExport {
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let data = LedgerData::from(ledger);
        let dates = ledger.expenses().iter().map(|e| e.date());

        let metadata = ExportMetadata {
            expense_count: ledger.expenses().len(),
            budget_count: ledger.budgets().len(),
            total_expenses: ledger.total_expenses().to_string(),
            total_budgeted: ledger.total_budgeted().to_string(),
            balance: ledger.balance().to_string(),
            earliest_expense: dates.clone().min().map(|d| d.to_string()),
            latest_expense: dates.max().map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses: data.expenses,
            budgets: data.budgets,
            metadata,
        }
    }

    /// Snapshot part of the export, loadable as a ledger file
    pub fn ledger_data(&self) -> LedgerData {
        LedgerData {
            expenses: self.expenses.clone(),
            budgets: self.budgets.clone(),
        }
    }
}

/// Export the full ledger as JSON
pub fn export_full_json<W: Write>(ledger: &Ledger, writer: &mut W, pretty: bool) -> BookResult<()> {
    let export = FullExport::from_ledger(ledger);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)?;
    } else {
        serde_json::to_writer(&mut *writer, &export)?;
    }
    writeln!(writer)?;

    Ok(())
}
