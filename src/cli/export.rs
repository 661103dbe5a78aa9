//! CLI commands for data export

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::error::{BookError, BookResult};
use crate::export::{export_budgets_csv, export_expenses_csv, export_full_json};
use crate::ledger::LedgerModel;

/// Export subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ExportCommands {
    /// Export the listed expenses to CSV
    Expenses {
        /// Output file path
        output: PathBuf,
    },

    /// Export the listed category budgets to CSV
    Budgets {
        /// Output file path
        output: PathBuf,
    },

    /// Export the whole expense book to JSON
    All {
        /// Output file path
        output: PathBuf,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn create_output(output: &Path) -> BookResult<BufWriter<File>> {
    let file = File::create(output).map_err(|e| {
        BookError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    Ok(BufWriter::new(file))
}

/// Handle export commands, returning the message to show
pub fn handle_export_command(model: &LedgerModel, cmd: ExportCommands) -> BookResult<String> {
    match cmd {
        ExportCommands::Expenses { output } => {
            let expenses = model.filtered_expenses();
            export_expenses_csv(&expenses, create_output(&output)?)?;
            Ok(format!(
                "Exported {} expenses to: {}",
                expenses.len(),
                output.display()
            ))
        }

        ExportCommands::Budgets { output } => {
            let budgets = model.filtered_budgets();
            export_budgets_csv(&budgets, model.ledger(), create_output(&output)?)?;
            Ok(format!(
                "Exported {} category budgets to: {}",
                budgets.len(),
                output.display()
            ))
        }

        ExportCommands::All { output, pretty } => {
            let mut writer = create_output(&output)?;
            export_full_json(model.ledger(), &mut writer, pretty)?;
            Ok(format!("Expense book exported to: {}", output.display()))
        }
    }
}
