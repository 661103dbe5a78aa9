//! CSV Export functionality
//!
//! Exports listed expenses and category budgets to CSV.

use std::io::Write;

use serde::Serialize;

use crate::display::format_tags;
use crate::error::BookResult;
use crate::ledger::Ledger;
use crate::models::{CategoryBudget, Expense};

#[derive(Serialize)]
struct ExpenseRecord<'a> {
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Tags")]
    tags: String,
    #[serde(rename = "Remark")]
    remark: &'a str,
}

#[derive(Serialize)]
struct BudgetRecord<'a> {
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Allocated")]
    allocated: String,
    #[serde(rename = "Spent")]
    spent: String,
    #[serde(rename = "Remaining")]
    remaining: String,
}

/// Export the given expenses, in order
pub fn export_expenses_csv<W: Write>(expenses: &[&Expense], writer: W) -> BookResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if expenses.is_empty() {
        csv_writer.write_record(["Description", "Amount", "Date", "Tags", "Remark"])?;
    }

    for expense in expenses {
        csv_writer.serialize(ExpenseRecord {
            description: expense.description().as_str(),
            amount: expense.amount().to_string(),
            date: expense.date().to_string(),
            tags: format_tags(expense),
            remark: expense.remark().as_str(),
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Export the given budgets with spending computed from `ledger`
pub fn export_budgets_csv<W: Write>(
    budgets: &[&CategoryBudget],
    ledger: &Ledger,
    writer: W,
) -> BookResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if budgets.is_empty() {
        csv_writer.write_record(["Category", "Allocated", "Spent", "Remaining"])?;
    }

    for budget in budgets {
        csv_writer.serialize(BudgetRecord {
            category: budget.tag().as_str(),
            allocated: budget.amount().to_string(),
            spent: budget.spent(ledger.expenses()).to_string(),
            remaining: budget.remaining(ledger.expenses()).to_string(),
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}
