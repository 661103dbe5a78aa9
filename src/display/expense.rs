//! Expense display formatting
//!
//! Renders the filtered expense view as a numbered table. The numbers are the
//! one-based indices that `delete` and `edit` accept.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Tags")]
    tags: String,
    #[tabled(rename = "Remark")]
    remark: String,
}

impl ExpenseRow {
    fn new(index: usize, expense: &Expense, currency: &str) -> Self {
        Self {
            index,
            description: expense.description().to_string(),
            amount: expense.amount().format_with_symbol(currency),
            date: expense.date().to_string(),
            tags: format_tags(expense),
            remark: expense.remark().to_string(),
        }
    }
}

/// Comma-separated tag names
pub fn format_tags(expense: &Expense) -> String {
    expense
        .tags()
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format the listed expenses as a table
pub fn format_expense_table(expenses: &[&Expense], currency: &str) -> String {
    if expenses.is_empty() {
        return "No expenses listed.".to_string();
    }

    let rows = expenses
        .iter()
        .enumerate()
        .map(|(i, e)| ExpenseRow::new(i + 1, e, currency));

    Table::new(rows).with(Style::rounded()).to_string()
}
