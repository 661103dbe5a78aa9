//! Category budget display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::ledger::Ledger;
use crate::models::CategoryBudget;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Allocated")]
    allocated: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
}

/// Format the listed budgets as a table; spending is computed from `ledger`
pub fn format_budget_table(budgets: &[&CategoryBudget], ledger: &Ledger, currency: &str) -> String {
    if budgets.is_empty() {
        return "No category budgets listed.".to_string();
    }

    let rows = budgets.iter().map(|budget| BudgetRow {
        category: budget.tag().to_string(),
        allocated: budget.amount().format_with_symbol(currency),
        spent: budget.spent(ledger.expenses()).format_with_symbol(currency),
        remaining: budget
            .remaining(ledger.expenses())
            .format_with_symbol(currency),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}
