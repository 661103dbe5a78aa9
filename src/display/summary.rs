//! Ledger tallies for display

use crate::ledger::{CategoryView, Ledger};

/// Format total budgeted, total spent and balance, plus the active category
pub fn format_summary(ledger: &Ledger, view: &CategoryView, currency: &str) -> String {
    let mut output = String::new();

    let category = view
        .selected_category()
        .unwrap_or_else(|| ledger.default_tag());
    output.push_str(&format!("Category:       {}\n", category));
    output.push_str(&format!(
        "Total budgeted: {}\n",
        ledger.total_budgeted().format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "Total spent:    {}\n",
        ledger.total_expenses().format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "Balance:        {}\n",
        ledger.balance().format_with_symbol(currency)
    ));

    output
}
