//! Display formatting for terminal output
//!
//! Renders the live filtered views and the ledger tallies.

pub mod budget;
pub mod expense;
pub mod summary;

pub use budget::format_budget_table;
pub use expense::{format_expense_table, format_tags};
pub use summary::format_summary;
