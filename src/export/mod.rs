//! Export module for the expense book
//!
//! - CSV: listed expenses or budgets (spreadsheet-compatible)
//! - JSON: full expense book with metadata

pub mod csv;
pub mod json;

pub use self::csv::{export_budgets_csv, export_expenses_csv};
pub use self::json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
