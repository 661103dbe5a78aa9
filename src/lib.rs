//! Expense book - personal expense ledger with category budgets
//!
//! This library provides the core of the `expense` command: an in-memory
//! ledger of expenses and category budgets, a filterable category view over
//! it, and the commands that change either.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `config`: Configuration and path management
//! - `models`: Value types, records, unique collections and predicates
//! - `ledger`: The ledger aggregate, the category view and the model facade
//! - `commands`: Typed requests executed against the model
//! - `storage`: JSON file storage layer
//! - `audit`: Audit logging system
//! - `display`: Terminal tables and summaries
//! - `export`: CSV and JSON export
//! - `cli`: Clap commands, sessions and the interactive shell
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_book::commands::{AddCategory, Command, Topup};
//! use expense_book::ledger::{Ledger, LedgerModel};
//! use expense_book::models::{Amount, Tag};
//!
//! let mut model = LedgerModel::new(Ledger::new());
//! let food = Tag::parse("Food")?;
//! model.execute(&Command::AddCategory(AddCategory::new(food.clone())))?;
//! model.execute(&Command::Topup(Topup::new(Amount::parse("50")?, Some(food))))?;
//! ```

pub mod audit;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod storage;

pub use error::{BookError, BookResult};
