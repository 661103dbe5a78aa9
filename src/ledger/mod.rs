//! Ledger aggregate and the views over it
//!
//! - `book`: the [`Ledger`] owning all expenses and category budgets
//! - `view`: the [`CategoryView`] filter state and its live projections
//! - `model`: the [`LedgerModel`] facade that commands execute against

pub mod book;
pub mod model;
pub mod view;

pub use book::Ledger;
pub use model::LedgerModel;
pub use view::CategoryView;
