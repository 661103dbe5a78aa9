//! Core data models for the expense book
//!
//! This module contains the validated value types (amount, date, text, tag),
//! the expense and category budget records, the unique collections that hold
//! them, and the predicates used to filter them.

pub mod amount;
pub mod budget;
pub mod budget_list;
pub mod date;
pub mod expense;
pub mod expense_list;
pub mod predicates;
pub mod tag;
pub mod text;

pub use amount::{Amount, Balance};
pub use budget::CategoryBudget;
pub use budget_list::UniqueCategoryBudgetList;
pub use date::ExpenseDate;
pub use expense::Expense;
pub use expense_list::UniqueExpenseList;
pub use predicates::{
    BudgetFilter, DatePredicate, ExpenseFilter, ExpensePredicate, FindPredicate,
    KeywordsPredicate, TagsPredicate,
};
pub use tag::{Tag, DEFAULT_TAG_NAME};
pub use text::{Description, Remark};
