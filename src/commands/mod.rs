//! Command layer
//!
//! Each command kind carries a fully validated payload and runs against a
//! ledger and its category view. Commands touch nothing else: the caller
//! persists and audits using the [`LedgerChange`]s returned in the
//! [`CommandResult`].

pub mod category;
pub mod expense;

pub use category::{AddCategory, DeleteCategory, SwitchCategory, Topup};
pub use expense::{
    AddExpense, DeleteExpense, EditExpense, EditExpenseDescriptor, FindExpenses, ListExpenses,
};

use crate::error::BookResult;
use crate::ledger::{CategoryView, Ledger};
use crate::models::{CategoryBudget, Expense};

/// One state transition applied to the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerChange {
    ExpenseAdded(Expense),
    ExpenseDeleted(Expense),
    ExpenseEdited { before: Expense, after: Expense },
    CategoryAdded(CategoryBudget),
    CategoryDeleted(CategoryBudget),
    BudgetToppedUp {
        before: CategoryBudget,
        after: CategoryBudget,
    },
}

/// Outcome of a successful command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Feedback for the user
    pub message: String,
    /// Ledger mutations performed, in order; empty for view-only commands
    pub changes: Vec<LedgerChange>,
}

impl CommandResult {
    /// A result that changed only the view (or nothing)
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            changes: Vec::new(),
        }
    }

    /// A result carrying a single ledger change
    pub fn with_change(message: impl Into<String>, change: LedgerChange) -> Self {
        Self {
            message: message.into(),
            changes: vec![change],
        }
    }

    pub fn is_mutation(&self) -> bool {
        !self.changes.is_empty()
    }
}

/// Every request the core understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddExpense),
    Delete(DeleteExpense),
    Edit(EditExpense),
    Find(FindExpenses),
    List(ListExpenses),
    AddCategory(AddCategory),
    DeleteCategory(DeleteCategory),
    Topup(Topup),
    Switch(SwitchCategory),
}

impl Command {
    /// Execute against `ledger` and `view`
    pub fn execute(&self, ledger: &mut Ledger, view: &mut CategoryView) -> BookResult<CommandResult> {
        match self {
            Self::Add(cmd) => cmd.execute(ledger, view),
            Self::Delete(cmd) => cmd.execute(ledger, view),
            Self::Edit(cmd) => cmd.execute(ledger, view),
            Self::Find(cmd) => Ok(cmd.execute(ledger, view)),
            Self::List(cmd) => Ok(cmd.execute(ledger, view)),
            Self::AddCategory(cmd) => cmd.execute(ledger),
            Self::DeleteCategory(cmd) => cmd.execute(ledger, view),
            Self::Topup(cmd) => cmd.execute(ledger),
            Self::Switch(cmd) => cmd.execute(ledger, view),
        }
    }

    /// Command word, for logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::Delete(_) => "delete",
            Self::Edit(_) => "edit",
            Self::Find(_) => "find",
            Self::List(_) => "list",
            Self::AddCategory(_) => "add-category",
            Self::DeleteCategory(_) => "delete-category",
            Self::Topup(_) => "topup",
            Self::Switch(_) => "switch",
        }
    }
}
