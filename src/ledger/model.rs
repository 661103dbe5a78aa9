//! Model facade: one ledger plus the category view over it

use tracing::{debug, info};

use crate::commands::{Command, CommandResult};
use crate::error::BookResult;
use crate::models::{CategoryBudget, Expense};

use super::book::Ledger;
use super::view::CategoryView;

/// In-memory state that commands run against
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerModel {
    ledger: Ledger,
    view: CategoryView,
}

impl LedgerModel {
    /// Wrap a ledger with a view that shows everything
    pub fn new(ledger: Ledger) -> Self {
        info!(
            expenses = ledger.expenses().len(),
            budgets = ledger.budgets().len(),
            "model initialized"
        );
        Self {
            ledger,
            view: CategoryView::new(),
        }
    }

    /// Run one command to completion
    ///
    /// On error neither the ledger nor the view has changed.
    pub fn execute(&mut self, command: &Command) -> BookResult<CommandResult> {
        debug!(command = command.name(), "executing command");
        command.execute(&mut self.ledger, &mut self.view)
    }

    /// Replace the ledger contents from a full snapshot
    pub fn reset_data(&mut self, snapshot: &Ledger) {
        self.ledger.reset_data(snapshot);
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn view(&self) -> &CategoryView {
        &self.view
    }

    /// Live filtered expense list
    pub fn filtered_expenses(&self) -> Vec<&Expense> {
        self.view.filtered_expenses(&self.ledger)
    }

    /// Live filtered budget list
    pub fn filtered_budgets(&self) -> Vec<&CategoryBudget> {
        self.view.filtered_budgets(&self.ledger)
    }
}
