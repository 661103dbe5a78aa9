//! Category commands: add, delete, top up, switch

use crate::error::{BookError, BookResult};
use crate::ledger::{CategoryView, Ledger};
use crate::models::{Amount, CategoryBudget, Tag};

use super::{CommandResult, LedgerChange};

/// Creates an empty budget for a new category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCategory {
    tag: Tag,
}

impl AddCategory {
    pub fn new(tag: Tag) -> Self {
        Self { tag }
    }

    pub fn execute(&self, ledger: &mut Ledger) -> BookResult<CommandResult> {
        if ledger.has_category(&self.tag) {
            return Err(BookError::duplicate_category(self.tag.as_str()));
        }

        let budget = CategoryBudget::empty(self.tag.clone());
        ledger.add_category(budget.clone())?;

        Ok(CommandResult::with_change(
            format!("New category added: {}", self.tag),
            LedgerChange::CategoryAdded(budget),
        ))
    }
}

/// Removes a category budget; expenses keep their tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCategory {
    tag: Tag,
}

impl DeleteCategory {
    pub fn new(tag: Tag) -> Self {
        Self { tag }
    }

    pub fn execute(&self, ledger: &mut Ledger, view: &mut CategoryView) -> BookResult<CommandResult> {
        let removed = ledger.remove_category(&self.tag)?;

        if view.selected_category() == Some(&self.tag) {
            *view = CategoryView::new();
        }

        Ok(CommandResult::with_change(
            format!("Deleted category: {}", self.tag),
            LedgerChange::CategoryDeleted(removed),
        ))
    }
}

/// Raises the allocation of a category budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topup {
    amount: Amount,
    tag: Option<Tag>,
    currency_symbol: String,
}

impl Topup {
    /// With no `tag`, the ledger's default category is topped up
    pub fn new(amount: Amount, tag: Option<Tag>) -> Self {
        Self {
            amount,
            tag,
            currency_symbol: "$".into(),
        }
    }

    /// Symbol to show in front of the new total
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    pub fn execute(&self, ledger: &mut Ledger) -> BookResult<CommandResult> {
        let tag = self
            .tag
            .clone()
            .unwrap_or_else(|| ledger.default_tag().clone());

        let before = ledger
            .category_budget(&tag)
            .cloned()
            .ok_or_else(|| BookError::category_not_found(tag.as_str()))?;
        let after = ledger.topup_category(&tag, self.amount)?.clone();

        Ok(CommandResult::with_change(
            format!(
                "New budget amount for {}: {}",
                tag,
                after.amount().format_with_symbol(&self.currency_symbol)
            ),
            LedgerChange::BudgetToppedUp { before, after },
        ))
    }
}

/// Scopes the view to one category, or back to everything for the default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchCategory {
    tag: Tag,
}

impl SwitchCategory {
    pub fn new(tag: Tag) -> Self {
        Self { tag }
    }

    pub fn execute(&self, ledger: &Ledger, view: &mut CategoryView) -> BookResult<CommandResult> {
        if !ledger.has_category(&self.tag) {
            return Err(BookError::category_not_found(self.tag.as_str()));
        }

        view.select_category(ledger, &self.tag);
        Ok(CommandResult::message(format!(
            "Switched to category: {}",
            self.tag
        )))
    }
}
