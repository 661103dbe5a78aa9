//! Category-scoped, filterable projection of a ledger
//!
//! The view owns filter state only. Every accessor takes the ledger and
//! re-evaluates the active filter, so the filtered lists are always live and
//! never need invalidating.

use tracing::debug;

use crate::models::{BudgetFilter, CategoryBudget, Expense, ExpenseFilter, Tag};

use super::book::Ledger;

/// Filter state for the expense and budget lists shown to the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryView {
    expense_filter: ExpenseFilter,
    budget_filter: BudgetFilter,
    selected: Option<Tag>,
}

impl CategoryView {
    /// A view matching everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope both lists to `tag`, or reset them when `tag` is the default
    ///
    /// Does nothing when `tag` has no budget in `ledger`; callers check
    /// [`Ledger::has_category`] first.
    pub fn select_category(&mut self, ledger: &Ledger, tag: &Tag) {
        if !ledger.has_category(tag) {
            debug!(%tag, "ignoring selection of unknown category");
            return;
        }

        if tag == ledger.default_tag() {
            self.expense_filter = ExpenseFilter::All;
            self.budget_filter = BudgetFilter::All;
            self.selected = None;
        } else {
            self.expense_filter = ExpenseFilter::Category(tag.clone());
            self.budget_filter = BudgetFilter::Category(tag.clone());
            self.selected = Some(tag.clone());
        }
        debug!(%tag, "category selected");
    }

    /// Replace the active expense filter outright
    pub fn update_filtered_expenses(&mut self, filter: ExpenseFilter) {
        debug!(?filter, "expense filter updated");
        self.expense_filter = filter;
    }

    /// Replace the active budget filter outright
    pub fn update_filtered_budgets(&mut self, filter: BudgetFilter) {
        debug!(?filter, "budget filter updated");
        self.budget_filter = filter;
    }

    /// Expenses of `ledger` passing the active filter, in ledger order
    pub fn filtered_expenses<'a>(&self, ledger: &'a Ledger) -> Vec<&'a Expense> {
        ledger
            .expenses()
            .iter()
            .filter(|e| self.expense_filter.matches(e))
            .collect()
    }

    /// Budgets of `ledger` passing the active filter, in ledger order
    pub fn filtered_budgets<'a>(&self, ledger: &'a Ledger) -> Vec<&'a CategoryBudget> {
        ledger
            .budgets()
            .iter()
            .filter(|b| self.budget_filter.matches(b))
            .collect()
    }

    pub fn expense_filter(&self) -> &ExpenseFilter {
        &self.expense_filter
    }

    pub fn budget_filter(&self) -> &BudgetFilter {
        &self.budget_filter
    }

    /// The selected category, or `None` while showing the default (overall) view
    pub fn selected_category(&self) -> Option<&Tag> {
        self.selected.as_ref()
    }
}
