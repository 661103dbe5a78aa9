//! The ledger aggregate
//!
//! Owns exactly one unique expense list and one unique category budget list
//! and computes tallies over them on demand. The default category budget is
//! always present and cannot be removed.

use tracing::debug;

use crate::error::{BookError, BookResult};
use crate::models::{
    Amount, Balance, CategoryBudget, Expense, Tag, UniqueCategoryBudgetList, UniqueExpenseList,
};

/// All expenses and category budgets of one expense book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    default_tag: Tag,
    expenses: UniqueExpenseList,
    budgets: UniqueCategoryBudgetList,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Create an empty ledger keyed on the built-in `Default` category
    pub fn new() -> Self {
        Self::with_default_tag(Tag::default_category())
    }

    /// Create an empty ledger whose default category is `default_tag`
    pub fn with_default_tag(default_tag: Tag) -> Self {
        let mut budgets = UniqueCategoryBudgetList::new();
        budgets.ensure_tag(&default_tag);
        Self {
            default_tag,
            expenses: UniqueExpenseList::new(),
            budgets,
        }
    }

    /// Build a ledger from full record lists, e.g. a loaded snapshot
    ///
    /// Fails on duplicates in either list. A missing default budget is added
    /// with a zero allocation.
    pub fn from_records(
        default_tag: Tag,
        expenses: Vec<Expense>,
        budgets: Vec<CategoryBudget>,
    ) -> BookResult<Self> {
        let mut ledger = Self::with_default_tag(default_tag);
        ledger.expenses.set_all(expenses)?;
        ledger.budgets.set_all(budgets)?;
        ledger.budgets.ensure_tag(&ledger.default_tag);
        Ok(ledger)
    }

    /// Replace both collections with those of `other`
    ///
    /// `other` is already a valid ledger, so this cannot fail halfway.
    pub fn reset_data(&mut self, other: &Ledger) {
        self.expenses = other.expenses.clone();
        self.budgets = other.budgets.clone();
        self.budgets.ensure_tag(&self.default_tag);
        debug!(
            expenses = self.expenses.len(),
            budgets = self.budgets.len(),
            "ledger data reset"
        );
    }

    pub fn default_tag(&self) -> &Tag {
        &self.default_tag
    }

    // === Expenses ===

    /// Returns true if an expense with the same identity exists
    pub fn has_expense(&self, expense: &Expense) -> bool {
        self.expenses.contains(expense)
    }

    pub fn add_expense(&mut self, expense: Expense) -> BookResult<()> {
        self.expenses.add(expense)
    }

    pub fn remove_expense(&mut self, expense: &Expense) -> BookResult<Expense> {
        self.expenses.remove(expense)
    }

    /// Replace `target` with `edited`; see [`UniqueExpenseList::replace`]
    pub fn set_expense(&mut self, target: &Expense, edited: Expense) -> BookResult<()> {
        self.expenses.replace(target, edited)
    }

    pub fn expenses(&self) -> &[Expense] {
        self.expenses.as_slice()
    }

    // === Category budgets ===

    pub fn has_category(&self, tag: &Tag) -> bool {
        self.budgets.contains_tag(tag)
    }

    pub fn category_budget(&self, tag: &Tag) -> Option<&CategoryBudget> {
        self.budgets.get(tag)
    }

    pub fn add_category(&mut self, budget: CategoryBudget) -> BookResult<()> {
        self.budgets.add(budget)
    }

    /// Remove the budget for `tag`; the default category is protected
    pub fn remove_category(&mut self, tag: &Tag) -> BookResult<CategoryBudget> {
        if *tag == self.default_tag {
            return Err(BookError::ProtectedCategory(tag.to_string()));
        }
        let budget = self
            .budgets
            .get(tag)
            .cloned()
            .ok_or_else(|| BookError::category_not_found(tag.as_str()))?;
        self.budgets.remove(&budget)
    }

    /// Increase the allocation of the budget for `tag`
    pub fn topup_category(&mut self, tag: &Tag, amount: Amount) -> BookResult<&CategoryBudget> {
        self.budgets.topup(tag, amount)
    }

    /// Amount spent in a category, recomputed from the current expenses
    pub fn category_spent(&self, tag: &Tag) -> BookResult<Amount> {
        let budget = self
            .budgets
            .get(tag)
            .ok_or_else(|| BookError::category_not_found(tag.as_str()))?;
        Ok(budget.spent(&self.expenses))
    }

    pub fn budgets(&self) -> &[CategoryBudget] {
        self.budgets.as_slice()
    }

    // === Tallies ===

    pub fn total_expenses(&self) -> Amount {
        self.expenses.sum_amounts()
    }

    pub fn total_budgeted(&self) -> Amount {
        self.budgets.sum_amounts()
    }

    /// `total_budgeted() - total_expenses()`
    pub fn balance(&self) -> Balance {
        Balance::between(self.total_budgeted(), self.total_expenses())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::expense::test_support::expense;

    fn tag(name: &str) -> Tag {
        Tag::parse(name).unwrap()
    }

    fn amount(value: &str) -> Amount {
        Amount::parse(value).unwrap()
    }

    #[test]
    fn test_new_ledger_has_default_category() {
        let ledger = Ledger::new();
        assert!(ledger.has_category(&Tag::default_category()));
        assert_eq!(ledger.budgets().len(), 1);
        assert!(ledger.expenses().is_empty());
        assert_eq!(ledger.balance().cents(), 0);
    }

    #[test]
    fn test_custom_default_tag() {
        let ledger = Ledger::with_default_tag(tag("General"));
        assert_eq!(ledger.default_tag(), &tag("General"));
        assert!(ledger.has_category(&tag("General")));
        assert!(!ledger.has_category(&Tag::default_category()));
    }

    #[test]
    fn test_tallies() {
        let mut ledger = Ledger::new();
        ledger
            .add_category(CategoryBudget::new(tag("Food"), amount("50")))
            .unwrap();
        ledger
            .topup_category(&Tag::default_category(), amount("20"))
            .unwrap();
        ledger
            .add_expense(expense("Lunch", "12.50", "01-01-2021", &["Food"]))
            .unwrap();
        ledger
            .add_expense(expense("Taxi", "80", "02-01-2021", &["Default"]))
            .unwrap();

        assert_eq!(ledger.total_budgeted().cents(), 7000);
        assert_eq!(ledger.total_expenses().cents(), 9250);
        assert_eq!(ledger.balance().cents(), -2250);
        assert_eq!(ledger.category_spent(&tag("Food")).unwrap().cents(), 1250);
    }

    #[test]
    fn test_spent_tracks_edits() {
        let mut ledger = Ledger::new();
        ledger.add_category(CategoryBudget::empty(tag("Food"))).unwrap();
        let lunch = expense("Lunch", "12.50", "01-01-2021", &["Food"]);
        ledger.add_expense(lunch.clone()).unwrap();
        assert_eq!(ledger.category_spent(&tag("Food")).unwrap().cents(), 1250);

        let retagged = expense("Lunch", "12.50", "01-01-2021", &["Work"]);
        ledger.set_expense(&lunch, retagged).unwrap();
        assert!(ledger.category_spent(&tag("Food")).unwrap().is_zero());
    }

    #[test]
    fn test_remove_category() {
        let mut ledger = Ledger::new();
        ledger.add_category(CategoryBudget::empty(tag("Food"))).unwrap();

        let removed = ledger.remove_category(&tag("Food")).unwrap();
        assert_eq!(removed.tag(), &tag("Food"));
        assert!(ledger
            .remove_category(&tag("Food"))
            .unwrap_err()
            .is_category_not_found());

        let err = ledger.remove_category(&Tag::default_category()).unwrap_err();
        assert!(matches!(err, BookError::ProtectedCategory(_)));
    }

    #[test]
    fn test_from_records_adds_missing_default() {
        let ledger = Ledger::from_records(
            Tag::default_category(),
            vec![expense("Lunch", "1", "01-01-2021", &[])],
            vec![CategoryBudget::new(tag("Food"), amount("5"))],
        )
        .unwrap();

        let tags: Vec<&str> = ledger.budgets().iter().map(|b| b.tag().as_str()).collect();
        assert_eq!(tags, vec!["Default", "Food"]);
        assert_eq!(ledger.expenses().len(), 1);
    }

    #[test]
    fn test_from_records_rejects_duplicates() {
        let err = Ledger::from_records(
            Tag::default_category(),
            vec![
                expense("Lunch", "1", "01-01-2021", &["A"]),
                expense("Lunch", "1", "01-01-2021", &["B"]),
            ],
            Vec::new(),
        )
        .unwrap_err();
        assert!(err.is_duplicate());
    }

    #[test]
    fn test_reset_data() {
        let mut source = Ledger::new();
        source
            .add_expense(expense("Lunch", "1", "01-01-2021", &[]))
            .unwrap();
        source.add_category(CategoryBudget::empty(tag("Food"))).unwrap();

        let mut target = Ledger::new();
        target
            .add_expense(expense("Old", "9", "01-01-2020", &[]))
            .unwrap();
        target.reset_data(&source);

        assert_eq!(target, source);
    }
}
