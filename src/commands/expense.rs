//! Expense commands: add, delete, edit, find, list
//!
//! Delete and edit address expenses by zero-based position in the currently
//! filtered view, not in the full ledger.

use std::collections::BTreeSet;

use crate::error::{BookError, BookResult};
use crate::ledger::{CategoryView, Ledger};
use crate::models::{
    Amount, Description, Expense, ExpenseDate, ExpenseFilter, ExpensePredicate, FindPredicate,
    Remark, Tag,
};

use super::{CommandResult, LedgerChange};

/// Look up the expense at `index` of the filtered view
fn filtered_expense(ledger: &Ledger, view: &CategoryView, index: usize) -> BookResult<Expense> {
    let listed = view.filtered_expenses(ledger);
    listed
        .get(index)
        .map(|e| (*e).clone())
        .ok_or(BookError::IndexOutOfRange {
            index: index + 1,
            len: listed.len(),
        })
}

/// Adds an expense to the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddExpense {
    expense: Expense,
}

impl AddExpense {
    pub fn new(expense: Expense) -> Self {
        Self { expense }
    }

    pub fn execute(&self, ledger: &mut Ledger, view: &mut CategoryView) -> BookResult<CommandResult> {
        if ledger.has_expense(&self.expense) {
            return Err(BookError::duplicate_expense(
                self.expense.description().as_str(),
            ));
        }

        ledger.add_expense(self.expense.clone())?;
        view.update_filtered_expenses(ExpenseFilter::All);

        Ok(CommandResult::with_change(
            format!("New expense added: {}", self.expense),
            LedgerChange::ExpenseAdded(self.expense.clone()),
        ))
    }
}

/// Deletes the expense at a position of the filtered view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteExpense {
    index: usize,
}

impl DeleteExpense {
    /// `index` is zero-based
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    pub fn execute(&self, ledger: &mut Ledger, view: &mut CategoryView) -> BookResult<CommandResult> {
        let target = filtered_expense(ledger, view, self.index)?;
        let removed = ledger.remove_expense(&target)?;

        Ok(CommandResult::with_change(
            format!("Deleted expense: {}", removed),
            LedgerChange::ExpenseDeleted(removed),
        ))
    }
}

/// Fields to change on an expense; unset fields keep their value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditExpenseDescriptor {
    pub description: Option<Description>,
    pub amount: Option<Amount>,
    pub date: Option<ExpenseDate>,
    pub remark: Option<Remark>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditExpenseDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.description.is_some()
            || self.amount.is_some()
            || self.date.is_some()
            || self.remark.is_some()
            || self.tags.is_some()
    }

    /// Build the replacement record for `expense`
    pub fn apply(&self, expense: &Expense) -> Expense {
        Expense::new(
            self.description
                .clone()
                .unwrap_or_else(|| expense.description().clone()),
            self.amount.unwrap_or(expense.amount()),
            self.date.unwrap_or(expense.date()),
            self.remark.clone().unwrap_or_else(|| expense.remark().clone()),
            self.tags.clone().unwrap_or_else(|| expense.tags().clone()),
        )
    }
}

/// Replaces the expense at a position of the filtered view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditExpense {
    index: usize,
    descriptor: EditExpenseDescriptor,
}

impl EditExpense {
    /// `index` is zero-based
    pub fn new(index: usize, descriptor: EditExpenseDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn execute(&self, ledger: &mut Ledger, view: &mut CategoryView) -> BookResult<CommandResult> {
        let target = filtered_expense(ledger, view, self.index)?;
        let edited = self.descriptor.apply(&target);

        if !target.is_same_expense(&edited) && ledger.has_expense(&edited) {
            return Err(BookError::duplicate_expense(edited.description().as_str()));
        }

        ledger.set_expense(&target, edited.clone())?;

        Ok(CommandResult::with_change(
            format!("Edited expense: {}", edited),
            LedgerChange::ExpenseEdited {
                before: target,
                after: edited,
            },
        ))
    }
}

/// Installs a compound search as the expense filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindExpenses {
    predicate: FindPredicate,
}

impl FindExpenses {
    pub fn new(predicate: FindPredicate) -> Self {
        Self { predicate }
    }

    pub fn execute(&self, ledger: &Ledger, view: &mut CategoryView) -> CommandResult {
        let filter = if self.predicate.is_empty() {
            ExpenseFilter::Nothing
        } else {
            ExpenseFilter::Find(self.predicate.clone())
        };
        view.update_filtered_expenses(filter);

        let count = view.filtered_expenses(ledger).len();
        CommandResult::message(format!("{} expenses listed!", count))
    }
}

/// Shows every expense again
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListExpenses;

impl ListExpenses {
    pub fn execute(&self, ledger: &Ledger, view: &mut CategoryView) -> CommandResult {
        view.update_filtered_expenses(ExpenseFilter::All);
        let count = view.filtered_expenses(ledger).len();
        CommandResult::message(format!("Listed all expenses ({})", count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::expense::test_support::expense;
    use crate::models::{CategoryBudget, DatePredicate, KeywordsPredicate, TagsPredicate};

    fn tag(name: &str) -> Tag {
        Tag::parse(name).unwrap()
    }

    fn setup() -> (Ledger, CategoryView) {
        let mut ledger = Ledger::new();
        ledger.add_category(CategoryBudget::empty(tag("Food"))).unwrap();
        ledger
            .add_expense(expense("Lunch", "12.50", "01-01-2021", &["Food"]))
            .unwrap();
        ledger
            .add_expense(expense("Taxi", "20", "02-01-2021", &["Travel"]))
            .unwrap();
        ledger
            .add_expense(expense("Dinner", "30", "02-01-2021", &["Food"]))
            .unwrap();
        (ledger, CategoryView::new())
    }

    fn find(keywords: &[&str], dates: &[&str], tags: &[&str]) -> FindExpenses {
        FindExpenses::new(FindPredicate::new(
            KeywordsPredicate::new(keywords.iter().copied()),
            DatePredicate::new(dates.iter().copied()),
            TagsPredicate::new(tags.iter().copied()).unwrap(),
        ))
    }

    #[test]
    fn test_add_expense() {
        let (mut ledger, mut view) = setup();
        let coffee = expense("Coffee", "3", "03-01-2021", &[]);

        let result = AddExpense::new(coffee.clone())
            .execute(&mut ledger, &mut view)
            .unwrap();
        assert!(result.message.contains("Coffee"));
        assert_eq!(result.changes, vec![LedgerChange::ExpenseAdded(coffee)]);
        assert_eq!(ledger.expenses().len(), 4);
    }

    #[test]
    fn test_add_duplicate_expense() {
        let (mut ledger, mut view) = setup();
        let twin = expense("Lunch", "12.50", "01-01-2021", &["Other"]);

        let err = AddExpense::new(twin)
            .execute(&mut ledger, &mut view)
            .unwrap_err();
        assert!(err.is_duplicate());
        assert_eq!(ledger.expenses().len(), 3);
    }

    #[test]
    fn test_add_resets_expense_filter() {
        let (mut ledger, mut view) = setup();
        view.select_category(&ledger, &tag("Food"));

        AddExpense::new(expense("Bus", "1", "03-01-2021", &[]))
            .execute(&mut ledger, &mut view)
            .unwrap();
        assert_eq!(view.filtered_expenses(&ledger).len(), 4);
    }

    #[test]
    fn test_delete_uses_filtered_index() {
        let (mut ledger, mut view) = setup();
        view.select_category(&ledger, &tag("Food"));

        let result = DeleteExpense::new(1).execute(&mut ledger, &mut view).unwrap();
        assert!(result.message.contains("Dinner"));
        let left: Vec<&str> = ledger
            .expenses()
            .iter()
            .map(|e| e.description().as_str())
            .collect();
        assert_eq!(left, vec!["Lunch", "Taxi"]);
    }

    #[test]
    fn test_delete_out_of_range() {
        let (mut ledger, mut view) = setup();
        view.select_category(&ledger, &tag("Food"));
        let before = ledger.clone();

        let err = DeleteExpense::new(2).execute(&mut ledger, &mut view).unwrap_err();
        assert!(matches!(err, BookError::IndexOutOfRange { index: 3, len: 2 }));
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_edit_expense() {
        let (mut ledger, mut view) = setup();
        let descriptor = EditExpenseDescriptor {
            amount: Some(Amount::parse("15").unwrap()),
            remark: Some(Remark::new("with team")),
            ..Default::default()
        };

        let result = EditExpense::new(0, descriptor)
            .execute(&mut ledger, &mut view)
            .unwrap();
        let edited = &ledger.expenses()[0];
        assert_eq!(edited.amount().cents(), 1500);
        assert_eq!(edited.remark().as_str(), "with team");
        assert!(edited.has_tag(&tag("Food")));
        assert!(matches!(
            result.changes[0],
            LedgerChange::ExpenseEdited { .. }
        ));
    }

    #[test]
    fn test_edit_tags_only_is_not_duplicate() {
        let (mut ledger, mut view) = setup();
        let descriptor = EditExpenseDescriptor {
            tags: Some([tag("Work")].into_iter().collect()),
            ..Default::default()
        };

        EditExpense::new(0, descriptor)
            .execute(&mut ledger, &mut view)
            .unwrap();
        assert!(ledger.expenses()[0].has_tag(&tag("Work")));
        assert!(!ledger.expenses()[0].has_tag(&tag("Food")));
    }

    #[test]
    fn test_edit_into_existing_expense_fails() {
        let (mut ledger, mut view) = setup();
        let before = ledger.clone();
        let descriptor = EditExpenseDescriptor {
            description: Some(Description::parse("Taxi").unwrap()),
            amount: Some(Amount::parse("20").unwrap()),
            date: Some(ExpenseDate::parse("02-01-2021").unwrap()),
            ..Default::default()
        };

        let err = EditExpense::new(0, descriptor)
            .execute(&mut ledger, &mut view)
            .unwrap_err();
        assert!(err.is_duplicate());
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_find() {
        let (ledger, mut view) = setup();

        let result = find(&[], &[], &["Food"]).execute(&ledger, &mut view);
        assert_eq!(result.message, "2 expenses listed!");
        assert!(!result.is_mutation());

        find(&["dinner"], &["02-01-2021"], &["Food"]).execute(&ledger, &mut view);
        let listed = view.filtered_expenses(&ledger);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].description().as_str(), "Dinner");
    }

    #[test]
    fn test_find_without_criteria_lists_nothing() {
        let (ledger, mut view) = setup();
        let result = find(&[], &[], &[]).execute(&ledger, &mut view);
        assert_eq!(result.message, "0 expenses listed!");
        assert!(view.filtered_expenses(&ledger).is_empty());
    }

    #[test]
    fn test_find_searches_whole_ledger() {
        let (ledger, mut view) = setup();
        view.select_category(&ledger, &tag("Food"));

        find(&["taxi"], &[], &[]).execute(&ledger, &mut view);
        assert_eq!(view.filtered_expenses(&ledger).len(), 1);
    }

    #[test]
    fn test_list_resets_filter() {
        let (ledger, mut view) = setup();
        find(&[], &[], &[]).execute(&ledger, &mut view);

        ListExpenses.execute(&ledger, &mut view);
        assert_eq!(view.filtered_expenses(&ledger).len(), 3);
    }
}
