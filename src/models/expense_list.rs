//! Ordered collection of expenses that never holds two "same" expenses
//!
//! Identity for the uniqueness invariant is [`Expense::is_same_expense`].
//! Lookups that name a concrete record (`replace`, `remove`) use full
//! equality.

use crate::error::{BookError, BookResult};

use super::amount::Amount;
use super::expense::Expense;

/// Insertion-ordered list of unique expenses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniqueExpenseList {
    expenses: Vec<Expense>,
}

impl UniqueExpenseList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if an expense with the same identity as `expense` is stored
    pub fn contains(&self, expense: &Expense) -> bool {
        self.expenses.iter().any(|e| e.is_same_expense(expense))
    }

    /// Append an expense; it must not already exist
    pub fn add(&mut self, expense: Expense) -> BookResult<()> {
        if self.contains(&expense) {
            return Err(BookError::duplicate_expense(expense.description().as_str()));
        }
        self.expenses.push(expense);
        Ok(())
    }

    /// Replace `target` with `replacement`, keeping its position
    ///
    /// `replacement` may share `target`'s identity but not that of any other
    /// stored expense.
    pub fn replace(&mut self, target: &Expense, replacement: Expense) -> BookResult<()> {
        let index = self
            .position(target)
            .ok_or_else(|| BookError::expense_not_found(target.description().as_str()))?;

        if !target.is_same_expense(&replacement) && self.contains(&replacement) {
            return Err(BookError::duplicate_expense(
                replacement.description().as_str(),
            ));
        }

        self.expenses[index] = replacement;
        Ok(())
    }

    /// Remove an expense; it must exist
    pub fn remove(&mut self, expense: &Expense) -> BookResult<Expense> {
        let index = self
            .position(expense)
            .ok_or_else(|| BookError::expense_not_found(expense.description().as_str()))?;
        Ok(self.expenses.remove(index))
    }

    /// Replace the whole collection; the input must be free of duplicates
    pub fn set_all(&mut self, expenses: Vec<Expense>) -> BookResult<()> {
        for (i, expense) in expenses.iter().enumerate() {
            if expenses[i + 1..].iter().any(|e| e.is_same_expense(expense)) {
                return Err(BookError::duplicate_expense(expense.description().as_str()));
            }
        }
        self.expenses = expenses;
        Ok(())
    }

    /// Total of all amounts, summed in list order
    pub fn sum_amounts(&self) -> Amount {
        self.expenses.iter().map(Expense::amount).sum()
    }

    pub fn as_slice(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expense> {
        self.expenses.iter()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    fn position(&self, expense: &Expense) -> Option<usize> {
        self.expenses.iter().position(|e| e == expense)
    }
}

impl<'a> IntoIterator for &'a UniqueExpenseList {
    type Item = &'a Expense;
    type IntoIter = std::slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.expenses.iter()
    }
}
