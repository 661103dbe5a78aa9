//! Ordered collection of category budgets, unique by tag

use crate::error::{BookError, BookResult};

use super::amount::Amount;
use super::budget::CategoryBudget;
use super::tag::Tag;

/// Insertion-ordered list of category budgets with distinct tags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniqueCategoryBudgetList {
    budgets: Vec<CategoryBudget>,
}

impl UniqueCategoryBudgetList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a budget for the same tag is stored
    pub fn contains(&self, budget: &CategoryBudget) -> bool {
        self.contains_tag(budget.tag())
    }

    pub fn contains_tag(&self, tag: &Tag) -> bool {
        self.budgets.iter().any(|b| b.tag() == tag)
    }

    pub fn get(&self, tag: &Tag) -> Option<&CategoryBudget> {
        self.budgets.iter().find(|b| b.tag() == tag)
    }

    /// Append a budget; its tag must not already have one
    pub fn add(&mut self, budget: CategoryBudget) -> BookResult<()> {
        if self.contains(&budget) {
            return Err(BookError::duplicate_category(budget.tag().as_str()));
        }
        self.budgets.push(budget);
        Ok(())
    }

    /// Replace `target` with `replacement`, keeping its position
    ///
    /// An absent `target` is reported as `CategoryNotFound`, not `NotFound`.
    pub fn replace(
        &mut self,
        target: &CategoryBudget,
        replacement: CategoryBudget,
    ) -> BookResult<()> {
        let index = self
            .budgets
            .iter()
            .position(|b| b == target)
            .ok_or_else(|| BookError::category_not_found(target.tag().as_str()))?;

        if !target.is_same_category(&replacement) && self.contains(&replacement) {
            return Err(BookError::duplicate_category(replacement.tag().as_str()));
        }

        self.budgets[index] = replacement;
        Ok(())
    }

    /// Remove a budget; an absent one is reported as `CategoryNotFound`
    pub fn remove(&mut self, budget: &CategoryBudget) -> BookResult<CategoryBudget> {
        let index = self
            .budgets
            .iter()
            .position(|b| b == budget)
            .ok_or_else(|| BookError::category_not_found(budget.tag().as_str()))?;
        Ok(self.budgets.remove(index))
    }

    /// Insert an empty budget for `tag` at the front unless one exists
    pub fn ensure_tag(&mut self, tag: &Tag) {
        if !self.contains_tag(tag) {
            self.budgets.insert(0, CategoryBudget::empty(tag.clone()));
        }
    }

    /// Increase the allocation of the budget for `tag`
    pub fn topup(&mut self, tag: &Tag, amount: Amount) -> BookResult<&CategoryBudget> {
        let index = self
            .budgets
            .iter()
            .position(|b| b.tag() == tag)
            .ok_or_else(|| BookError::category_not_found(tag.as_str()))?;

        self.budgets[index] = self.budgets[index].topped_up(amount)?;
        Ok(&self.budgets[index])
    }

    /// Replace the whole collection; the input must be free of duplicates
    pub fn set_all(&mut self, budgets: Vec<CategoryBudget>) -> BookResult<()> {
        for (i, budget) in budgets.iter().enumerate() {
            if budgets[i + 1..].iter().any(|b| b.is_same_category(budget)) {
                return Err(BookError::duplicate_category(budget.tag().as_str()));
            }
        }
        self.budgets = budgets;
        Ok(())
    }

    /// Total allocated across all budgets
    pub fn sum_amounts(&self) -> Amount {
        self.budgets.iter().map(CategoryBudget::amount).sum()
    }

    pub fn as_slice(&self) -> &[CategoryBudget] {
        &self.budgets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CategoryBudget> {
        self.budgets.iter()
    }

    pub fn len(&self) -> usize {
        self.budgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.budgets.is_empty()
    }
}
