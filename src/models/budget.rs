//! Category budget model
//!
//! A category budget is a spending allowance bound to exactly one tag. The
//! allocated amount is stored; the amount spent is always derived from the
//! expenses passed in, so it can never drift from the ledger.

use std::fmt;

use crate::error::{BookError, BookResult};

use super::amount::{Amount, Balance};
use super::expense::Expense;
use super::tag::Tag;

/// A named spending allowance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBudget {
    tag: Tag,
    amount: Amount,
}

impl CategoryBudget {
    /// Create a budget for `tag` with an initial allocation
    pub fn new(tag: Tag, amount: Amount) -> Self {
        Self { tag, amount }
    }

    /// Create an empty budget for `tag`
    pub fn empty(tag: Tag) -> Self {
        Self::new(tag, Amount::zero())
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// Allocated amount
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Budgets are the same category when their tags match
    pub fn is_same_category(&self, other: &CategoryBudget) -> bool {
        self.tag == other.tag
    }

    /// A copy of this budget with `amount` added to the allocation
    ///
    /// Fails with `InvalidValue` when the new allocation would overflow.
    pub fn topped_up(&self, amount: Amount) -> BookResult<Self> {
        let total = self.amount.checked_add(amount).ok_or_else(|| {
            BookError::InvalidValue(format!("The budget for {} cannot grow any further", self.tag))
        })?;
        Ok(Self::new(self.tag.clone(), total))
    }

    /// Sum of the amounts of every expense bearing this budget's tag
    pub fn spent<'a>(&self, expenses: impl IntoIterator<Item = &'a Expense>) -> Amount {
        expenses
            .into_iter()
            .filter(|e| e.has_tag(&self.tag))
            .map(Expense::amount)
            .sum()
    }

    /// Allocation left after what has been spent; negative when overspent
    pub fn remaining<'a>(&self, expenses: impl IntoIterator<Item = &'a Expense>) -> Balance {
        Balance::between(self.amount, self.spent(expenses))
    }
}

impl fmt::Display for CategoryBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Budget: {}", self.tag, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::expense::test_support::expense;

    fn budget(tag: &str, amount: &str) -> CategoryBudget {
        CategoryBudget::new(Tag::parse(tag).unwrap(), Amount::parse(amount).unwrap())
    }

    #[test]
    fn test_same_category_ignores_amount() {
        assert!(budget("Food", "10").is_same_category(&budget("Food", "99")));
        assert!(!budget("Food", "10").is_same_category(&budget("food", "10")));
    }

    #[test]
    fn test_topped_up() {
        let before = budget("Food", "10");
        let after = before.topped_up(Amount::parse("2.50").unwrap()).unwrap();
        assert_eq!(after.amount().cents(), 1250);
        assert_eq!(before.amount().cents(), 1000);
        assert!(after.is_same_category(&before));
    }

    #[test]
    fn test_topped_up_rejects_overflow() {
        let full = CategoryBudget::new(
            Tag::parse("Food").unwrap(),
            Amount::from_cents(i64::MAX - 50).unwrap(),
        );

        let err = full.topped_up(Amount::parse("1").unwrap()).unwrap_err();
        assert!(err.is_invalid_value());
        assert_eq!(full.amount().cents(), i64::MAX - 50);
    }

    #[test]
    fn test_spent_and_remaining() {
        let food = budget("Food", "20");
        let expenses = vec![
            expense("Lunch", "12.50", "01-01-2021", &["Food"]),
            expense("Taxi", "30", "01-01-2021", &["Travel"]),
            expense("Snack", "9", "02-01-2021", &["Food", "Travel"]),
        ];

        assert_eq!(food.spent(&expenses).cents(), 2150);
        assert_eq!(food.remaining(&expenses).cents(), -150);
        assert!(budget("Rent", "5").spent(&expenses).is_zero());
    }
}
