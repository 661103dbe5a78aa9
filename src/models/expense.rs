//! Expense model
//!
//! An expense is immutable once built; edits produce a replacement record.
//! Two comparisons are exposed: [`Expense::is_same_expense`] (identity by
//! description, amount and date, used for duplicate detection) and full
//! equality via `PartialEq`, which also compares remark and tags.

use std::collections::BTreeSet;
use std::fmt;

use super::amount::Amount;
use super::date::ExpenseDate;
use super::tag::Tag;
use super::text::{Description, Remark};

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    description: Description,
    amount: Amount,
    date: ExpenseDate,
    remark: Remark,
    tags: BTreeSet<Tag>,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        description: Description,
        amount: Amount,
        date: ExpenseDate,
        remark: Remark,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self {
            description,
            amount,
            date,
            remark,
            tags: tags.into_iter().collect(),
        }
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn date(&self) -> ExpenseDate {
        self.date
    }

    pub fn remark(&self) -> &Remark {
        &self.remark
    }

    /// Tags in sorted order
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Returns true if both expenses share description, amount and date
    ///
    /// Remark and tags are not part of an expense's identity.
    pub fn is_same_expense(&self, other: &Expense) -> bool {
        self.description == other.description
            && self.amount == other.amount
            && self.date == other.date
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Amount: {} Date: {}",
            self.description, self.amount, self.date
        )?;
        if !self.remark.is_empty() {
            write!(f, " Remark: {}", self.remark)?;
        }
        if !self.tags.is_empty() {
            let tags: Vec<&str> = self.tags.iter().map(Tag::as_str).collect();
            write!(f, " Tags: [{}]", tags.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Build an expense from raw strings, panicking on invalid input
    pub fn expense(description: &str, amount: &str, date: &str, tags: &[&str]) -> Expense {
        Expense::new(
            Description::parse(description).unwrap(),
            Amount::parse(amount).unwrap(),
            ExpenseDate::parse(date).unwrap(),
            Remark::default(),
            tags.iter().map(|t| Tag::parse(t).unwrap()),
        )
    }

    /// Same as [`expense`] with a remark
    pub fn expense_with_remark(
        description: &str,
        amount: &str,
        date: &str,
        remark: &str,
        tags: &[&str],
    ) -> Expense {
        let base = expense(description, amount, date, tags);
        Expense::new(
            base.description.clone(),
            base.amount,
            base.date,
            Remark::new(remark),
            base.tags,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{expense, expense_with_remark};
    use super::*;

    #[test]
    fn test_same_expense_ignores_tags_and_remark() {
        let a = expense("Lunch", "12.50", "01-01-2021", &["Food"]);
        let b = expense_with_remark("Lunch", "12.50", "01-01-2021", "with team", &["Work"]);

        assert!(a.is_same_expense(&b));
        assert!(b.is_same_expense(&a));
        assert_ne!(a, b);
    }

    #[test]
    fn test_different_identity_fields() {
        let a = expense("Lunch", "12.50", "01-01-2021", &[]);

        assert!(!a.is_same_expense(&expense("Dinner", "12.50", "01-01-2021", &[])));
        assert!(!a.is_same_expense(&expense("Lunch", "12.00", "01-01-2021", &[])));
        assert!(!a.is_same_expense(&expense("Lunch", "12.50", "02-01-2021", &[])));
    }

    #[test]
    fn test_tags_are_a_set() {
        let e = expense("Taxi", "8", "05-03-2021", &["Travel", "Work", "Travel"]);
        assert_eq!(e.tags().len(), 2);
        assert!(e.has_tag(&Tag::parse("Work").unwrap()));
        assert!(!e.has_tag(&Tag::parse("work").unwrap()));
    }

    #[test]
    fn test_display() {
        let e = expense_with_remark("Lunch", "12.5", "01-01-2021", "noodles", &["Food"]);
        assert_eq!(
            e.to_string(),
            "Lunch Amount: 12.50 Date: 01-01-2021 Remark: noodles Tags: [Food]"
        );

        let bare = expense("Bus", "1", "01-01-2021", &[]);
        assert_eq!(bare.to_string(), "Bus Amount: 1.00 Date: 01-01-2021");
    }
}
