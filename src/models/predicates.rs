//! Filters over expenses and category budgets
//!
//! The three primitive expense predicates report themselves "empty" when they
//! were built without criteria. [`FindPredicate`] ANDs the non-empty ones and
//! matches nothing at all when every criterion is empty. The view filters
//! ([`ExpenseFilter`], [`BudgetFilter`]) default to matching everything.

use std::collections::BTreeSet;

use crate::error::BookResult;

use super::budget::CategoryBudget;
use super::expense::Expense;
use super::tag::Tag;

/// A test over an expense that may carry no criteria at all
pub trait ExpensePredicate {
    fn test(&self, expense: &Expense) -> bool;

    /// True when the predicate was built without criteria
    fn is_empty(&self) -> bool;
}

/// Matches when any description word equals a keyword, ignoring case
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordsPredicate {
    keywords: Vec<String>,
}

impl KeywordsPredicate {
    /// Each input may hold several whitespace-separated keywords
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .flat_map(|k| {
                k.as_ref()
                    .split_whitespace()
                    .map(str::to_lowercase)
                    .collect::<Vec<_>>()
            })
            .collect();
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl ExpensePredicate for KeywordsPredicate {
    fn test(&self, expense: &Expense) -> bool {
        expense
            .description()
            .words()
            .any(|word| self.keywords.iter().any(|k| word.to_lowercase() == *k))
    }

    fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// Matches when the expense's `DD-MM-YYYY` date equals one of the given strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatePredicate {
    dates: Vec<String>,
}

impl DatePredicate {
    pub fn new<I, S>(dates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dates: dates.into_iter().map(Into::into).collect(),
        }
    }

    pub fn dates(&self) -> &[String] {
        &self.dates
    }
}

impl ExpensePredicate for DatePredicate {
    fn test(&self, expense: &Expense) -> bool {
        let date = expense.date().to_string();
        self.dates.iter().any(|d| *d == date)
    }

    fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Matches when the expense carries at least one of the given tags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagsPredicate {
    tags: BTreeSet<Tag>,
}

impl TagsPredicate {
    /// Build from raw tag names; any invalid name fails the whole construction
    pub fn new<I, S>(raw: I) -> BookResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tags = raw
            .into_iter()
            .map(|s| Tag::parse(s.as_ref()))
            .collect::<BookResult<BTreeSet<_>>>()?;
        Ok(Self { tags })
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }
}

impl ExpensePredicate for TagsPredicate {
    fn test(&self, expense: &Expense) -> bool {
        expense.tags().iter().any(|t| self.tags.contains(t))
    }

    fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Conjunction of the non-empty keyword, date and tag criteria
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindPredicate {
    keywords: KeywordsPredicate,
    dates: DatePredicate,
    tags: TagsPredicate,
}

impl FindPredicate {
    pub fn new(keywords: KeywordsPredicate, dates: DatePredicate, tags: TagsPredicate) -> Self {
        Self {
            keywords,
            dates,
            tags,
        }
    }

    fn criteria(&self) -> [&dyn ExpensePredicate; 3] {
        [&self.keywords as &dyn ExpensePredicate, &self.dates, &self.tags]
    }
}

impl ExpensePredicate for FindPredicate {
    /// An explicit find without any criterion matches nothing
    fn test(&self, expense: &Expense) -> bool {
        if self.is_empty() {
            return false;
        }
        self.criteria()
            .iter()
            .filter(|p| !p.is_empty())
            .all(|p| p.test(expense))
    }

    fn is_empty(&self) -> bool {
        self.criteria().iter().all(|p| p.is_empty())
    }
}

/// Active filter of the expense view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ExpenseFilter {
    #[default]
    All,
    Nothing,
    /// Expenses bearing the tag
    Category(Tag),
    Find(FindPredicate),
}

impl ExpenseFilter {
    pub fn matches(&self, expense: &Expense) -> bool {
        match self {
            Self::All => true,
            Self::Nothing => false,
            Self::Category(tag) => expense.has_tag(tag),
            Self::Find(predicate) => predicate.test(expense),
        }
    }
}

/// Active filter of the budget view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BudgetFilter {
    #[default]
    All,
    /// The single budget keyed by the tag
    Category(Tag),
}

impl BudgetFilter {
    pub fn matches(&self, budget: &CategoryBudget) -> bool {
        match self {
            Self::All => true,
            Self::Category(tag) => budget.tag() == tag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::amount::Amount;
    use crate::models::expense::test_support::expense;

    fn sample() -> Vec<Expense> {
        vec![
            expense("Lunch at YIH", "12.50", "01-01-2021", &["Food"]),
            expense("Swee Choon dinner", "30", "01-01-2021", &["Food", "Friends"]),
            expense("Grab ride home", "15", "02-01-2021", &["Travel"]),
        ]
    }

    fn matching<'a>(p: &dyn ExpensePredicate, expenses: &'a [Expense]) -> Vec<&'a str> {
        expenses
            .iter()
            .filter(|e| p.test(e))
            .map(|e| e.description().as_str())
            .collect()
    }

    #[test]
    fn test_keywords_match_whole_words_ignoring_case() {
        let expenses = sample();
        let p = KeywordsPredicate::new(["lunch DINNER"]);
        assert_eq!(matching(&p, &expenses), vec!["Lunch at YIH", "Swee Choon dinner"]);

        let partial = KeywordsPredicate::new(["Lun"]);
        assert!(matching(&partial, &expenses).is_empty());
    }

    #[test]
    fn test_empty_predicates() {
        assert!(KeywordsPredicate::new(Vec::<String>::new()).is_empty());
        assert!(KeywordsPredicate::new(["   "]).is_empty());
        assert!(DatePredicate::new(Vec::<String>::new()).is_empty());
        assert!(TagsPredicate::new(Vec::<String>::new()).unwrap().is_empty());
    }

    #[test]
    fn test_date_predicate() {
        let expenses = sample();
        let p = DatePredicate::new(["02-01-2021", "09-09-2099"]);
        assert_eq!(matching(&p, &expenses), vec!["Grab ride home"]);
    }

    #[test]
    fn test_tags_predicate() {
        let expenses = sample();
        let p = TagsPredicate::new(["Friends", "Travel"]).unwrap();
        assert_eq!(matching(&p, &expenses), vec!["Swee Choon dinner", "Grab ride home"]);
    }

    #[test]
    fn test_tags_predicate_rejects_invalid_tag() {
        let err = TagsPredicate::new(["Food", "#bad"]).unwrap_err();
        assert!(err.is_invalid_value());
    }

    #[test]
    fn test_find_with_no_criteria_matches_nothing() {
        let expenses = sample();
        let p = FindPredicate::default();
        assert!(p.is_empty());
        assert!(matching(&p, &expenses).is_empty());
    }

    #[test]
    fn test_find_ands_non_empty_criteria() {
        let expenses = sample();

        let by_tag = FindPredicate::new(
            KeywordsPredicate::default(),
            DatePredicate::default(),
            TagsPredicate::new(["Food"]).unwrap(),
        );
        assert_eq!(matching(&by_tag, &expenses).len(), 2);

        let by_tag_and_word = FindPredicate::new(
            KeywordsPredicate::new(["dinner"]),
            DatePredicate::default(),
            TagsPredicate::new(["Food"]).unwrap(),
        );
        assert_eq!(matching(&by_tag_and_word, &expenses), vec!["Swee Choon dinner"]);

        let contradictory = FindPredicate::new(
            KeywordsPredicate::new(["Grab"]),
            DatePredicate::new(["01-01-2021"]),
            TagsPredicate::default(),
        );
        assert!(matching(&contradictory, &expenses).is_empty());
    }

    #[test]
    fn test_view_filters() {
        let expenses = sample();
        let food = Tag::parse("Food").unwrap();

        assert!(expenses.iter().all(|e| ExpenseFilter::All.matches(e)));
        assert!(!expenses.iter().any(|e| ExpenseFilter::Nothing.matches(e)));
        assert_eq!(
            expenses
                .iter()
                .filter(|e| ExpenseFilter::Category(food.clone()).matches(e))
                .count(),
            2
        );

        let budget = CategoryBudget::new(food.clone(), Amount::zero());
        assert!(BudgetFilter::All.matches(&budget));
        assert!(BudgetFilter::Category(food).matches(&budget));
        assert!(!BudgetFilter::Category(Tag::parse("Travel").unwrap()).matches(&budget));
    }
}
