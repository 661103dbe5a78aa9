//! On-disk record shapes
//!
//! Expenses and budgets are stored with every value as a plain string so the
//! file stays readable and editable by hand. Conversion back to the model
//! re-validates each field.

use serde::{Deserialize, Serialize};

use crate::error::{BookError, BookResult};
use crate::ledger::Ledger;
use crate::models::{Amount, CategoryBudget, Description, Expense, ExpenseDate, Remark, Tag};

fn missing_field(owner: &str, field: &str) -> BookError {
    BookError::InvalidValue(format!("{}'s {} field is missing!", owner, field))
}

/// Stored form of an [`Expense`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonAdaptedExpense {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<&Expense> for JsonAdaptedExpense {
    fn from(expense: &Expense) -> Self {
        Self {
            description: Some(expense.description().to_string()),
            amount: Some(expense.amount().to_string()),
            date: Some(expense.date().to_string()),
            remark: Some(expense.remark().to_string()),
            tags: expense.tags().iter().map(Tag::to_string).collect(),
        }
    }
}

impl JsonAdaptedExpense {
    /// Rebuild the model expense, validating every field
    pub fn to_model(&self) -> BookResult<Expense> {
        let description = self
            .description
            .as_deref()
            .ok_or_else(|| missing_field("Expense", "Description"))?;
        let amount = self
            .amount
            .as_deref()
            .ok_or_else(|| missing_field("Expense", "Amount"))?;
        let date = self
            .date
            .as_deref()
            .ok_or_else(|| missing_field("Expense", "Date"))?;

        let tags = self
            .tags
            .iter()
            .map(|t| Tag::parse(t))
            .collect::<BookResult<Vec<_>>>()?;

        Ok(Expense::new(
            Description::parse(description)?,
            Amount::parse(amount)?,
            ExpenseDate::parse(date)?,
            Remark::new(self.remark.clone().unwrap_or_default()),
            tags,
        ))
    }
}

/// Stored form of a [`CategoryBudget`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonAdaptedBudget {
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
}

impl From<&CategoryBudget> for JsonAdaptedBudget {
    fn from(budget: &CategoryBudget) -> Self {
        Self {
            tag: Some(budget.tag().to_string()),
            amount: Some(budget.amount().to_string()),
        }
    }
}

impl JsonAdaptedBudget {
    pub fn to_model(&self) -> BookResult<CategoryBudget> {
        let tag = self
            .tag
            .as_deref()
            .ok_or_else(|| missing_field("Budget", "Tag"))?;
        let amount = self
            .amount
            .as_deref()
            .ok_or_else(|| missing_field("Budget", "Amount"))?;

        Ok(CategoryBudget::new(Tag::parse(tag)?, Amount::parse(amount)?))
    }
}

/// Full ledger snapshot as stored in `expensebook.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerData {
    #[serde(default)]
    pub expenses: Vec<JsonAdaptedExpense>,
    #[serde(default)]
    pub budgets: Vec<JsonAdaptedBudget>,
}

impl From<&Ledger> for LedgerData {
    fn from(ledger: &Ledger) -> Self {
        Self {
            expenses: ledger.expenses().iter().map(JsonAdaptedExpense::from).collect(),
            budgets: ledger.budgets().iter().map(JsonAdaptedBudget::from).collect(),
        }
    }
}

impl LedgerData {
    /// Convert to a ledger keyed on `default_tag`
    ///
    /// Duplicate records are rejected rather than silently merged.
    pub fn to_ledger(&self, default_tag: Tag) -> BookResult<Ledger> {
        let expenses = self
            .expenses
            .iter()
            .map(JsonAdaptedExpense::to_model)
            .collect::<BookResult<Vec<_>>>()?;
        let budgets = self
            .budgets
            .iter()
            .map(JsonAdaptedBudget::to_model)
            .collect::<BookResult<Vec<_>>>()?;

        Ledger::from_records(default_tag, expenses, budgets)
    }
}
