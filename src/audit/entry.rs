//! Audit entry data structures
//!
//! Defines the structure of audit log entries including operation types,
//! entity types, and the entry format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::commands::LedgerChange;
use crate::models::{CategoryBudget, Expense};
use crate::storage::adapted::{JsonAdaptedBudget, JsonAdaptedExpense};

use super::diff::generate_diff;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Expense,
    CategoryBudget,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Expense => write!(f, "Expense"),
            EntityType::CategoryBudget => write!(f, "CategoryBudget"),
        }
    }
}

/// A single audit log entry
///
/// Records a single operation on an entity with optional before/after values
/// for tracking changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Identity key of the affected entity
    pub entity_id: String,

    /// Human-readable label (expense description or category tag)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// Stored form of the entity before the operation (updates/deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Stored form of the entity after the operation (creates/updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    /// Create a new audit entry for a create operation
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before: None,
            after: serde_json::to_value(entity).ok(),
            diff_summary: None,
        }
    }

    /// Create a new audit entry for an update operation, diffing the two states
    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Self {
        let before = serde_json::to_value(before).ok();
        let after = serde_json::to_value(after).ok();
        let diff_summary = match (&before, &after) {
            (Some(b), Some(a)) => generate_diff(b, a),
            _ => None,
        };

        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before,
            after,
            diff_summary,
        }
    }

    /// Create a new audit entry for a delete operation
    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before: serde_json::to_value(entity).ok(),
            after: None,
            diff_summary: None,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

/// Identity key of an expense: date, description and amount
fn expense_id(expense: &Expense) -> String {
    format!(
        "{}/{}/{}",
        expense.date(),
        expense.description(),
        expense.amount()
    )
}

fn expense_name(expense: &Expense) -> Option<String> {
    Some(expense.description().to_string())
}

fn budget_id(budget: &CategoryBudget) -> String {
    budget.tag().to_string()
}

impl From<&LedgerChange> for AuditEntry {
    fn from(change: &LedgerChange) -> Self {
        match change {
            LedgerChange::ExpenseAdded(expense) => AuditEntry::create(
                EntityType::Expense,
                expense_id(expense),
                expense_name(expense),
                &JsonAdaptedExpense::from(expense),
            ),
            LedgerChange::ExpenseDeleted(expense) => AuditEntry::delete(
                EntityType::Expense,
                expense_id(expense),
                expense_name(expense),
                &JsonAdaptedExpense::from(expense),
            ),
            LedgerChange::ExpenseEdited { before, after } => AuditEntry::update(
                EntityType::Expense,
                expense_id(after),
                expense_name(after),
                &JsonAdaptedExpense::from(before),
                &JsonAdaptedExpense::from(after),
            ),
            LedgerChange::CategoryAdded(budget) => AuditEntry::create(
                EntityType::CategoryBudget,
                budget_id(budget),
                None,
                &JsonAdaptedBudget::from(budget),
            ),
            LedgerChange::CategoryDeleted(budget) => AuditEntry::delete(
                EntityType::CategoryBudget,
                budget_id(budget),
                None,
                &JsonAdaptedBudget::from(budget),
            ),
            LedgerChange::BudgetToppedUp { before, after } => AuditEntry::update(
                EntityType::CategoryBudget,
                budget_id(after),
                None,
                &JsonAdaptedBudget::from(before),
                &JsonAdaptedBudget::from(after),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::expense::test_support::expense;
    use crate::models::{Amount, Tag};

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Update.to_string(), "UPDATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_entity_type_serialization() {
        let json = serde_json::to_string(&EntityType::CategoryBudget).unwrap();
        assert_eq!(json, "\"category_budget\"");
        assert_eq!(EntityType::Expense.to_string(), "Expense");
    }

    #[test]
    fn test_expense_added_entry() {
        let lunch = expense("Lunch", "12.50", "01-01-2021", &["Food"]);
        let entry = AuditEntry::from(&LedgerChange::ExpenseAdded(lunch));

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_type, EntityType::Expense);
        assert_eq!(entry.entity_id, "01-01-2021/Lunch/12.50");
        assert_eq!(entry.entity_name.as_deref(), Some("Lunch"));
        assert!(entry.before.is_none());
        assert_eq!(entry.after.unwrap()["amount"], "12.50");
    }

    #[test]
    fn test_expense_edited_entry_has_diff() {
        let before = expense("Lunch", "12.50", "01-01-2021", &["Food"]);
        let after = expense("Lunch", "15", "01-01-2021", &["Food"]);
        let entry = AuditEntry::from(&LedgerChange::ExpenseEdited { before, after });

        assert_eq!(entry.operation, Operation::Update);
        assert_eq!(
            entry.diff_summary.as_deref(),
            Some("amount: \"12.50\" -> \"15.00\"")
        );
    }

    #[test]
    fn test_topup_entry() {
        let before = CategoryBudget::empty(Tag::parse("Food").unwrap());
        let after = before.topped_up(Amount::parse("50").unwrap()).unwrap();
        let entry = AuditEntry::from(&LedgerChange::BudgetToppedUp { before, after });

        assert_eq!(entry.entity_type, EntityType::CategoryBudget);
        assert_eq!(entry.entity_id, "Food");
        assert!(entry.diff_summary.unwrap().contains("-> \"50.00\""));
    }

    #[test]
    fn test_delete_entry() {
        let budget = CategoryBudget::empty(Tag::parse("Travel").unwrap());
        let entry = AuditEntry::from(&LedgerChange::CategoryDeleted(budget));

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_human_readable_format() {
        let lunch = expense("Lunch", "12.50", "01-01-2021", &[]);
        let formatted = AuditEntry::from(&LedgerChange::ExpenseDeleted(lunch))
            .format_human_readable();

        assert!(formatted.contains("DELETE"));
        assert!(formatted.contains("Expense"));
        assert!(formatted.contains("(Lunch)"));
    }
}
