//! Custom error types for the expense book
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every core operation reports failures
//! through [`BookError`]; none of them is fatal to the process.

use thiserror::Error;

/// The main error type for expense book operations
#[derive(Error, Debug)]
pub enum BookError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// A value type's construction constraint was violated
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Request could not be turned into a command
    #[error("Invalid command format! {0}")]
    Parse(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Identity collision on add/replace/set
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// The tag has no category budget
    #[error("The expense book does not contain the category {0}")]
    CategoryNotFound(String),

    /// One-based index outside the currently listed expenses
    #[error("The expense index {index} is invalid: {len} expenses are listed")]
    IndexOutOfRange { index: usize, len: usize },

    /// The default category cannot be removed
    #[error("The {0} category cannot be removed")]
    ProtectedCategory(String),
}

impl BookError {
    /// Create a "duplicate" error for expenses
    pub fn duplicate_expense(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for category budgets
    pub fn duplicate_category(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a "category not found" error
    pub fn category_not_found(tag: impl Into<String>) -> Self {
        Self::CategoryNotFound(tag.into())
    }

    /// Check if this is a duplicate entry error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a "category not found" error
    pub fn is_category_not_found(&self) -> bool {
        matches!(self, Self::CategoryNotFound(_))
    }

    /// Check if this is an index error
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Check if this is an invalid value error
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, Self::InvalidValue(_))
    }

    /// Re-wrap a validation failure as a parse failure, leaving other kinds untouched
    pub fn into_parse(self) -> Self {
        match self {
            Self::InvalidValue(msg) => Self::Parse(msg),
            other => other,
        }
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for BookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for BookError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for expense book operations
pub type BookResult<T> = Result<T, BookError>;
