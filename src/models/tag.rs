//! Category tags
//!
//! A tag marks an expense as belonging to a category and also keys that
//! category's budget. Tags compare by exact, case-sensitive string equality.

use std::fmt;
use std::str::FromStr;

use crate::error::{BookError, BookResult};

/// Name of the category that stands for the unfiltered, overall view
pub const DEFAULT_TAG_NAME: &str = "Default";

/// A short alphanumeric label
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(String);

impl Tag {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Tag names should be alphanumeric";

    /// Validate a tag name; surrounding whitespace is ignored
    pub fn parse(s: &str) -> BookResult<Self> {
        let name = s.trim();
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(BookError::InvalidValue(format!(
                "{}: '{}'",
                Self::MESSAGE_CONSTRAINTS,
                name
            )));
        }
        Ok(Self(name.to_string()))
    }

    /// The built-in `Default` category tag
    pub fn default_category() -> Self {
        Self(DEFAULT_TAG_NAME.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Tag {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
