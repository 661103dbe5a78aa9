//! Free-text fields of an expense: description and remark

use std::fmt;

use crate::error::{BookError, BookResult};

/// Non-blank, trimmed description of an expense
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Description(String);

impl Description {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Descriptions should not be blank";

    /// Trim and validate a description
    pub fn parse(s: &str) -> BookResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(BookError::InvalidValue(Self::MESSAGE_CONSTRAINTS.into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whitespace-delimited words of the description
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Optional note attached to an expense; may be empty
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Remark(String);

impl Remark {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Remark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_trims() {
        let desc = Description::parse("  Lunch at YIH ").unwrap();
        assert_eq!(desc.as_str(), "Lunch at YIH");
        assert_eq!(desc.words().collect::<Vec<_>>(), vec!["Lunch", "at", "YIH"]);
    }

    #[test]
    fn test_description_rejects_blank() {
        assert!(Description::parse("").is_err());
        assert!(Description::parse(" \t ").is_err());
    }

    #[test]
    fn test_remark_accepts_anything() {
        assert!(Remark::new("").is_empty());
        assert_eq!(Remark::new("  spaced  ").as_str(), "  spaced  ");
        assert_eq!(Remark::default(), Remark::new(""));
    }
}
