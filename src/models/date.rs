//! Calendar date of an expense, in `DD-MM-YYYY` form

use chrono::{Local, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::error::{BookError, BookResult};

/// strftime pattern used for both parsing and display
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// A validated calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpenseDate(NaiveDate);

impl ExpenseDate {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Dates should be valid calendar dates in the format DD-MM-YYYY";

    /// Parse a `DD-MM-YYYY` string
    ///
    /// The shape is checked before calendar validation so that unpadded
    /// forms like `1-1-2021` are rejected.
    pub fn parse(s: &str) -> BookResult<Self> {
        let invalid = || BookError::InvalidValue(Self::MESSAGE_CONSTRAINTS.into());
        let s = s.trim();
        let bytes = s.as_bytes();

        let well_formed = bytes.len() == 10
            && bytes[2] == b'-'
            && bytes[5] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());
        if !well_formed {
            return Err(invalid());
        }

        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Self)
            .map_err(|_| invalid())
    }

    /// Today's date in the local timezone
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Wrap an existing chrono date
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Get the underlying chrono date
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for ExpenseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for ExpenseDate {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
