//! Amount and Balance types for representing currency values
//!
//! Internally stores values in cents (i64) to avoid floating-point precision
//! issues. An [`Amount`] is never negative; a [`Balance`] is the signed result
//! of subtracting one tally from another.

use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use crate::error::{BookError, BookResult};

/// A non-negative monetary amount with two-decimal precision, stored as cents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

impl Amount {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Amounts should be non-negative numbers with at most two decimal places, e.g. 12 or 12.50";

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Create an amount from cents, rejecting negative values
    pub fn from_cents(cents: i64) -> BookResult<Self> {
        if cents < 0 {
            return Err(BookError::InvalidValue(Self::MESSAGE_CONSTRAINTS.into()));
        }
        Ok(Self(cents))
    }

    /// Sum of two amounts, or `None` if it would not fit
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Format with a currency symbol, e.g. "$12.50"
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{}{}", symbol, self)
    }

    /// Parse an amount from user or file input
    ///
    /// Accepts "12", "12.5" and "12.50". Signs, currency symbols, more than
    /// two decimal places and anything non-numeric are rejected.
    pub fn parse(s: &str) -> BookResult<Self> {
        let invalid = || BookError::InvalidValue(Self::MESSAGE_CONSTRAINTS.into());
        let s = s.trim();

        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (s, None),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let dollars: i64 = whole.parse().map_err(|_| invalid())?;

        let cents = match fraction {
            None => 0,
            Some(f) if f.is_empty() || f.len() > 2 || !f.bytes().all(|b| b.is_ascii_digit()) => {
                return Err(invalid());
            }
            Some(f) if f.len() == 1 => f.parse::<i64>().map_err(|_| invalid())? * 10,
            Some(f) => f.parse::<i64>().map_err(|_| invalid())?,
        };

        dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .map(Self)
            .ok_or_else(invalid)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Amount {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

/// A signed difference between two amounts, in cents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Balance(i64);

impl Balance {
    /// `credit - debit`
    pub const fn between(credit: Amount, debit: Amount) -> Self {
        Self(credit.0 - debit.0)
    }

    /// Get the balance in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Check if the balance is negative (overspent)
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Format with a currency symbol, sign first
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.0.abs();
        format!("{}{}{}.{:02}", sign, symbol, abs / 100, abs % 100)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol(""))
    }
}
