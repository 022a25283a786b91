//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so two-decimal currency math
//! never suffers floating-point drift. The engine only needs exact integer
//! arithmetic: scaling by a whole number of occurrences per year, division
//! by twelve with rounding to the nearest cent, and remainders for payoff
//! schedules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// A monetary amount in cents (hundredths of the currency unit)
///
/// Currency-agnostic: the symbol used for display lives in settings and is
/// applied at format time. Amounts may be negative (e.g. overspent budgets
/// and disposable-income shortfalls).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create an amount from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create an amount from whole currency units
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// The zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole currency units, truncated toward zero
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// The cents portion, 0-99
    pub const fn subunits(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Multiply by a whole-number factor (occurrences per year, term counts)
    ///
    /// Saturates on overflow rather than wrapping; amounts near i64::MAX
    /// cents are already far outside any real portfolio.
    pub const fn scale(&self, factor: i64) -> Self {
        Self(self.0.saturating_mul(factor))
    }

    /// Divide by a whole-number divisor, rounding half away from zero to the
    /// nearest cent
    ///
    /// This is the single division rule used for every monthly-equivalent
    /// figure, per-item and aggregate alike.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero. Callers only pass fixed constants
    /// (twelve months per year).
    pub const fn divide_rounded(&self, divisor: i64) -> Self {
        let half = divisor.abs() / 2;
        let adjusted = if self.0 >= 0 {
            self.0 + half
        } else {
            self.0 - half
        };
        Self(adjusted / divisor)
    }

    /// Remainder after dividing by another amount (both in cents)
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero; payoff arithmetic checks for a positive
    /// payment before calling.
    pub const fn remainder(&self, divisor: Money) -> Self {
        Self(self.0 % divisor.0)
    }

    /// Format with a currency symbol, e.g. `format_with_symbol("€")`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.subunits())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.subunits())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    /// Parse an amount from user input
    ///
    /// Accepts `"10.50"`, `"-10.50"`, `"$10.50"`, `"10"`, `"1,250.75"`.
    /// Fractions beyond two digits are rejected rather than silently
    /// truncated; a sub-cent amount in user input is almost always a typo.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);
        let cleaned: String = rest.chars().filter(|c| *c != ',').collect();

        let (units_str, frac_str) = match cleaned.split_once('.') {
            Some((u, f)) => (u, f),
            None => (cleaned.as_str(), ""),
        };

        if units_str.is_empty() && frac_str.is_empty() {
            return Err(MoneyParseError::InvalidFormat(trimmed.to_string()));
        }
        if frac_str.len() > 2 {
            return Err(MoneyParseError::TooPrecise(trimmed.to_string()));
        }

        let units: i64 = if units_str.is_empty() {
            0
        } else {
            units_str
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(trimmed.to_string()))?
        };

        let frac: i64 = match frac_str.len() {
            0 => 0,
            1 => {
                frac_str
                    .parse::<i64>()
                    .map_err(|_| MoneyParseError::InvalidFormat(trimmed.to_string()))?
                    * 10
            }
            _ => frac_str
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(trimmed.to_string()))?,
        };

        let cents = units * 100 + frac;
        Ok(Self(if negative { -cents } else { cents }))
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    InvalidFormat(String),
    TooPrecise(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::Empty => write!(f, "amount is empty"),
            MoneyParseError::InvalidFormat(s) => write!(f, "not a valid amount: {}", s),
            MoneyParseError::TooPrecise(s) => {
                write!(f, "more than two decimal places: {}", s)
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}
