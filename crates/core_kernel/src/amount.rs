//! Integer amounts in minor units
//!
//! Money is never represented as floating point. An `Amount` is a count of
//! minor units (cents, for example) and cannot be negative.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::str::FromStr;

use crate::error::CoreError;
use crate::identifiers::parse_decimal;

/// A non-negative monetary amount in minor units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    /// The zero amount
    pub const ZERO: Amount = Amount(0);

    /// Creates an amount from a count of minor units
    pub const fn from_minor(minor_units: u64) -> Self {
        Self(minor_units)
    }

    /// Returns the count of minor units
    pub const fn minor_units(&self) -> u64 {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Subtraction that returns `None` instead of going below zero
    pub fn checked_sub(self, other: Amount) -> Option<Amount> {
        self.0.checked_sub(other.0).map(Amount)
    }

    /// Addition clamped at the largest representable amount
    pub fn saturating_add(self, other: Amount) -> Amount {
        Amount(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Amount {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_decimal("amount", s).map(Self)
    }
}

impl From<u64> for Amount {
    fn from(minor_units: u64) -> Self {
        Self(minor_units)
    }
}

/// Totals saturate rather than wrap
impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, Amount::saturating_add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
