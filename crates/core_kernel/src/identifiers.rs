//! Record identifiers
//!
//! Invoices and payments share one identifier domain: a payment carries the
//! identifier of the invoice it settles. `RecordId` wraps that integer so it
//! cannot be confused with an amount.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Non-negative integer identifier of an invoice (and of the payments against it)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// Creates an identifier from its numeric value
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_decimal("record id", s).map(Self)
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<RecordId> for u64 {
    fn from(id: RecordId) -> u64 {
        id.0
    }
}

/// Capability of any record that can be ordered and looked up by identifier
///
/// The sort and search algorithms in this crate are written once against this
/// trait and apply equally to invoices and payments.
pub trait Identified {
    /// Returns the identifier used as the ordering key
    fn identifier(&self) -> RecordId;
}

impl<T: Identified + ?Sized> Identified for &T {
    fn identifier(&self) -> RecordId {
        (**self).identifier()
    }
}

/// Parses an unsigned decimal made only of ASCII digits
///
/// Signs and surrounding whitespace are rejected.
pub(crate) fn parse_decimal(kind: &'static str, raw: &str) -> Result<u64, CoreError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::parse(kind, raw));
    }
    raw.parse::<u64>().map_err(|_| CoreError::parse(kind, raw))
}
