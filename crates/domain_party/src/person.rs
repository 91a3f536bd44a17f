//! Person entity keyed by phone number

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use core_kernel::KeyedRecord;

/// A person listed in a phone directory
///
/// Equality, hashing and ordering all derive from the phone number through
/// [`KeyedRecord`]; the names are informational only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    phone_number: String,
    first_name: Option<String>,
    last_name: Option<String>,
}

impl Person {
    /// Creates a person known only by phone number
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
            first_name: None,
            last_name: None,
        }
    }

    /// Creates a person with a first and last name
    pub fn with_name(
        phone_number: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            phone_number: phone_number.into(),
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
        }
    }

    /// Returns the phone number
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Returns the first name, if known
    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    /// Returns the last name, if known
    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    /// Returns "first last", leaving out unknown parts
    pub fn name(&self) -> String {
        [self.first_name(), self.last_name()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl KeyedRecord for Person {
    fn key(&self) -> &str {
        &self.phone_number
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.key_eq(other)
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.key_hash());
    }
}

impl PartialOrd for Person {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Person {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key_cmp(other)
    }
}
