//! Party Domain
//!
//! Directory entries for people reachable by phone. A [`Person`] is identified
//! by phone number alone: two entries with the same number are the same
//! person regardless of the names recorded, so entries can be stored in hash
//! maps and ordered containers keyed on the number.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashSet;
//! use domain_party::Person;
//!
//! let mut directory = HashSet::new();
//! directory.insert(Person::with_name("+358401234567", "Alice", "Virtanen"));
//!
//! // Same number, different name: already present
//! assert!(!directory.insert(Person::with_name("+358401234567", "A.", "V.")));
//! assert!(directory.contains(&Person::new("+358401234567")));
//! ```

pub mod person;

pub use person::Person;
