//! Core Kernel - Foundational types and algorithms for invoice reconciliation
//!
//! This crate provides the building blocks used across all domain modules:
//! - Record identifiers and integer amounts in minor units
//! - The `Identified` capability and the sort/search algorithms written against it
//! - The `KeyedRecord` contract for string-keyed entities (hash, equality, ordering)

pub mod amount;
pub mod identifiers;
pub mod keyed;
pub mod search;
pub mod sorting;
pub mod error;

pub use amount::Amount;
pub use identifiers::{Identified, RecordId};
pub use keyed::{polynomial_hash, KeyedRecord};
pub use search::{binary_search, binary_search_range};
pub use sorting::{partition, quicksort, quicksort_range};
pub use error::CoreError;
