//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! reconciliation test suite.
//!
//! # Modules
//!
//! - `fixtures`: Record constructors and the reference reconciliation scenarios
//! - `assertions`: Custom assertion helpers for ordered record sequences
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use assertions::*;
pub use generators::*;
