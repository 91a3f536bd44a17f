//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for record sequences that give
//! more meaningful error messages than standard assertions.

use std::fmt::Debug;

use core_kernel::{Amount, Identified};
use domain_billing::{Invoice, RemainingInvoice};

/// Asserts that identifiers strictly increase along the sequence
///
/// # Panics
///
/// Panics at the first pair out of order or sharing an identifier
pub fn assert_strictly_ascending<T: Identified + Debug>(records: &[T]) {
    for pair in records.windows(2) {
        assert!(
            pair[0].identifier() < pair[1].identifier(),
            "Records not strictly ascending: {:?} followed by {:?}",
            pair[0],
            pair[1]
        );
    }
}

/// Asserts that identifiers never decrease along the sequence
pub fn assert_non_decreasing<T: Identified + Debug>(records: &[T]) {
    for pair in records.windows(2) {
        assert!(
            pair[0].identifier() <= pair[1].identifier(),
            "Records out of order: {:?} followed by {:?}",
            pair[0],
            pair[1]
        );
    }
}

/// Asserts that reconciliation did not create money
///
/// # Arguments
///
/// * `remaining` - Output of a reconciliation
/// * `invoices` - The invoices it was computed from
///
/// # Panics
///
/// Panics if the remaining total exceeds the invoiced total, or if any
/// remaining invoice owes more than the original invoice with its identifier
pub fn assert_outstanding_within_invoiced(remaining: &[RemainingInvoice], invoices: &[Invoice]) {
    let outstanding: Amount = remaining.iter().map(|i| i.amount).sum();
    let invoiced: Amount = invoices.iter().map(|i| i.amount).sum();
    assert!(
        outstanding <= invoiced,
        "Outstanding total {} exceeds invoiced total {}",
        outstanding,
        invoiced
    );

    for owed in remaining {
        let original = invoices
            .iter()
            .find(|i| i.id == owed.id)
            .unwrap_or_else(|| panic!("Remaining invoice {:?} has no source invoice", owed));
        assert!(
            owed.amount <= original.amount,
            "Remaining {:?} owes more than original {:?}",
            owed,
            original
        );
    }
}
