//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating reconciliation inputs that
//! maintain the domain preconditions (unique invoice identifiers,
//! non-negative amounts).

use proptest::prelude::*;

use core_kernel::{Amount, RecordId};
use domain_billing::{Invoice, Payment};

/// Identifiers below this bound may be shared by invoices and payments
const MATCHABLE_ID_LIMIT: u64 = 5_000;

/// Strategy for generating identifiers
pub fn record_id_strategy() -> impl Strategy<Value = RecordId> {
    (0u64..10_000u64).prop_map(RecordId::new)
}

/// Strategy for generating amounts in minor units
pub fn amount_strategy() -> impl Strategy<Value = Amount> {
    (0u64..1_000_000u64).prop_map(Amount::from_minor)
}

/// Strategy for generating invoices with unique identifiers, in random order
pub fn invoice_set_strategy(max_len: usize) -> impl Strategy<Value = Vec<Invoice>> {
    prop::collection::btree_map(0u64..MATCHABLE_ID_LIMIT, amount_strategy(), 0..max_len)
        .prop_map(|entries| {
            entries
                .into_iter()
                .map(|(id, amount)| Invoice::new(RecordId::new(id), amount))
                .collect::<Vec<_>>()
        })
        .prop_shuffle()
}

/// Strategy for generating payments that may share identifiers
pub fn payments_with_duplicates_strategy(max_len: usize) -> impl Strategy<Value = Vec<Payment>> {
    prop::collection::vec((0u64..64u64, amount_strategy()), 0..max_len).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(id, amount)| Payment::new(RecordId::new(id), amount))
            .collect()
    })
}

/// Strategy for generating a reconciliation input with unique payment identifiers
///
/// Some invoices receive a payment (smaller, equal or larger than the amount
/// owed), some receive none, and a few payments reference no invoice at all.
pub fn reconciliation_input_strategy(
    max_len: usize,
) -> impl Strategy<Value = (Vec<Invoice>, Vec<Payment>)> {
    let matched = prop::collection::btree_map(
        0u64..MATCHABLE_ID_LIMIT,
        (amount_strategy(), prop::option::of(amount_strategy())),
        0..max_len,
    );
    let orphans = prop::collection::btree_map(
        MATCHABLE_ID_LIMIT..2 * MATCHABLE_ID_LIMIT,
        amount_strategy(),
        0..8,
    );

    (matched, orphans)
        .prop_map(|(matched, orphans)| {
            let mut invoices = Vec::with_capacity(matched.len());
            let mut payments = Vec::new();
            for (id, (owed, paid)) in matched {
                invoices.push(Invoice::new(RecordId::new(id), owed));
                if let Some(paid) = paid {
                    payments.push(Payment::new(RecordId::new(id), paid));
                }
            }
            for (id, paid) in orphans {
                payments.push(Payment::new(RecordId::new(id), paid));
            }
            (invoices, payments)
        })
        .prop_flat_map(|(invoices, payments)| {
            (Just(invoices).prop_shuffle(), Just(payments).prop_shuffle())
        })
}

/// Strategy for generating phone numbers
pub fn phone_strategy() -> impl Strategy<Value = String> {
    (100u32..999u32, 100u32..999u32, 1000u32..9999u32)
        .prop_map(|(area, prefix, line)| format!("+1-{}-{}-{}", area, prefix, line))
}

/// Strategy for generating names
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,10}".prop_map(|s| s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    proptest! {
        #[test]
        fn invoice_ids_are_unique(invoices in invoice_set_strategy(64)) {
            let ids: BTreeSet<_> = invoices.iter().map(|i| i.id).collect();
            prop_assert_eq!(ids.len(), invoices.len());
        }

        #[test]
        fn payment_ids_are_unique((_, payments) in reconciliation_input_strategy(64)) {
            let ids: BTreeSet<_> = payments.iter().map(|p| p.id).collect();
            prop_assert_eq!(ids.len(), payments.len());
        }

        #[test]
        fn phone_has_expected_shape(phone in phone_strategy()) {
            prop_assert!(phone.starts_with("+1-"));
            prop_assert_eq!(phone.len(), 15);
        }
    }
}
