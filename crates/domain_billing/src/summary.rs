//! Reconciliation summary
//!
//! Counts and totals describing one reconciliation run.

use serde::{Deserialize, Serialize};

use core_kernel::Amount;

/// How a single invoice came out of reconciliation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Settlement {
    /// No payment references the invoice
    Unmatched,
    /// A payment covered part of the invoice
    PartiallyPaid { remaining: Amount },
    /// Payments covered the invoice in full or more
    Settled,
}

impl Settlement {
    /// Applies an optional payment to an invoice amount
    pub(crate) fn of(owed: Amount, paid: Option<Amount>) -> Self {
        match paid {
            None => Settlement::Unmatched,
            Some(paid) => match owed.checked_sub(paid) {
                Some(remaining) if !remaining.is_zero() => {
                    Settlement::PartiallyPaid { remaining }
                }
                _ => Settlement::Settled,
            },
        }
    }
}

/// Aggregate figures for one reconciliation run
///
/// # Invariants
///
/// - `unmatched + partially_paid + settled == invoice_count`
/// - `total_outstanding <= total_invoiced`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationSummary {
    /// Number of invoices considered
    pub invoice_count: usize,
    /// Number of payments considered
    pub payment_count: usize,
    /// Invoices without any payment
    pub unmatched: usize,
    /// Invoices with a payment smaller than the amount owed
    pub partially_paid: usize,
    /// Invoices paid in full or overpaid
    pub settled: usize,
    /// Sum of all invoice amounts
    pub total_invoiced: Amount,
    /// Sum of all remaining invoice amounts
    pub total_outstanding: Amount,
}

impl ReconciliationSummary {
    pub(crate) fn new(invoice_count: usize, payment_count: usize) -> Self {
        Self {
            invoice_count,
            payment_count,
            ..Self::default()
        }
    }

    /// Records the outcome of one invoice
    pub(crate) fn record(&mut self, owed: Amount, settlement: Settlement) {
        self.total_invoiced = self.total_invoiced.saturating_add(owed);
        match settlement {
            Settlement::Unmatched => {
                self.unmatched += 1;
                self.total_outstanding = self.total_outstanding.saturating_add(owed);
            }
            Settlement::PartiallyPaid { remaining } => {
                self.partially_paid += 1;
                self.total_outstanding = self.total_outstanding.saturating_add(remaining);
            }
            Settlement::Settled => self.settled += 1,
        }
    }

    /// Number of invoices that remain owed
    pub fn remaining_count(&self) -> usize {
        self.unmatched + self.partially_paid
    }
}
