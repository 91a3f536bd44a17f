//! Invoices
//!
//! An invoice records an amount owed under a unique identifier.

use serde::{Deserialize, Serialize};

use core_kernel::{Amount, Identified, RecordId};

/// An amount owed by a customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice identifier, unique within one reconciliation run
    pub id: RecordId,
    /// Amount owed in minor units
    pub amount: Amount,
}

/// An invoice still owed after reconciliation
///
/// Shares the shape of [`Invoice`]; its amount is what remains unpaid.
pub type RemainingInvoice = Invoice;

impl Invoice {
    /// Creates a new invoice
    ///
    /// # Arguments
    ///
    /// * `id` - Invoice identifier
    /// * `amount` - Amount owed
    pub fn new(id: RecordId, amount: Amount) -> Self {
        Self { id, amount }
    }

    /// Returns a copy of this invoice carrying a different amount
    pub fn with_amount(&self, amount: Amount) -> Self {
        Self { id: self.id, amount }
    }
}

impl Identified for Invoice {
    fn identifier(&self) -> RecordId {
        self.id
    }
}
