//! Payments received against invoices

use serde::{Deserialize, Serialize};

use core_kernel::{Amount, Identified, RecordId};

/// A payment received from a customer
///
/// Identifiers are not guaranteed unique: several payments may reference
/// the same invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Identifier of the invoice being paid
    pub id: RecordId,
    /// Amount received in minor units
    pub amount: Amount,
}

impl Payment {
    /// Creates a new payment
    ///
    /// # Arguments
    ///
    /// * `id` - Identifier of the invoice being paid
    /// * `amount` - Amount received
    pub fn new(id: RecordId, amount: Amount) -> Self {
        Self { id, amount }
    }
}

impl Identified for Payment {
    fn identifier(&self) -> RecordId {
        self.id
    }
}
