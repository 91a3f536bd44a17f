//! Billing domain errors

use thiserror::Error;

/// Errors that can occur in the billing domain
#[derive(Debug, Error)]
pub enum BillingError {
    /// Unrecognized reconciliation strategy name
    #[error("Unknown reconciliation strategy: {0}")]
    UnknownStrategy(String),

    /// Unrecognized duplicate payment policy name
    #[error("Unknown duplicate payment policy: {0}")]
    UnknownDuplicatePolicy(String),
}
