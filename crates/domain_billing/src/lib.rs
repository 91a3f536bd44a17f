//! Billing Domain - Invoice and Payment Reconciliation
//!
//! This crate computes which invoices are still owed once the payments
//! received so far have been applied.
//!
//! # Reconciliation Rules
//!
//! For every invoice, the payment carrying the same identifier is looked up:
//! - No payment: the invoice remains owed in full
//! - Payment smaller than the invoice: the difference remains owed
//! - Payment equal to or larger than the invoice: the invoice is settled
//!
//! The remaining invoices are always returned in ascending identifier order.
//!
//! # Example
//!
//! ```rust
//! use core_kernel::{Amount, RecordId};
//! use domain_billing::{reconcile, Invoice, Payment};
//!
//! let invoices = vec![
//!     Invoice::new(RecordId::new(1), Amount::from_minor(100)),
//!     Invoice::new(RecordId::new(2), Amount::from_minor(50)),
//! ];
//! let payments = vec![Payment::new(RecordId::new(1), Amount::from_minor(100))];
//!
//! let remaining = reconcile(&invoices, &payments);
//! assert_eq!(remaining, vec![Invoice::new(RecordId::new(2), Amount::from_minor(50))]);
//! ```

pub mod invoice;
pub mod payment;
pub mod reconcile;
pub mod summary;
pub mod error;

pub use invoice::{Invoice, RemainingInvoice};
pub use payment::Payment;
pub use reconcile::{
    reconcile, reconcile_naive, DuplicatePaymentPolicy, ReconcileOptions, ReconcileStrategy,
    Reconciler, Reconciliation,
};
pub use summary::ReconciliationSummary;
pub use error::BillingError;
