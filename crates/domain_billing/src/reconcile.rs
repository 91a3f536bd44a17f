//! Invoice/payment reconciliation
//!
//! Two strategies are available:
//!
//! - **Fast** sorts working copies of both inputs and looks each invoice's
//!   payment up by binary search, O(n log n + m log m) on average. Because the
//!   invoices are visited in sorted order, the output needs no further sorting.
//! - **Naive** scans every payment for every invoice in input order and then
//!   insertion-sorts the result, O(n·m + k²). It is kept as a reference to
//!   check the fast path against. Under [`DuplicatePaymentPolicy::AnyMatch`]
//!   it settles each invoice with the first payment carrying its identifier
//!   and ignores later ones, so `[(1, 100)]` against `[(1, 100), (1, 40)]`
//!   leaves nothing owed. A scan that kept going after a full payment would
//!   instead report `(1, 60)`; that variant is not reproduced.
//!
//! Both strategies borrow their inputs and return a new owned sequence.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, instrument};

use core_kernel::{binary_search, quicksort, Amount, Identified};
use crate::error::BillingError;
use crate::invoice::{Invoice, RemainingInvoice};
use crate::payment::Payment;
use crate::summary::{ReconciliationSummary, Settlement};

/// Algorithm used to match invoices with payments
///
/// Deserialization goes through [`FromStr`], so names are case-insensitive
/// wherever they come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum ReconcileStrategy {
    /// Sort both inputs and binary-search payments
    #[default]
    Fast,
    /// Pairwise scan followed by an insertion sort of the result
    Naive,
}

impl fmt::Display for ReconcileStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconcileStrategy::Fast => write!(f, "fast"),
            ReconcileStrategy::Naive => write!(f, "naive"),
        }
    }
}

impl FromStr for ReconcileStrategy {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fast" => Ok(ReconcileStrategy::Fast),
            "naive" => Ok(ReconcileStrategy::Naive),
            _ => Err(BillingError::UnknownStrategy(s.to_string())),
        }
    }
}

impl TryFrom<String> for ReconcileStrategy {
    type Error = BillingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Treatment of several payments carrying the same identifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum DuplicatePaymentPolicy {
    /// Apply a single matching payment. With the fast strategy which one is
    /// unspecified; with the naive strategy it is the first in input order.
    #[default]
    AnyMatch,
    /// Apply the sum of every payment sharing the identifier
    Aggregate,
}

impl fmt::Display for DuplicatePaymentPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicatePaymentPolicy::AnyMatch => write!(f, "any-match"),
            DuplicatePaymentPolicy::Aggregate => write!(f, "aggregate"),
        }
    }
}

impl FromStr for DuplicatePaymentPolicy {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any-match" | "any_match" | "any" => Ok(DuplicatePaymentPolicy::AnyMatch),
            "aggregate" => Ok(DuplicatePaymentPolicy::Aggregate),
            _ => Err(BillingError::UnknownDuplicatePolicy(s.to_string())),
        }
    }
}

impl TryFrom<String> for DuplicatePaymentPolicy {
    type Error = BillingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Options controlling a reconciliation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileOptions {
    /// Matching algorithm
    pub strategy: ReconcileStrategy,
    /// Handling of duplicate payment identifiers
    pub duplicate_payments: DuplicatePaymentPolicy,
}

impl ReconcileOptions {
    /// Sets the strategy
    pub fn with_strategy(mut self, strategy: ReconcileStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the duplicate payment policy
    pub fn with_duplicate_payments(mut self, policy: DuplicatePaymentPolicy) -> Self {
        self.duplicate_payments = policy;
        self
    }
}

/// Result of a reconciliation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reconciliation {
    /// Invoices still owed, ascending by identifier
    pub remaining: Vec<RemainingInvoice>,
    /// Counts and totals for the run
    pub summary: ReconciliationSummary,
}

/// Reconciles invoices against payments
///
/// # Invariants
///
/// - Each input invoice appears in the output at most once
/// - The output is ordered by ascending identifier
/// - The total outstanding never exceeds the total invoiced
#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    options: ReconcileOptions,
}

impl Reconciler {
    /// Creates a reconciler with the given options
    pub fn new(options: ReconcileOptions) -> Self {
        Self { options }
    }

    /// Computes the invoices still owed
    ///
    /// # Arguments
    ///
    /// * `invoices` - Outstanding invoices, identifiers unique
    /// * `payments` - Payments received, in any order
    ///
    /// # Returns
    ///
    /// The remaining invoices in ascending identifier order, with a summary
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            invoices = invoices.len(),
            payments = payments.len(),
            strategy = %self.options.strategy,
        )
    )]
    pub fn reconcile(&self, invoices: &[Invoice], payments: &[Payment]) -> Reconciliation {
        let mut summary = ReconciliationSummary::new(invoices.len(), payments.len());

        let remaining = match self.options.strategy {
            ReconcileStrategy::Fast => self.reconcile_sorted(invoices, payments, &mut summary),
            ReconcileStrategy::Naive => self.reconcile_pairwise(invoices, payments, &mut summary),
        };

        debug!(
            remaining = remaining.len(),
            unmatched = summary.unmatched,
            partially_paid = summary.partially_paid,
            settled = summary.settled,
            total_outstanding = %summary.total_outstanding,
            "Reconciliation complete"
        );

        Reconciliation { remaining, summary }
    }

    fn reconcile_sorted(
        &self,
        invoices: &[Invoice],
        payments: &[Payment],
        summary: &mut ReconciliationSummary,
    ) -> Vec<RemainingInvoice> {
        let mut invoices = invoices.to_vec();
        let mut payments = payments.to_vec();
        quicksort(&mut payments);
        quicksort(&mut invoices);

        let mut remaining = Vec::with_capacity(invoices.len());
        for invoice in &invoices {
            let paid = binary_search(invoice.id, &payments).map(|index| {
                match self.options.duplicate_payments {
                    DuplicatePaymentPolicy::AnyMatch => payments[index].amount,
                    DuplicatePaymentPolicy::Aggregate => run_total(&payments, index),
                }
            });
            apply(invoice, paid, &mut remaining, summary);
        }
        remaining
    }

    fn reconcile_pairwise(
        &self,
        invoices: &[Invoice],
        payments: &[Payment],
        summary: &mut ReconciliationSummary,
    ) -> Vec<RemainingInvoice> {
        let mut remaining = Vec::new();
        for invoice in invoices {
            let mut matching = payments.iter().filter(|p| p.id == invoice.id);
            let paid = match self.options.duplicate_payments {
                DuplicatePaymentPolicy::AnyMatch => matching.next().map(|p| p.amount),
                DuplicatePaymentPolicy::Aggregate => {
                    let mut matching = matching.peekable();
                    matching.peek().is_some().then(|| matching.map(|p| p.amount).sum::<Amount>())
                }
            };
            apply(invoice, paid, &mut remaining, summary);
        }
        insertion_sort(&mut remaining);
        remaining
    }
}

/// Reconciles with the fast strategy and default options
///
/// Returns only the remaining invoices, ascending by identifier.
pub fn reconcile(invoices: &[Invoice], payments: &[Payment]) -> Vec<RemainingInvoice> {
    Reconciler::default().reconcile(invoices, payments).remaining
}

/// Reconciles with the naive reference strategy
pub fn reconcile_naive(invoices: &[Invoice], payments: &[Payment]) -> Vec<RemainingInvoice> {
    let options = ReconcileOptions::default().with_strategy(ReconcileStrategy::Naive);
    Reconciler::new(options).reconcile(invoices, payments).remaining
}

fn apply(
    invoice: &Invoice,
    paid: Option<Amount>,
    remaining: &mut Vec<RemainingInvoice>,
    summary: &mut ReconciliationSummary,
) {
    let settlement = Settlement::of(invoice.amount, paid);
    summary.record(invoice.amount, settlement);
    match settlement {
        Settlement::Unmatched => remaining.push(*invoice),
        Settlement::PartiallyPaid { remaining: owed } => remaining.push(invoice.with_amount(owed)),
        Settlement::Settled => {}
    }
}

/// Sums the run of equal identifiers around `index` in a sorted slice
fn run_total(sorted: &[Payment], index: usize) -> Amount {
    let id = sorted[index].id;
    let start = sorted[..index]
        .iter()
        .rposition(|p| p.id != id)
        .map_or(0, |last_other| last_other + 1);
    let end = sorted[index..]
        .iter()
        .position(|p| p.id != id)
        .map_or(sorted.len(), |offset| index + offset);
    sorted[start..end].iter().map(|p| p.amount).sum()
}

fn insertion_sort<T: Identified>(records: &mut [T]) {
    for unsorted in 1..records.len() {
        let mut position = unsorted;
        while position > 0 && records[position - 1].identifier() > records[position].identifier() {
            records.swap(position - 1, position);
            position -= 1;
        }
    }
}
