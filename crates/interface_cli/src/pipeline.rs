//! The batch run: read, reconcile, write

use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use domain_billing::{Invoice, Payment, ReconcileOptions, Reconciler, Reconciliation};
use infra_files::{read_records_from_path, write_records_to_path};

use crate::error::InspectorError;

/// Files taking part in one run
#[derive(Debug, Clone)]
pub struct RunPaths {
    /// Invoices to reconcile
    pub invoices: PathBuf,
    /// Payments received
    pub payments: PathBuf,
    /// Destination of the invoices still owed
    pub output: PathBuf,
}

impl RunPaths {
    /// Creates the set of run paths
    pub fn new(
        invoices: impl Into<PathBuf>,
        payments: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            invoices: invoices.into(),
            payments: payments.into(),
            output: output.into(),
        }
    }
}

/// Runs one reconciliation over files
///
/// Both inputs are read completely before anything is reconciled; a failure
/// on either leaves the output file untouched.
///
/// # Errors
///
/// Returns the first read or write failure, tagged with the file involved
#[instrument(
    skip_all,
    fields(strategy = %options.strategy, duplicates = %options.duplicate_payments)
)]
pub fn run(paths: &RunPaths, options: ReconcileOptions) -> Result<Reconciliation, InspectorError> {
    let invoices: Vec<Invoice> = read_records_from_path(&paths.invoices).map_err(|source| {
        InspectorError::ReadInvoices {
            path: paths.invoices.clone(),
            source,
        }
    })?;
    let payments: Vec<Payment> = read_records_from_path(&paths.payments).map_err(|source| {
        InspectorError::ReadPayments {
            path: paths.payments.clone(),
            source,
        }
    })?;

    let reconciliation = Reconciler::new(options).reconcile(&invoices, &payments);

    write_output(&paths.output, &reconciliation)?;

    info!(
        invoices = reconciliation.summary.invoice_count,
        payments = reconciliation.summary.payment_count,
        remaining = reconciliation.remaining.len(),
        outstanding = %reconciliation.summary.total_outstanding,
        "Reconciliation run finished"
    );
    Ok(reconciliation)
}

fn write_output(path: &Path, reconciliation: &Reconciliation) -> Result<(), InspectorError> {
    write_records_to_path(path, &reconciliation.remaining).map_err(|source| {
        InspectorError::WriteOutput {
            path: path.to_path_buf(),
            source,
        }
    })
}
