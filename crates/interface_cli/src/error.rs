//! Run error handling

use std::path::PathBuf;

use infra_files::FileError;
use thiserror::Error;

/// Errors that halt a reconciliation run
#[derive(Debug, Error)]
pub enum InspectorError {
    #[error("Failed to read invoices from {}", .path.display())]
    ReadInvoices {
        path: PathBuf,
        #[source]
        source: FileError,
    },

    #[error("Failed to read payments from {}", .path.display())]
    ReadPayments {
        path: PathBuf,
        #[source]
        source: FileError,
    },

    #[error("Failed to write remaining invoices to {}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: FileError,
    },
}
