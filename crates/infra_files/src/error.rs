//! File error types
//!
//! This module defines the errors that can occur while reading or writing
//! record files. None of them are recovered from: a failed read halts the run
//! before any reconciliation happens.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during record file operations
#[derive(Debug, Error)]
pub enum FileError {
    /// The file could not be opened or created
    #[error("Cannot access {}: {source}", .path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading or writing the stream failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The count line is missing, empty, or not a number
    #[error("Malformed header: {}", describe_header(.raw))]
    MalformedHeader { raw: String },

    /// A data line is not two comma-separated decimal integers
    #[error("Malformed record on line {line} ('{raw}'): {reason}")]
    MalformedRecord {
        line: usize,
        raw: String,
        reason: String,
    },

    /// The number of data lines differs from the count line
    #[error("Header declares {declared} records but {actual} were present")]
    CountMismatch { declared: usize, actual: usize },
}

fn describe_header(raw: &str) -> String {
    if raw.is_empty() {
        "missing or empty record count".to_string()
    } else {
        format!("'{}' is not a record count", raw)
    }
}
