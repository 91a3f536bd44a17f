//! Core error types used across the system

use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid range {low}..={high} for slice of length {len}")]
    InvalidRange {
        low: usize,
        high: usize,
        len: usize,
    },

    #[error("Cannot parse {kind} from '{raw}'")]
    Parse {
        kind: &'static str,
        raw: String,
    },
}

impl CoreError {
    pub fn parse(kind: &'static str, raw: impl Into<String>) -> Self {
        CoreError::Parse {
            kind,
            raw: raw.into(),
        }
    }
}
