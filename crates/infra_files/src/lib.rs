//! File Infrastructure Layer
//!
//! This crate reads invoice and payment files and writes the remaining
//! invoices back out, using a flat comma-separated text format.
//!
//! # Input Format
//!
//! ```text
//! 3
//! 1,100
//! 2,50
//! 7,1200
//! ```
//!
//! The first line holds the number of records that follow; every record line
//! is `<id>,<amount>` with both fields plain decimal integers.
//!
//! # Output Format
//!
//! One `<id>,<amount>` line per record, no count line, each terminated by the
//! platform line terminator.

pub mod error;
pub mod format;
pub mod reader;
pub mod writer;

pub use error::FileError;
pub use format::{format_line, parse_line, RecordLine, LINE_ENDING};
pub use reader::{read_records, read_records_from_path};
pub use writer::{write_records, write_records_to_path};
