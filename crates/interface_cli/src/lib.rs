//! Command Line Interface Layer
//!
//! This crate wires the file infrastructure and the billing domain into a
//! single batch run: read invoices, read payments, reconcile, write the
//! invoices still owed.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_cli::{run, RunPaths};
//! use domain_billing::ReconcileOptions;
//!
//! let paths = RunPaths::new("invoices.txt", "payments.txt", "to-collect.txt");
//! let reconciliation = run(&paths, ReconcileOptions::default())?;
//! println!("{} invoices still owed", reconciliation.remaining.len());
//! ```

pub mod config;
pub mod error;
pub mod pipeline;

pub use config::InspectorConfig;
pub use error::InspectorError;
pub use pipeline::{run, RunPaths};
