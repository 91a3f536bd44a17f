//! Invoice Inspector - Reconciliation Binary
//!
//! Reads a file of outstanding invoices and a file of received payments and
//! writes the invoices still owed, ascending by identifier.
//!
//! # Usage
//!
//! ```bash
//! # Reconcile with the default (fast) strategy
//! cargo run --bin invoice-inspector -- invoices.txt payments.txt to-collect.txt
//!
//! # Reference strategy, summing payments that share an invoice, printing a summary
//! cargo run --bin invoice-inspector -- invoices.txt payments.txt to-collect.txt \
//!     --strategy naive --duplicates aggregate --summary
//! ```
//!
//! # Environment Variables
//!
//! * `INSPECTOR_STRATEGY` - `fast` or `naive` (default: fast)
//! * `INSPECTOR_DUPLICATE_PAYMENTS` - `any-match` or `aggregate` (default: any-match)
//! * `INSPECTOR_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//!
//! Command line flags take precedence over the environment.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use domain_billing::{DuplicatePaymentPolicy, ReconcileStrategy};
use interface_cli::{run, InspectorConfig, RunPaths};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Reconcile invoices against payments and list what is still owed
#[derive(Debug, Parser)]
#[command(name = "invoice-inspector", version, about)]
struct Cli {
    /// File of outstanding invoices
    invoices: PathBuf,

    /// File of received payments
    payments: PathBuf,

    /// File to write the invoices still owed to
    output: PathBuf,

    /// Matching strategy: fast or naive
    #[arg(long)]
    strategy: Option<ReconcileStrategy>,

    /// Duplicate payment handling: any-match or aggregate
    #[arg(long)]
    duplicates: Option<DuplicatePaymentPolicy>,

    /// Print the run summary as JSON on stdout
    #[arg(long)]
    summary: bool,

    /// Log level: trace, debug, info, warn, error
    #[arg(long)]
    log_level: Option<String>,
}

/// Main entry point for the inspector.
///
/// Loads configuration, initializes logging and performs one run.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded from the environment
/// - Either input file cannot be read or parsed
/// - The output file cannot be written
fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = InspectorConfig::from_env()
        .context("Failed to load INSPECTOR_* configuration")?
        .with_overrides(cli.strategy, cli.duplicates, cli.log_level.clone());

    init_tracing(&config.log_level);

    tracing::info!(
        invoices = %cli.invoices.display(),
        payments = %cli.payments.display(),
        output = %cli.output.display(),
        "Starting reconciliation"
    );

    let paths = RunPaths::new(cli.invoices, cli.payments, cli.output);
    let reconciliation = run(&paths, config.reconcile_options())?;

    if cli.summary {
        let json = serde_json::to_string_pretty(&reconciliation.summary)
            .context("Failed to serialize summary")?;
        println!("{json}");
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr
/// so stdout stays free for the summary.
///
/// # Arguments
///
/// * `log_level` - The minimum log level to output (trace, debug, info, warn, error)
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
