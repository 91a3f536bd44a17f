//! Run configuration

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use domain_billing::{DuplicatePaymentPolicy, ReconcileOptions, ReconcileStrategy};

/// Prefix of the environment variables read by [`InspectorConfig::from_env`]
pub const ENV_PREFIX: &str = "INSPECTOR";

/// Inspector configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InspectorConfig {
    /// Matching algorithm
    pub strategy: ReconcileStrategy,
    /// Handling of payments sharing an identifier
    pub duplicate_payments: DuplicatePaymentPolicy,
    /// Log level
    pub log_level: String,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            strategy: ReconcileStrategy::default(),
            duplicate_payments: DuplicatePaymentPolicy::default(),
            log_level: "info".to_string(),
        }
    }
}

impl InspectorConfig {
    /// Loads configuration from `INSPECTOR_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads configuration from the given environment source over defaults
    pub fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    /// Replaces settings given explicitly on the command line
    pub fn with_overrides(
        mut self,
        strategy: Option<ReconcileStrategy>,
        duplicate_payments: Option<DuplicatePaymentPolicy>,
        log_level: Option<String>,
    ) -> Self {
        if let Some(strategy) = strategy {
            self.strategy = strategy;
        }
        if let Some(policy) = duplicate_payments {
            self.duplicate_payments = policy;
        }
        if let Some(level) = log_level {
            self.log_level = level;
        }
        self
    }

    /// Returns the reconciliation options described by this configuration
    pub fn reconcile_options(&self) -> ReconcileOptions {
        ReconcileOptions::default()
            .with_strategy(self.strategy)
            .with_duplicate_payments(self.duplicate_payments)
    }
}
