//! Application configuration management.

use serde::{Deserialize, Serialize};

use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Ledger computation settings.
    #[serde(default)]
    pub ledger: LedgerConfig,
}

/// How strictly expense invariants are checked before aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Reject negative amounts only. Custom splits may not sum to the total.
    #[default]
    Lenient,
    /// Additionally require splits to sum to the expense total and at most
    /// one self-share for the payer.
    Strict,
}

/// Ledger configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LedgerConfig {
    /// Currency whose minor unit amounts are counted in.
    #[serde(default)]
    pub currency: Currency,
    /// Expense validation mode.
    #[serde(default)]
    pub validation_mode: ValidationMode,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SPLITLEDGER").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
