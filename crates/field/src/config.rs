//! Field configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CURRENCY_FIELD_LOCALE` - Locale tag (default: en-US)
//! - `CURRENCY_FIELD_CURRENCY` - ISO 4217 currency code (default: USD)

use currency_field_core::{CurrencyCode, Locale};
use thiserror::Error;

/// Environment variable holding the locale tag.
pub const LOCALE_VAR: &str = "CURRENCY_FIELD_LOCALE";
/// Environment variable holding the currency code.
pub const CURRENCY_VAR: &str = "CURRENCY_FIELD_CURRENCY";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Initial locale and currency for a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldConfig {
    /// Locale used to format the amount
    pub locale: Locale,
    /// Currency shown next to the amount
    pub currency: CurrencyCode,
}

impl FieldConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let locale = match lookup(LOCALE_VAR) {
            Some(value) => Locale::parse(&value)
                .map_err(|e| ConfigError::InvalidEnvVar(LOCALE_VAR.to_string(), e.to_string()))?,
            None => Locale::default(),
        };
        let currency = match lookup(CURRENCY_VAR) {
            Some(value) => value
                .parse::<CurrencyCode>()
                .map_err(|e| ConfigError::InvalidEnvVar(CURRENCY_VAR.to_string(), e.to_string()))?,
            None => CurrencyCode::default(),
        };

        Ok(Self { locale, currency })
    }
}
