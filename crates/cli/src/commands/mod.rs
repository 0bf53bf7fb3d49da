//! Command implementations.

pub mod format;
pub mod locales;
pub mod parse;
pub mod typing;

use currency_field::{ConfigError, CurrencyFieldController, FieldConfig, FieldError, MemoryHost};
use currency_field_core::{
    AmountError, CurrencyCode, CurrencyError, Locale, LocaleError, LocaleFormatter,
};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Environment configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// `--locale` is not a locale tag.
    #[error("Invalid locale: {0}")]
    Locale(#[from] LocaleError),

    /// `--currency` is not a supported code.
    #[error("Invalid currency: {0}")]
    Currency(#[from] CurrencyError),

    /// Amount argument is not a valid amount.
    #[error("Invalid amount: {0}")]
    Amount(#[from] AmountError),

    /// The field rejected an operation.
    #[error(transparent)]
    Field(#[from] FieldError),

    /// JSON output failed.
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Options {
    pub config: FieldConfig,
    pub json: bool,
}

impl Options {
    /// Load the environment configuration and apply command-line overrides.
    pub fn resolve(
        locale: Option<&str>,
        currency: Option<&str>,
        json: bool,
    ) -> Result<Self, CommandError> {
        let mut config = FieldConfig::from_env()?;
        if let Some(tag) = locale {
            config.locale = Locale::parse(tag)?;
        }
        if let Some(code) = currency {
            config.currency = code.parse::<CurrencyCode>()?;
        }

        tracing::debug!(
            locale = %config.locale,
            currency = %config.currency,
            "resolved field configuration"
        );
        Ok(Self { config, json })
    }

    /// Build a field backed by an in-memory host.
    pub fn field(&self) -> Result<CurrencyFieldController<MemoryHost>, CommandError> {
        Ok(CurrencyFieldController::from_config(
            MemoryHost::new(),
            LocaleFormatter::new(),
            &self.config,
        )?)
    }

    /// Print `value` as pretty JSON, or print `text` lines.
    pub fn emit<T: Serialize>(&self, value: &T, text: &[String]) -> Result<(), CommandError> {
        if self.json {
            print_lines(&[serde_json::to_string_pretty(value)?]);
        } else {
            print_lines(text);
        }
        Ok(())
    }
}

#[allow(clippy::print_stdout)]
fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

/// Show a caret inside `text` as `|`.
pub fn with_caret(text: &str, cursor: usize) -> String {
    let (before, after) = text.split_at_checked(cursor).unwrap_or((text, ""));
    format!("{before}|{after}")
}
