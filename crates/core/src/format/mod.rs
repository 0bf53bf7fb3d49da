//! Locale-aware currency formatting.
//!
//! The field controller only talks to the [`CurrencyFormatter`] trait, so a
//! host can plug in whatever locale data it already ships. [`LocaleFormatter`]
//! is the built-in implementation backed by a small table of locale rules.

mod locale_formatter;
mod rules;

use rust_decimal::Decimal;

use crate::types::{Amount, CurrencyCode, Locale};

pub use locale_formatter::LocaleFormatter;
pub use rules::{Grouping, LocaleRules, SymbolPlacement};

/// Errors returned while formatting an amount.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// No formatting rules exist for the locale.
    #[error("unsupported locale '{0}'")]
    UnsupportedLocale(String),
}

/// Errors returned by the strict localized parse.
///
/// The live-typing path never produces these; they only surface when a
/// preformatted string is validated.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input is blank.
    #[error("number cannot be empty")]
    Empty,
    /// The input is not a well-formed localized number.
    #[error("'{input}' is not a valid localized number")]
    Malformed {
        /// The offending input, unmodified.
        input: String,
    },
    /// No parsing rules exist for the locale.
    #[error("unsupported locale '{0}'")]
    UnsupportedLocale(String),
}

/// Formats amounts as currency strings and parses them back.
pub trait CurrencyFormatter {
    /// Format `amount` for `locale` and `currency` with exactly
    /// `fraction_digits` fractional digits and locale grouping.
    ///
    /// # Errors
    ///
    /// Returns an error if the locale is not supported.
    fn format(
        &self,
        amount: &Amount,
        locale: &Locale,
        currency: CurrencyCode,
        fraction_digits: u32,
    ) -> Result<String, FormatError>;

    /// Returns a variant of this formatter whose currency symbol is `""`.
    ///
    /// Spacing that separates the symbol from the number is kept, exactly
    /// as a symbol-table replacement would leave it.
    #[must_use]
    fn with_symbol_removed(&self) -> Self
    where
        Self: Sized;

    /// Strictly parse a localized number without currency symbol.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Malformed`] carrying the input if it is not a
    /// well-formed number for the locale.
    fn parse_number(&self, text: &str, locale: &Locale) -> Result<Decimal, ParseError>;

    /// Strictly parse text produced by [`CurrencyFormatter::format`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Malformed`] carrying the input if it is not a
    /// well-formed currency string for the locale and currency.
    fn parse(
        &self,
        text: &str,
        locale: &Locale,
        currency: CurrencyCode,
    ) -> Result<Decimal, ParseError>;
}
