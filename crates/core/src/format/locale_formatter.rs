//! Built-in table-driven formatter.

use core::str::FromStr;

use rust_decimal::Decimal;

use super::rules::LocaleRules;
use super::{CurrencyFormatter, FormatError, ParseError};
use crate::types::{Amount, CurrencyCode, Locale};

/// Currency formatter backed by [`LocaleRules`].
///
/// ## Examples
///
/// ```
/// use currency_field_core::{Amount, CurrencyCode, CurrencyFormatter, Locale, LocaleFormatter};
///
/// let formatter = LocaleFormatter::new();
/// let amount = Amount::from_cents(123_456);
///
/// let us = Locale::parse("en-US").unwrap();
/// assert_eq!(formatter.format(&amount, &us, CurrencyCode::USD, 2).unwrap(), "$1,234.56");
///
/// let de = Locale::parse("de-DE").unwrap();
/// assert_eq!(
///     formatter.format(&amount, &de, CurrencyCode::EUR, 2).unwrap(),
///     "1.234,56\u{a0}€"
/// );
/// assert_eq!(
///     formatter.with_symbol_removed().format(&amount, &de, CurrencyCode::EUR, 2).unwrap(),
///     "1.234,56\u{a0}"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleFormatter {
    /// Replaces the currency's own symbol when set.
    symbol_override: Option<String>,
}

impl LocaleFormatter {
    /// Create a formatter that uses each currency's own symbol.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            symbol_override: None,
        }
    }

    /// Create a formatter that shows `symbol` for every currency.
    #[must_use]
    pub fn with_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol_override: Some(symbol.into()),
        }
    }

    /// Every locale tag with built-in rules.
    pub fn supported_locales() -> impl Iterator<Item = &'static str> {
        LocaleRules::tags()
    }

    fn symbol<'a>(&'a self, rules: &LocaleRules, currency: CurrencyCode) -> &'a str {
        self.symbol_override
            .as_deref()
            .unwrap_or_else(|| currency.symbol_for(rules.home_currency))
    }

    fn rules_for(locale: &Locale) -> Result<&'static LocaleRules, FormatError> {
        LocaleRules::lookup(locale).ok_or_else(|| FormatError::UnsupportedLocale(locale.to_string()))
    }
}

impl CurrencyFormatter for LocaleFormatter {
    fn format(
        &self,
        amount: &Amount,
        locale: &Locale,
        currency: CurrencyCode,
        fraction_digits: u32,
    ) -> Result<String, FormatError> {
        let rules = Self::rules_for(locale)?;

        let plain = amount.to_fixed_string(fraction_digits);
        let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), ""));

        let mut number = rules.grouping.apply(integer, rules.group);
        if !fraction.is_empty() {
            number.push(rules.decimal);
            number.push_str(fraction);
        }

        Ok(rules
            .placement
            .apply(&number, self.symbol(rules, currency)))
    }

    fn with_symbol_removed(&self) -> Self {
        Self::with_symbol("")
    }

    fn parse_number(&self, text: &str, locale: &Locale) -> Result<Decimal, ParseError> {
        let rules = LocaleRules::lookup(locale)
            .ok_or_else(|| ParseError::UnsupportedLocale(locale.to_string()))?;

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Empty);
        }

        canonical_number(trimmed, rules)
            .and_then(|canonical| Decimal::from_str(&canonical).ok())
            .ok_or_else(|| ParseError::Malformed {
                input: text.to_owned(),
            })
    }

    fn parse(
        &self,
        text: &str,
        locale: &Locale,
        currency: CurrencyCode,
    ) -> Result<Decimal, ParseError> {
        let rules = LocaleRules::lookup(locale)
            .ok_or_else(|| ParseError::UnsupportedLocale(locale.to_string()))?;

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Empty);
        }

        let symbol = self.symbol(rules, currency);
        let number = if symbol.is_empty() {
            trimmed
        } else {
            trimmed
                .strip_prefix(symbol)
                .or_else(|| trimmed.strip_suffix(symbol))
                .unwrap_or(trimmed)
        };

        self.parse_number(number, locale)
            .map_err(|err| match err {
                ParseError::Empty | ParseError::Malformed { .. } => ParseError::Malformed {
                    input: text.to_owned(),
                },
                other @ ParseError::UnsupportedLocale(_) => other,
            })
    }
}

/// Rewrite a localized number as a plain `1234.56` string.
///
/// Group separators must sit between digits of the integer part; at most
/// one decimal separator is allowed. Returns `None` for anything else.
fn canonical_number(text: &str, rules: &LocaleRules) -> Option<String> {
    let mut canonical = String::with_capacity(text.len());
    let mut seen_decimal = false;
    let mut prev_digit = false;
    let mut any_digit = false;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch.is_ascii_digit() {
            canonical.push(ch);
            prev_digit = true;
            any_digit = true;
        } else if ch == rules.decimal && !seen_decimal {
            if canonical.is_empty() {
                canonical.push('0');
            }
            canonical.push('.');
            seen_decimal = true;
            prev_digit = false;
        } else if rules.is_group_separator(ch)
            && !seen_decimal
            && prev_digit
            && chars.peek().is_some_and(char::is_ascii_digit)
        {
            prev_digit = false;
        } else {
            return None;
        }
    }

    if !any_digit {
        return None;
    }
    if canonical.ends_with('.') {
        canonical.pop();
    }
    Some(canonical)
}
