//! ISO 4217 currency codes and their display symbols.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`CurrencyCode`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// The code is not one of the supported ISO 4217 codes.
    #[error("unsupported currency code '{0}'")]
    Unsupported(String),
}

/// ISO 4217 currency codes.
///
/// The field always shows two fractional digits, whatever the currency's
/// native minor unit is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
    JPY,
    CHF,
    INR,
}

impl CurrencyCode {
    /// Every supported code, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::USD,
        Self::EUR,
        Self::GBP,
        Self::CAD,
        Self::AUD,
        Self::JPY,
        Self::CHF,
        Self::INR,
    ];

    /// Returns the three-letter ISO code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
            Self::JPY => "JPY",
            Self::CHF => "CHF",
            Self::INR => "INR",
        }
    }

    /// Returns the symbol used where this currency is the local one
    /// (e.g. `$` for CAD in Canada).
    #[must_use]
    pub const fn local_symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
            Self::JPY => "¥",
            Self::CHF => "CHF",
            Self::INR => "₹",
        }
    }

    /// Returns the symbol used outside the currency's home locale.
    ///
    /// Dollars other than USD get a country prefix so they cannot be
    /// mistaken for each other.
    #[must_use]
    pub const fn international_symbol(&self) -> &'static str {
        match self {
            Self::CAD => "CA$",
            Self::AUD => "A$",
            other => other.local_symbol(),
        }
    }

    /// Returns the symbol to display for a locale whose home currency is `home`.
    #[must_use]
    pub fn symbol_for(&self, home: Option<Self>) -> &'static str {
        if home == Some(*self) {
            self.local_symbol()
        } else {
            self.international_symbol()
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| CurrencyError::Unsupported(s.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("usd".parse::<CurrencyCode>().unwrap(), CurrencyCode::USD);
        assert_eq!(" EUR ".parse::<CurrencyCode>().unwrap(), CurrencyCode::EUR);
    }

    #[test]
    fn test_from_str_unsupported() {
        assert!(matches!(
            "XYZ".parse::<CurrencyCode>(),
            Err(CurrencyError::Unsupported(_))
        ));
    }

    #[test]
    fn test_symbol_for_home_locale() {
        assert_eq!(CurrencyCode::CAD.symbol_for(Some(CurrencyCode::CAD)), "$");
        assert_eq!(CurrencyCode::CAD.symbol_for(Some(CurrencyCode::USD)), "CA$");
        assert_eq!(CurrencyCode::USD.symbol_for(None), "$");
        assert_eq!(CurrencyCode::EUR.symbol_for(Some(CurrencyCode::USD)), "€");
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(CurrencyCode::JPY.to_string(), "JPY");
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&CurrencyCode::GBP).unwrap();
        assert_eq!(json, "\"GBP\"");
    }
}
