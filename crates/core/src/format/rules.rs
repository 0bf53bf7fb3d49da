//! Per-locale separator, grouping and symbol placement rules.

use crate::types::{CurrencyCode, Locale};

const NBSP: char = '\u{a0}';
const NARROW_NBSP: char = '\u{202f}';

/// How integer digits are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// Groups of three: `1,234,567`.
    Thousands,
    /// Last three, then groups of two: `12,34,567`.
    Indian,
}

impl Grouping {
    /// Returns `true` if a separator goes before a digit that has
    /// `remaining` digits left including itself.
    const fn separator_before(self, remaining: usize) -> bool {
        match self {
            Self::Thousands => remaining % 3 == 0,
            Self::Indian => remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0),
        }
    }

    /// Insert `separator` between digit groups of an ASCII digit string.
    #[must_use]
    pub fn apply(self, digits: &str, separator: char) -> String {
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 2 * separator.len_utf8());
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && self.separator_before(len - i) {
                out.push(separator);
            }
            out.push(ch);
        }
        out
    }
}

/// Where the currency symbol sits relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    /// `$1,234.56`
    Prefix,
    /// `€ 1.234,56` (non-breaking space)
    PrefixSpaced,
    /// `1.234,56 €` (non-breaking space)
    SuffixSpaced,
}

impl SymbolPlacement {
    /// Join a formatted number and a symbol.
    ///
    /// The separating space is kept even when `symbol` is empty.
    #[must_use]
    pub fn apply(self, number: &str, symbol: &str) -> String {
        match self {
            Self::Prefix => format!("{symbol}{number}"),
            Self::PrefixSpaced => format!("{symbol}{NBSP}{number}"),
            Self::SuffixSpaced => format!("{number}{NBSP}{symbol}"),
        }
    }
}

/// Formatting rules for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleRules {
    /// Normalized locale tag.
    pub tag: &'static str,
    /// Decimal separator.
    pub decimal: char,
    /// Grouping separator.
    pub group: char,
    /// Digit grouping style.
    pub grouping: Grouping,
    /// Symbol placement.
    pub placement: SymbolPlacement,
    /// Currency whose local symbol this locale uses.
    pub home_currency: Option<CurrencyCode>,
}

const fn rules(
    tag: &'static str,
    decimal: char,
    group: char,
    grouping: Grouping,
    placement: SymbolPlacement,
    home_currency: CurrencyCode,
) -> LocaleRules {
    LocaleRules {
        tag,
        decimal,
        group,
        grouping,
        placement,
        home_currency: Some(home_currency),
    }
}

// The first entry for a language doubles as that language's default.
static LOCALES: &[LocaleRules] = &[
    rules("en-US", '.', ',', Grouping::Thousands, SymbolPlacement::Prefix, CurrencyCode::USD),
    rules("en-GB", '.', ',', Grouping::Thousands, SymbolPlacement::Prefix, CurrencyCode::GBP),
    rules("en-CA", '.', ',', Grouping::Thousands, SymbolPlacement::Prefix, CurrencyCode::CAD),
    rules("en-AU", '.', ',', Grouping::Thousands, SymbolPlacement::Prefix, CurrencyCode::AUD),
    rules("en-IN", '.', ',', Grouping::Indian, SymbolPlacement::Prefix, CurrencyCode::INR),
    rules("de-DE", ',', '.', Grouping::Thousands, SymbolPlacement::SuffixSpaced, CurrencyCode::EUR),
    rules("de-CH", '.', '’', Grouping::Thousands, SymbolPlacement::PrefixSpaced, CurrencyCode::CHF),
    rules("fr-FR", ',', NARROW_NBSP, Grouping::Thousands, SymbolPlacement::SuffixSpaced, CurrencyCode::EUR),
    rules("nl-NL", ',', '.', Grouping::Thousands, SymbolPlacement::PrefixSpaced, CurrencyCode::EUR),
    rules("es-ES", ',', '.', Grouping::Thousands, SymbolPlacement::SuffixSpaced, CurrencyCode::EUR),
    rules("ja-JP", '.', ',', Grouping::Thousands, SymbolPlacement::Prefix, CurrencyCode::JPY),
];

impl LocaleRules {
    /// Find the rules for `locale`.
    ///
    /// An exact tag match wins; otherwise the default rules of the locale's
    /// language are used. Returns `None` for unknown languages.
    #[must_use]
    pub fn lookup(locale: &Locale) -> Option<&'static Self> {
        LOCALES
            .iter()
            .find(|r| r.tag == locale.as_str())
            .or_else(|| {
                LOCALES
                    .iter()
                    .find(|r| r.tag.split('-').next() == Some(locale.language()))
            })
    }

    /// Every locale tag with built-in rules.
    pub fn tags() -> impl Iterator<Item = &'static str> {
        LOCALES.iter().map(|r| r.tag)
    }

    /// Returns `true` if `ch` separates digit groups in this locale.
    ///
    /// Locales that group with a space also accept any other whitespace,
    /// since users rarely type the exact no-break variant.
    #[must_use]
    pub fn is_group_separator(&self, ch: char) -> bool {
        ch == self.group || (self.group.is_whitespace() && ch.is_whitespace())
    }
}
