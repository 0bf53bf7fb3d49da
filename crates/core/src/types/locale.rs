//! Locale identifier type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Locale`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    /// The input string is empty.
    #[error("locale cannot be empty")]
    Empty,
    /// The language subtag is not 2-3 ASCII letters.
    #[error("invalid language subtag in '{0}'")]
    InvalidLanguage(String),
    /// The region subtag is not 2 ASCII letters or 3 digits.
    #[error("invalid region subtag in '{0}'")]
    InvalidRegion(String),
}

/// A locale tag of the form `language[-REGION]`.
///
/// Both `-` and `_` are accepted as separators; the stored form is
/// normalized to a lowercase language and an uppercase region joined by
/// `-`. The tag is opaque to the field controller, only formatters
/// interpret it.
///
/// ## Examples
///
/// ```
/// use currency_field_core::Locale;
///
/// let locale = Locale::parse("de_de").unwrap();
/// assert_eq!(locale.as_str(), "de-DE");
/// assert_eq!(locale.language(), "de");
/// assert_eq!(locale.region(), Some("DE"));
///
/// assert!(Locale::parse("").is_err());
/// assert!(Locale::parse("english-US").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    /// Parse a `Locale` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty or a subtag is malformed.
    /// Subtags after the region (scripts, variants) are not supported.
    pub fn parse(s: &str) -> Result<Self, LocaleError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LocaleError::Empty);
        }

        let mut parts = s.split(['-', '_']);
        let language = parts.next().unwrap_or_default();
        if !(2..=3).contains(&language.len()) || !language.bytes().all(|b| b.is_ascii_alphabetic())
        {
            return Err(LocaleError::InvalidLanguage(s.to_owned()));
        }

        let region = parts.next();
        if parts.next().is_some() {
            return Err(LocaleError::InvalidRegion(s.to_owned()));
        }

        let mut tag = language.to_ascii_lowercase();
        if let Some(region) = region {
            let alpha = region.len() == 2 && region.bytes().all(|b| b.is_ascii_alphabetic());
            let numeric = region.len() == 3 && region.bytes().all(|b| b.is_ascii_digit());
            if !alpha && !numeric {
                return Err(LocaleError::InvalidRegion(s.to_owned()));
            }
            tag.push('-');
            tag.push_str(&region.to_ascii_uppercase());
        }

        Ok(Self(tag))
    }

    /// Returns the normalized tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the language subtag (e.g. `en`).
    #[must_use]
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    /// Returns the region subtag (e.g. `US`), if any.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.0.split_once('-').map(|(_, region)| region)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self("en-US".to_owned())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
