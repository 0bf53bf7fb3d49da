//! Integration tests for the currency field.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p currency-field-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `typing` - Keystroke sequences end to end
//! - `locale_switching` - Locale and currency changes on a live field
//! - `reentrancy` - Listener detachment around controller writes
//! - `strict_parsing` - Preformatted text assignment

#![cfg_attr(not(test), forbid(unsafe_code))]

use currency_field::{CurrencyFieldController, FieldError, MemoryHost, TextHost};
use currency_field_core::{Amount, CurrencyCode, Locale, LocaleError, LocaleFormatter};

/// A field on an in-memory host, driven key by key.
#[derive(Debug)]
pub struct Harness {
    pub field: CurrencyFieldController<MemoryHost>,
}

impl Harness {
    /// Create a field for `tag` and `currency`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag is malformed or the locale unsupported.
    pub fn new(tag: &str, currency: CurrencyCode) -> Result<Self, HarnessError> {
        let field = CurrencyFieldController::new(
            MemoryHost::new(),
            LocaleFormatter::new(),
            Locale::parse(tag)?,
            currency,
        )?;
        Ok(Self { field })
    }

    /// Type each character of `keys` at the caret and dispatch after each.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while dispatching.
    pub fn type_keys(&mut self, keys: &str) -> Result<(), HarnessError> {
        for key in keys.chars() {
            self.field.host_mut().type_text(key.encode_utf8(&mut [0; 4]));
            self.field.dispatch_pending()?;
        }
        Ok(())
    }

    /// Press backspace `times` times.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while dispatching.
    pub fn backspace(&mut self, times: usize) -> Result<(), HarnessError> {
        for _ in 0..times {
            self.field.host_mut().backspace();
            self.field.dispatch_pending()?;
        }
        Ok(())
    }

    /// Replace the whole text, as a paste over a full selection.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while dispatching.
    pub fn paste(&mut self, text: &str) -> Result<(), HarnessError> {
        self.field.host_mut().paste_over(text);
        self.field.dispatch_pending()?;
        Ok(())
    }

    /// Returns the displayed text.
    #[must_use]
    pub fn text(&self) -> &str {
        self.field.host().text()
    }

    /// Returns the host caret.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.field.host().cursor()
    }

    /// Returns the current amount.
    #[must_use]
    pub fn value(&self) -> Amount {
        self.field.value().clone()
    }

    /// Returns the displayed text split at the caret.
    #[must_use]
    pub fn split_at_caret(&self) -> (&str, &str) {
        let text = self.text();
        text.split_at_checked(self.cursor()).unwrap_or((text, ""))
    }
}

/// Errors raised while setting up or driving a [`Harness`].
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error(transparent)]
    Locale(#[from] LocaleError),
    #[error(transparent)]
    Field(#[from] FieldError),
}
