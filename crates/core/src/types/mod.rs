//! Core types for the currency field.
//!
//! This module provides type-safe wrappers for the values the field manages.

pub mod amount;
pub mod currency;
pub mod display;
pub mod locale;

pub use amount::{Amount, AmountError, FRACTION_DIGITS};
pub use currency::{CurrencyCode, CurrencyError};
pub use display::DisplayState;
pub use locale::{Locale, LocaleError};
