//! Currency Field Core - Shared types library.
//!
//! This crate provides the value side of the currency input field:
//! - `currency-field` - The controller that keeps host text, value and caret in sync
//! - `cli` - Terminal harness that drives the controller
//!
//! # Architecture
//!
//! The core crate contains only types, pure functions and traits - no host
//! toolkit access and no I/O. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for amounts, locales, currencies and display state
//! - [`parse`] - Live-typing parser that reads every digit as a count of cents
//! - [`format`] - Locale-aware currency formatting and strict localized parsing

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod format;
pub mod parse;
pub mod types;

pub use format::{CurrencyFormatter, FormatError, LocaleFormatter, ParseError};
pub use parse::parse_cents_input;
pub use types::*;
