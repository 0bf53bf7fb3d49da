//! Field error type.

use currency_field_core::{AmountError, FormatError, ParseError};
use thiserror::Error;

/// Errors surfaced by [`CurrencyFieldController`](crate::CurrencyFieldController).
///
/// Collaborator errors pass through unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The formatter rejected the locale/currency pairing.
    #[error(transparent)]
    Format(#[from] FormatError),
    /// A preformatted string failed strict parsing.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A strictly parsed value is not a valid amount.
    #[error(transparent)]
    Amount(#[from] AmountError),
}
