//! Amount formatting.
//!
//! # Usage
//!
//! ```bash
//! cf-cli --locale en-IN --currency INR format 1234567.89
//! ```

use currency_field_core::{Amount, DisplayState};
use serde::Serialize;

use super::{CommandError, Options, with_caret};

/// A formatted amount.
#[derive(Debug, Serialize)]
pub struct Formatted {
    pub value: Amount,
    pub locale: String,
    pub currency: String,
    #[serde(flatten)]
    pub display: DisplayState,
}

/// Format `amount` and show where the caret lands.
pub fn run(options: &Options, amount: &str) -> Result<(), CommandError> {
    let formatted = format_amount(options, amount)?;
    let line = with_caret(&formatted.display.text, formatted.display.cursor);
    options.emit(&formatted, &[line])
}

/// Assign `amount` to a fresh field and capture what it displays.
///
/// Digits past the second decimal place are rounded half-up.
pub fn format_amount(options: &Options, amount: &str) -> Result<Formatted, CommandError> {
    let value: Amount = amount.trim().parse()?;
    let mut field = options.field()?;
    field.set_value(value.clone())?;

    Ok(Formatted {
        value,
        locale: field.locale().to_string(),
        currency: field.currency().to_string(),
        display: field.display().clone(),
    })
}
