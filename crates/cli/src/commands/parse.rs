//! Strict parsing of preformatted text.
//!
//! # Usage
//!
//! ```bash
//! cf-cli --locale de-DE --currency EUR parse "1.234,56 €"
//! ```

use currency_field_core::Amount;
use serde::Serialize;

use super::{CommandError, Options};

/// A successfully parsed amount and its canonical rendering.
#[derive(Debug, Serialize)]
pub struct Parsed {
    pub input: String,
    pub value: Amount,
    pub text: String,
}

pub fn run(options: &Options, text: &str) -> Result<(), CommandError> {
    let parsed = parse_text(options, text)?;
    let line = format!("{}  ({})", parsed.value, parsed.text);
    options.emit(&parsed, &[line])
}

/// Parse `text` strictly and show how the field would display the result.
pub fn parse_text(options: &Options, text: &str) -> Result<Parsed, CommandError> {
    let mut field = options.field()?;
    field.set_value_from_text(text)?;

    Ok(Parsed {
        input: text.to_owned(),
        value: field.value().clone(),
        text: field.display().text.clone(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use currency_field::{FieldConfig, FieldError};
    use currency_field_core::{CurrencyCode, Locale, ParseError};

    use super::*;

    fn options(tag: &str, currency: CurrencyCode) -> Options {
        Options {
            config: FieldConfig {
                locale: Locale::parse(tag).unwrap(),
                currency,
            },
            json: false,
        }
    }

    #[test]
    fn test_parse_text_canonicalizes() {
        let parsed = parse_text(&options("de-DE", CurrencyCode::EUR), "1.234,5 €").unwrap();
        assert_eq!(parsed.value, Amount::from_cents(123_450));
        assert_eq!(parsed.text, "1.234,50\u{a0}€");
    }

    #[test]
    fn test_parse_text_malformed() {
        let err = parse_text(&options("en-US", CurrencyCode::USD), "$12abc").unwrap_err();
        assert!(matches!(
            err,
            CommandError::Field(FieldError::Parse(ParseError::Malformed { ref input }))
                if input == "$12abc"
        ));
    }
}
