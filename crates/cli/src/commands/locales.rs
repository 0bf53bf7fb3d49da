//! Built-in locale listing.

use currency_field::FieldError;
use currency_field_core::{Amount, CurrencyFormatter, FRACTION_DIGITS, Locale, LocaleFormatter};
use serde::Serialize;

use super::{CommandError, Options};

/// Sample amount rendered for every locale.
const SAMPLE_CENTS: u64 = 123_456_789;

#[derive(Debug, Serialize)]
pub struct LocaleSample {
    pub locale: String,
    pub sample: String,
}

/// List every built-in locale with a sample in the configured currency.
pub fn run(options: &Options) -> Result<(), CommandError> {
    let samples = samples(options)?;
    let lines: Vec<String> = samples
        .iter()
        .map(|s| format!("{:<6} {}", s.locale, s.sample))
        .collect();
    options.emit(&samples, &lines)
}

pub fn samples(options: &Options) -> Result<Vec<LocaleSample>, CommandError> {
    let formatter = LocaleFormatter::new();
    let amount = Amount::from_cents(SAMPLE_CENTS);

    LocaleFormatter::supported_locales()
        .map(|tag| -> Result<LocaleSample, CommandError> {
            let locale = Locale::parse(tag)?;
            let sample = formatter
                .format(&amount, &locale, options.config.currency, FRACTION_DIGITS)
                .map_err(FieldError::from)?;
            Ok(LocaleSample {
                locale: tag.to_owned(),
                sample,
            })
        })
        .collect()
}
