//! Live-typing parser.
//!
//! Every keystroke hands the parser the field's whole text, currency symbol
//! and separators included. Only ASCII digits survive, and the digit string
//! is read as a count of cents, so typing `1`, `2`, `3` walks the value
//! through `0.01`, `0.12` and `1.23`.

use num_bigint::BigUint;

use crate::types::Amount;

/// Parse raw field text into an amount by reading its digits as cents.
///
/// This never fails: non-digit characters are discarded, and text without
/// any digit yields `0.00`. There is no digit limit; every digit typed
/// counts.
///
/// # Examples
///
/// ```
/// use currency_field_core::parse_cents_input;
///
/// assert_eq!(parse_cents_input("12345").to_string(), "123.45");
/// assert_eq!(parse_cents_input("$1,234.567").to_string(), "12345.67");
/// assert_eq!(parse_cents_input("0005").to_string(), "0.05");
/// assert_eq!(parse_cents_input("abc").to_string(), "0.00");
/// ```
#[must_use]
pub fn parse_cents_input(raw: &str) -> Amount {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let cents = digits.parse::<BigUint>().unwrap_or_default();
    Amount::from_big_cents(cents)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn test_cents_interpretation() {
        assert_eq!(parse_cents_input("12345").to_string(), "123.45");
        assert_eq!(parse_cents_input("5").to_string(), "0.05");
        assert_eq!(parse_cents_input("0").to_string(), "0.00");
        assert_eq!(parse_cents_input("").to_string(), "0.00");
        assert_eq!(parse_cents_input("abc").to_string(), "0.00");
        assert_eq!(parse_cents_input("1a2b3").to_string(), "1.23");
    }

    #[test]
    fn test_leading_zeros_ignored() {
        assert_eq!(parse_cents_input("0005"), Amount::from_cents(5));
        assert_eq!(parse_cents_input("$0.05"), Amount::from_cents(5));
    }

    #[test]
    fn test_formatted_text_with_extra_keystroke() {
        assert_eq!(parse_cents_input("$1,234.567").to_string(), "12345.67");
        assert_eq!(parse_cents_input("1.234,567\u{a0}€").to_string(), "12345.67");
    }

    #[test]
    fn test_backspace_on_formatted_text() {
        assert_eq!(parse_cents_input("$1,234.5").to_string(), "123.45");
        assert_eq!(parse_cents_input("$0.0").to_string(), "0.00");
    }

    #[test]
    fn test_non_ascii_digits_discarded() {
        // Arabic-Indic and full-width digits are not ASCII digits.
        assert_eq!(parse_cents_input("١٢٣").to_string(), "0.00");
        assert_eq!(parse_cents_input("１２3").to_string(), "0.03");
    }

    #[test]
    fn test_long_input_keeps_every_digit() {
        let amount = parse_cents_input("12345678901234567890123456789");
        assert_eq!(amount.to_string(), "123456789012345678901234567.89");

        let long = "9".repeat(60);
        let amount = parse_cents_input(&format!("${long}1"));
        assert_eq!(amount.cents().to_string(), format!("{long}1"));

        // Leading zeros still vanish.
        assert_eq!(parse_cents_input(&format!("000{long}")).cents().to_string(), long);
    }

    #[test]
    fn test_totality_on_random_input() {
        let mut rng = rand::rng();
        for _ in 0..500 {
            let len = rng.random_range(0..40);
            let raw: String = (0..len).map(|_| rng.random::<char>()).collect();
            let amount = parse_cents_input(&raw);
            let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
            let significant = digits.trim_start_matches('0');
            if significant.is_empty() {
                assert!(amount.is_zero());
            } else {
                assert_eq!(amount.cents().to_string(), significant);
            }
        }
    }

    #[test]
    fn test_random_digit_strings_match_cents() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let cents: u64 = rng.random_range(0..10_000_000_000);
            let raw = format!("${cents}");
            assert_eq!(parse_cents_input(&raw), Amount::from_cents(cents));
        }
    }
}
