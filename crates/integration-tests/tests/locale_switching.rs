//! Integration tests for locale and currency changes on a live field.

use currency_field::FieldError;
use currency_field_core::{Amount, CurrencyCode, FormatError, Locale};
use currency_field_integration_tests::Harness;

#[test]
fn test_switch_locale_keeps_value() {
    let mut h = Harness::new("en-US", CurrencyCode::EUR).unwrap();
    h.type_keys("123456").unwrap();
    assert_eq!(h.text(), "€1,234.56");

    h.field.set_locale(Locale::parse("de-DE").unwrap()).unwrap();
    assert_eq!(h.value(), Amount::from_cents(123_456));
    assert_eq!(h.text(), "1.234,56\u{a0}€");
    assert_eq!(h.split_at_caret().1, "\u{a0}€");
}

#[test]
fn test_typing_continues_after_locale_switch() {
    let mut h = Harness::new("en-US", CurrencyCode::EUR).unwrap();
    h.type_keys("12").unwrap();
    h.field.set_locale(Locale::parse("fr-FR").unwrap()).unwrap();
    h.type_keys("34").unwrap();
    assert_eq!(h.value(), Amount::from_cents(1_234));
    assert_eq!(h.text(), "12,34\u{a0}€");
}

#[test]
fn test_switch_currency_uses_international_symbol() {
    let mut h = Harness::new("en-US", CurrencyCode::USD).unwrap();
    h.type_keys("500").unwrap();

    h.field.set_currency(CurrencyCode::CAD).unwrap();
    assert_eq!(h.text(), "CA$5.00");

    h.field.set_locale(Locale::parse("en-CA").unwrap()).unwrap();
    assert_eq!(h.text(), "$5.00");
}

#[test]
fn test_language_only_locale_falls_back() {
    let mut h = Harness::new("de", CurrencyCode::EUR).unwrap();
    h.type_keys("1").unwrap();
    assert_eq!(h.text(), "0,01\u{a0}€");
}

#[test]
fn test_unsupported_locale_is_atomic() {
    let mut h = Harness::new("en-US", CurrencyCode::USD).unwrap();
    h.type_keys("42").unwrap();
    let before = h.field.display().clone();

    let err = h
        .field
        .set_locale(Locale::parse("tlh").unwrap())
        .unwrap_err();
    assert!(matches!(
        err,
        FieldError::Format(FormatError::UnsupportedLocale(ref tag)) if tag == "tlh"
    ));
    assert_eq!(h.field.locale().as_str(), "en-US");
    assert_eq!(h.field.display(), &before);

    // The field keeps working in its old locale.
    h.type_keys("0").unwrap();
    assert_eq!(h.text(), "$4.20");
}

#[test]
fn test_every_locale_and_currency_renders() {
    for tag in currency_field_core::LocaleFormatter::supported_locales() {
        for currency in CurrencyCode::ALL {
            let mut h = Harness::new(tag, currency).unwrap();
            h.type_keys("1234567").unwrap();
            assert_eq!(h.value(), Amount::from_cents(1_234_567));

            let (before, after) = h.split_at_caret();
            assert!(before.ends_with('7'), "{tag} {currency}: {:?}", h.text());
            assert!(!after.chars().any(|c| c.is_ascii_digit()));
        }
    }
}
