//! The currency field state machine.
//!
//! Three entry points change what the field shows: assigning a value,
//! switching locale or currency, and a text change reported by the host.
//! All of them end in the same reformat step:
//!
//! 1. Format the amount for the current locale and currency.
//! 2. Place the caret right after the numeric part (see [`crate::cursor`]).
//! 3. Write text and caret to the host with every known listener detached,
//!    so the write does not come back as a user edit.
//! 4. Remember the written text and notify value listeners.
//!
//! Formatting happens before any state is replaced, so a rejected locale or
//! currency leaves the field exactly as it was.

use core::fmt;

use currency_field_core::{
    Amount, CurrencyCode, CurrencyFormatter, DisplayState, Locale, LocaleFormatter,
    parse_cents_input,
};
use tracing::{debug, trace, warn};

use crate::config::FieldConfig;
use crate::cursor::render;
use crate::error::FieldError;
use crate::guard::DetachedListeners;
use crate::host::{ListenerHandle, TextHost};

type ValueListener = Box<dyn FnMut(&Amount)>;

/// Keeps a host text widget, an [`Amount`] and the caret in sync.
///
/// ## Examples
///
/// ```
/// use currency_field::{CurrencyFieldController, MemoryHost, TextHost};
/// use currency_field_core::{CurrencyCode, Locale, LocaleFormatter};
///
/// let mut field = CurrencyFieldController::new(
///     MemoryHost::new(),
///     LocaleFormatter::new(),
///     Locale::parse("en-US").unwrap(),
///     CurrencyCode::USD,
/// )
/// .unwrap();
/// assert_eq!(field.host().text(), "$0.00");
///
/// field.host_mut().type_text("1");
/// field.dispatch_pending().unwrap();
/// assert_eq!(field.value().to_string(), "0.01");
/// assert_eq!(field.host().text(), "$0.01");
/// ```
pub struct CurrencyFieldController<H: TextHost, F: CurrencyFormatter = LocaleFormatter> {
    host: H,
    formatter: F,
    value: Amount,
    locale: Locale,
    currency: CurrencyCode,
    display: DisplayState,
    /// Text of the last write; an identical edit notification is an echo.
    last_written: String,
    handle: ListenerHandle,
    /// Host listeners detached around every write, own handle first.
    text_listeners: Vec<ListenerHandle>,
    value_listeners: Vec<ValueListener>,
}

impl<H: TextHost, F: CurrencyFormatter> CurrencyFieldController<H, F> {
    /// Attach a new field to `host` and show `0.00`.
    ///
    /// # Errors
    ///
    /// Returns an error if `formatter` cannot format for `locale` and
    /// `currency`.
    pub fn new(
        host: H,
        formatter: F,
        locale: Locale,
        currency: CurrencyCode,
    ) -> Result<Self, FieldError> {
        let value = Amount::zero();
        let display = render(&formatter, &value, &locale, currency)?;

        let handle = ListenerHandle::next();
        let mut field = Self {
            host,
            formatter,
            value,
            locale,
            currency,
            display: DisplayState::default(),
            last_written: String::new(),
            handle,
            text_listeners: vec![handle],
            value_listeners: Vec::new(),
        };
        field.host.add_change_listener(handle);
        field.commit(display);
        Ok(field)
    }

    /// Attach a new field using the locale and currency from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if `formatter` cannot format for the configured
    /// locale and currency.
    pub fn from_config(host: H, formatter: F, config: &FieldConfig) -> Result<Self, FieldError> {
        Self::new(host, formatter, config.locale.clone(), config.currency)
    }

    /// Returns the current amount.
    #[must_use]
    pub const fn value(&self) -> &Amount {
        &self.value
    }

    /// Returns the current locale.
    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Returns the current currency.
    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// Returns the text and caret last written to the host.
    #[must_use]
    pub const fn display(&self) -> &DisplayState {
        &self.display
    }

    /// Returns the handle this controller listens on.
    #[must_use]
    pub const fn listener_handle(&self) -> ListenerHandle {
        self.handle
    }

    /// Returns the host.
    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Returns the host for simulating input or wiring the event loop.
    pub const fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Detach every listener this controller registered and return the host.
    #[must_use]
    pub fn into_host(mut self) -> H {
        for &handle in &self.text_listeners {
            self.host.remove_change_listener(handle);
        }
        self.host
    }

    /// Replace the amount and reformat.
    ///
    /// # Errors
    ///
    /// Returns the formatter's error; the field is left unchanged.
    pub fn set_value(&mut self, value: Amount) -> Result<(), FieldError> {
        let display = render(&self.formatter, &value, &self.locale, self.currency)?;
        self.value = value;
        self.commit(display);
        Ok(())
    }

    /// Replace the locale and reformat.
    ///
    /// # Errors
    ///
    /// Returns the formatter's error (e.g. an unsupported locale); the field
    /// is left unchanged.
    pub fn set_locale(&mut self, locale: Locale) -> Result<(), FieldError> {
        let display = render(&self.formatter, &self.value, &locale, self.currency)?;
        self.locale = locale;
        self.commit(display);
        Ok(())
    }

    /// Replace the currency and reformat.
    ///
    /// # Errors
    ///
    /// Returns the formatter's error; the field is left unchanged.
    pub fn set_currency(&mut self, currency: CurrencyCode) -> Result<(), FieldError> {
        let display = render(&self.formatter, &self.value, &self.locale, currency)?;
        self.currency = currency;
        self.commit(display);
        Ok(())
    }

    /// Handle a text change reported by the host.
    ///
    /// Every digit in `raw` counts as a cent, everything else is dropped.
    /// Text identical to the controller's own last write is ignored.
    ///
    /// # Errors
    ///
    /// Returns the formatter's error. Malformed keystrokes never fail.
    pub fn on_user_edit(&mut self, raw: &str) -> Result<(), FieldError> {
        if !raw.is_empty() && raw == self.last_written {
            trace!(raw, "edit echoes last write");
            return Ok(());
        }

        self.set_value(parse_cents_input(raw))
    }

    /// Strictly parse preformatted text for the current locale and currency.
    ///
    /// Unlike [`Self::on_user_edit`], separators must be well placed and
    /// nothing but the currency symbol may surround the number.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::Parse`] carrying the text if it is malformed,
    /// including numbers too long for the strict parser, or
    /// [`FieldError::Amount`] if it is negative.
    pub fn parse_display_text(&self, text: &str) -> Result<Amount, FieldError> {
        let value = self
            .formatter
            .parse(text, &self.locale, self.currency)
            .inspect_err(|err| warn!(text, %err, "rejected preformatted amount"))?;
        Ok(Amount::from_decimal(value)?)
    }

    /// Strictly parse preformatted text and assign the result.
    ///
    /// # Errors
    ///
    /// See [`Self::parse_display_text`] and [`Self::set_value`].
    pub fn set_value_from_text(&mut self, text: &str) -> Result<(), FieldError> {
        let value = self.parse_display_text(text)?;
        self.set_value(value)
    }

    /// Register a callback that receives the amount after every reformat.
    pub fn add_value_listener(&mut self, listener: impl FnMut(&Amount) + 'static) {
        self.value_listeners.push(Box::new(listener));
    }

    /// Attach `handle` to the host and detach it around controller writes.
    pub fn add_text_listener(&mut self, handle: ListenerHandle) {
        if !self.text_listeners.contains(&handle) {
            self.text_listeners.push(handle);
        }
        self.host.add_change_listener(handle);
    }

    /// Detach `handle` from the host. The controller's own handle stays.
    pub fn remove_text_listener(&mut self, handle: ListenerHandle) {
        if handle == self.handle {
            return;
        }
        self.text_listeners.retain(|&h| h != handle);
        self.host.remove_change_listener(handle);
    }

    fn commit(&mut self, state: DisplayState) {
        {
            let mut host = DetachedListeners::new(&mut self.host, &self.text_listeners);
            host.set_text(&state.text);
            host.set_cursor(state.cursor);
        }

        debug!(
            value = %self.value,
            locale = %self.locale,
            currency = %self.currency,
            text = %state.text,
            cursor = state.cursor,
            "currency field reformatted"
        );

        self.last_written.clone_from(&state.text);
        self.display = state;
        for listener in &mut self.value_listeners {
            listener(&self.value);
        }
    }
}

impl<H, F> fmt::Debug for CurrencyFieldController<H, F>
where
    H: TextHost + fmt::Debug,
    F: CurrencyFormatter + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurrencyFieldController")
            .field("host", &self.host)
            .field("formatter", &self.formatter)
            .field("value", &self.value)
            .field("locale", &self.locale)
            .field("currency", &self.currency)
            .field("display", &self.display)
            .field("handle", &self.handle)
            .field("text_listeners", &self.text_listeners)
            .field("value_listeners", &self.value_listeners.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::memory::MemoryHost;

    fn field(tag: &str, currency: CurrencyCode) -> CurrencyFieldController<MemoryHost> {
        CurrencyFieldController::new(
            MemoryHost::new(),
            LocaleFormatter::new(),
            Locale::parse(tag).unwrap(),
            currency,
        )
        .unwrap()
    }

    fn type_keys(field: &mut CurrencyFieldController<MemoryHost>, keys: &str) {
        for key in keys.chars() {
            field.host_mut().type_text(key.encode_utf8(&mut [0; 4]));
            field.dispatch_pending().unwrap();
        }
    }

    #[test]
    fn test_new_shows_zero() {
        let field = field("en-US", CurrencyCode::USD);
        assert!(field.value().is_zero());
        assert_eq!(field.host().text(), "$0.00");
        assert_eq!(field.host().cursor(), 5);
        assert_eq!(field.host().pending_changes(), 0);
        assert_eq!(field.host().listeners(), &[field.listener_handle()]);
    }

    #[test]
    fn test_new_rejects_unsupported_locale() {
        let result = CurrencyFieldController::new(
            MemoryHost::new(),
            LocaleFormatter::new(),
            Locale::parse("xx").unwrap(),
            CurrencyCode::USD,
        );
        assert!(matches!(result, Err(FieldError::Format(_))));
    }

    #[test]
    fn test_first_keystroke() {
        let mut field = field("en-US", CurrencyCode::USD);
        type_keys(&mut field, "1");
        assert_eq!(field.value(), &Amount::from_cents(1));
        assert_eq!(field.host().text(), "$0.01");
        assert_eq!(field.host().cursor(), "$0.01".len());
    }

    #[test]
    fn test_typing_shifts_digits_left() {
        let mut field = field("en-US", CurrencyCode::USD);
        type_keys(&mut field, "123456");
        assert_eq!(field.value(), &Amount::from_cents(123_456));
        assert_eq!(field.host().text(), "$1,234.56");
        assert_eq!(field.host().cursor(), 9);
    }

    #[test]
    fn test_whole_text_edit() {
        let mut field = field("en-US", CurrencyCode::USD);
        field.on_user_edit("123456").unwrap();
        assert_eq!(field.host().text(), "$1,234.56");
        assert_eq!(field.host().cursor(), 9);
    }

    #[test]
    fn test_programmatic_set_does_not_reenter() {
        let mut field = field("en-US", CurrencyCode::USD);
        field.set_value(Amount::zero()).unwrap();
        field.set_currency(CurrencyCode::GBP).unwrap();
        assert_eq!(field.host().text(), "£0.00");
        assert_eq!(field.dispatch_pending().unwrap(), 0);
    }

    #[test]
    fn test_letters_do_not_register() {
        let mut field = field("en-US", CurrencyCode::USD);
        type_keys(&mut field, "1a-2.b");
        assert_eq!(field.value(), &Amount::from_cents(12));
        assert_eq!(field.host().text(), "$0.12");
    }

    #[test]
    fn test_backspace_drops_last_digit() {
        let mut field = field("en-US", CurrencyCode::USD);
        type_keys(&mut field, "12345");
        field.host_mut().backspace();
        field.dispatch_pending().unwrap();
        assert_eq!(field.value(), &Amount::from_cents(1_234));
        assert_eq!(field.host().text(), "$12.34");
    }

    #[test]
    fn test_suffix_locale_caret_before_symbol() {
        let mut field = field("de-DE", CurrencyCode::EUR);
        type_keys(&mut field, "123456");
        assert_eq!(field.host().text(), "1.234,56\u{a0}€");
        assert_eq!(field.host().cursor(), 8);

        // The next keystroke lands before the symbol, right after the digits.
        type_keys(&mut field, "7");
        assert_eq!(field.value(), &Amount::from_cents(1_234_567));
        assert_eq!(field.host().text(), "12.345,67\u{a0}€");
        assert_eq!(field.host().cursor(), 9);
    }

    #[test]
    fn test_echo_of_last_write_is_noop() {
        let mut field = field("en-US", CurrencyCode::USD);
        type_keys(&mut field, "99");
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        field.add_value_listener(move |_| *counter.borrow_mut() += 1);

        let text = field.display().text.clone();
        field.on_user_edit(&text).unwrap();
        assert_eq!(field.value(), &Amount::from_cents(99));
        assert_eq!(field.host().text(), text);
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_edit_right_after_write_is_handled() {
        let mut field = field("en-US", CurrencyCode::USD);
        field.set_value(Amount::from_cents(500)).unwrap();
        assert_eq!(field.host().listeners(), &[field.listener_handle()]);

        field.on_user_edit("$5.001").unwrap();
        assert_eq!(field.value(), &Amount::from_cents(5_001));
        assert_eq!(field.host().text(), "$50.01");
    }

    #[test]
    fn test_empty_text_resets_to_zero() {
        let mut field = field("en-US", CurrencyCode::USD);
        type_keys(&mut field, "42");
        field.on_user_edit("").unwrap();
        assert!(field.value().is_zero());
        assert_eq!(field.host().text(), "$0.00");
    }

    #[test]
    fn test_own_writes_queue_nothing_for_known_listeners() {
        let mut field = field("en-US", CurrencyCode::USD);
        let extra = ListenerHandle::next();
        field.add_text_listener(extra);

        field.set_value(Amount::from_cents(500)).unwrap();
        field.set_currency(CurrencyCode::EUR).unwrap();
        assert_eq!(field.host().pending_changes(), 0);
        assert_eq!(field.host().listeners(), &[field.listener_handle(), extra]);
    }

    #[test]
    fn test_unknown_host_listener_sees_writes() {
        let mut field = field("en-US", CurrencyCode::USD);
        let outsider = ListenerHandle::next();
        field.host_mut().add_change_listener(outsider);

        field.set_value(Amount::from_cents(100)).unwrap();
        assert_eq!(
            field.host_mut().take_changes_for(outsider),
            vec!["$1.00".to_owned()]
        );
    }

    #[test]
    fn test_remove_text_listener_keeps_own_handle() {
        let mut field = field("en-US", CurrencyCode::USD);
        let extra = ListenerHandle::next();
        field.add_text_listener(extra);
        field.remove_text_listener(extra);
        field.remove_text_listener(field.listener_handle());
        assert_eq!(field.host().listeners(), &[field.listener_handle()]);
    }

    #[test]
    fn test_set_locale_reformats() {
        let mut field = field("en-US", CurrencyCode::EUR);
        field.set_value(Amount::from_cents(123_456)).unwrap();
        assert_eq!(field.host().text(), "€1,234.56");

        field.set_locale(Locale::parse("de-DE").unwrap()).unwrap();
        assert_eq!(field.host().text(), "1.234,56\u{a0}€");
        assert_eq!(field.host().cursor(), 8);
    }

    #[test]
    fn test_rejected_locale_leaves_field_unchanged() {
        let mut field = field("en-US", CurrencyCode::USD);
        type_keys(&mut field, "5");
        let before = field.display().clone();

        let err = field.set_locale(Locale::parse("zz-ZZ").unwrap()).unwrap_err();
        assert!(matches!(err, FieldError::Format(_)));
        assert_eq!(field.locale().as_str(), "en-US");
        assert_eq!(field.display(), &before);
        assert_eq!(field.host().text(), before.text);
    }

    #[test]
    fn test_value_listeners_receive_each_reformat() {
        let mut field = field("en-US", CurrencyCode::USD);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        field.add_value_listener(move |amount| sink.borrow_mut().push(amount.clone()));

        type_keys(&mut field, "12");
        field.set_currency(CurrencyCode::GBP).unwrap();
        assert_eq!(
            *seen.borrow(),
            vec![
                Amount::from_cents(1),
                Amount::from_cents(12),
                Amount::from_cents(12)
            ]
        );
    }

    #[test]
    fn test_set_value_from_text() {
        let mut field = field("de-DE", CurrencyCode::EUR);
        field.set_value_from_text("1.234,56 €").unwrap();
        assert_eq!(field.value(), &Amount::from_cents(123_456));
        assert_eq!(field.host().text(), "1.234,56\u{a0}€");
    }

    #[test]
    fn test_set_value_from_text_rounds_half_up() {
        let mut field = field("en-US", CurrencyCode::USD);
        field.set_value_from_text("$0.125").unwrap();
        assert_eq!(field.value(), &Amount::from_cents(13));
    }

    #[test]
    fn test_set_value_from_malformed_text() {
        let mut field = field("en-US", CurrencyCode::USD);
        type_keys(&mut field, "7");
        let err = field.set_value_from_text("$1,2,3.4.5").unwrap_err();
        assert_eq!(
            err,
            FieldError::Parse(currency_field_core::ParseError::Malformed {
                input: "$1,2,3.4.5".to_owned()
            })
        );
        assert_eq!(field.value(), &Amount::from_cents(7));
    }

    #[test]
    fn test_from_config() {
        let config = FieldConfig {
            locale: Locale::parse("fr-FR").unwrap(),
            currency: CurrencyCode::EUR,
        };
        let field =
            CurrencyFieldController::from_config(MemoryHost::new(), LocaleFormatter::new(), &config)
                .unwrap();
        assert_eq!(field.host().text(), "0,00\u{a0}€");
        assert_eq!(field.host().cursor(), 4);
    }

    #[test]
    fn test_into_host_detaches() {
        let mut field = field("en-US", CurrencyCode::USD);
        field.add_text_listener(ListenerHandle::next());
        let host = field.into_host();
        assert!(host.listeners().is_empty());
        assert_eq!(host.text(), "$0.00");
    }

    #[test]
    fn test_debug_hides_closures() {
        let mut field = field("en-US", CurrencyCode::USD);
        field.add_value_listener(|_| {});
        let debug = format!("{field:?}");
        assert!(debug.contains("CurrencyFieldController"));
        assert!(debug.contains("value_listeners: 1"));
    }
}
