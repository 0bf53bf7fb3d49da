//! Caret placement.
//!
//! The caret belongs right after the numeric part of the formatted text:
//! after a leading symbol, before a trailing one. Rather than branching on
//! where a locale puts its symbol, the amount is formatted a second time
//! with the symbol removed and that rendering is located inside the full
//! text. Symbol removal can leave the no-break space that separated the
//! symbol from the number, so one whitespace character is trimmed from
//! each end first.

use currency_field_core::{
    Amount, CurrencyCode, CurrencyFormatter, DisplayState, FRACTION_DIGITS, FormatError, Locale,
};

/// Clamp an arbitrary byte index to a valid UTF-8 character boundary.
///
/// Indices past the end clamp to `s.len()`; indices inside a multi-byte
/// character move back to its start.
///
/// ```
/// use currency_field::cursor::clamp_to_char_boundary;
///
/// let s = "1,00 €"; // '€' is 3 bytes
/// assert_eq!(clamp_to_char_boundary(s, 6), 5);
/// assert_eq!(clamp_to_char_boundary(s, 100), s.len());
/// ```
#[inline]
#[must_use]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Find the character boundary before `i`, or 0 at the start.
#[must_use]
pub fn prev_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    s.get(..i)
        .and_then(|head| head.char_indices().last())
        .map_or(0, |(idx, _)| idx)
}

/// Trim at most one leading and one trailing whitespace character.
///
/// `str::trim` would also eat legitimate spacing, such as a space used as a
/// group separator when the number is a single group away from the edge.
#[must_use]
pub fn trim_symbol_spacing(bare: &str) -> &str {
    let bare = bare.strip_prefix(char::is_whitespace).unwrap_or(bare);
    bare.strip_suffix(char::is_whitespace).unwrap_or(bare)
}

/// Offset right after the symbol-free rendering inside `full`.
///
/// Returns `None` if the trimmed `bare` text is not a substring of `full`.
#[must_use]
pub fn cursor_after_number(full: &str, bare: &str) -> Option<usize> {
    let number = trim_symbol_spacing(bare);
    full.find(number)
        .map(|start| clamp_to_char_boundary(full, start + number.len()))
}

/// Caret offset for `full`, given its symbol-free rendering `bare`.
///
/// A formatter that moves digits around instead of only adding a symbol
/// breaks the substring relation. Debug builds panic on that; release
/// builds log an error and put the caret at the end of the text.
#[must_use]
pub fn place_cursor(full: &str, bare: &str) -> usize {
    if let Some(offset) = cursor_after_number(full, bare) {
        return offset;
    }

    tracing::error!(
        full,
        bare,
        "symbol-free rendering not found in formatted text"
    );
    debug_assert!(false, "symbol-free rendering {bare:?} not found in {full:?}");
    full.len()
}

/// Format `amount` and compute where the caret goes.
///
/// # Errors
///
/// Returns the formatter's error unchanged.
pub fn render<F: CurrencyFormatter>(
    formatter: &F,
    amount: &Amount,
    locale: &Locale,
    currency: CurrencyCode,
) -> Result<DisplayState, FormatError> {
    let full = formatter.format(amount, locale, currency, FRACTION_DIGITS)?;
    let bare = formatter
        .with_symbol_removed()
        .format(amount, locale, currency, FRACTION_DIGITS)?;
    let cursor = place_cursor(&full, &bare);
    Ok(DisplayState::new(full, cursor))
}
