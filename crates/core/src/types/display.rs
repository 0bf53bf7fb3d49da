//! Text and caret shown by the host.

use serde::{Deserialize, Serialize};

/// What the host displays: the formatted text and where the caret sits.
///
/// `cursor` is a UTF-8 byte offset into `text` and always lies on a char
/// boundary. The state is derived from the amount, locale and currency and
/// is never authoritative on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayState {
    /// Full formatted text, currency symbol included.
    pub text: String,
    /// Caret position as a byte offset into `text`.
    pub cursor: usize,
}

impl DisplayState {
    /// Create a display state.
    #[must_use]
    pub const fn new(text: String, cursor: usize) -> Self {
        Self { text, cursor }
    }

    /// Returns the text before the caret.
    #[must_use]
    pub fn before_cursor(&self) -> &str {
        self.text.get(..self.cursor).unwrap_or(&self.text)
    }

    /// Returns the text after the caret.
    #[must_use]
    pub fn after_cursor(&self) -> &str {
        self.text.get(self.cursor..).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_at_cursor() {
        let state = DisplayState::new("1.234,56\u{a0}€".to_owned(), 8);
        assert_eq!(state.before_cursor(), "1.234,56");
        assert_eq!(state.after_cursor(), "\u{a0}€");
    }

    #[test]
    fn test_split_at_end() {
        let state = DisplayState::new("$0.01".to_owned(), 5);
        assert_eq!(state.before_cursor(), "$0.01");
        assert_eq!(state.after_cursor(), "");
    }

    #[test]
    fn test_default_is_empty() {
        let state = DisplayState::default();
        assert!(state.text.is_empty());
        assert_eq!(state.cursor, 0);
    }
}
