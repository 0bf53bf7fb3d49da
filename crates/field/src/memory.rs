//! In-memory host.
//!
//! `MemoryHost` behaves like a single-line text widget without a screen:
//! keystrokes edit the text at the caret, and every text change (typed or
//! programmatic) queues one notification per attached listener. The queue is
//! drained by the event loop, which is how the CLI harness and the tests
//! drive the controller.

use std::collections::VecDeque;

use currency_field_core::CurrencyFormatter;

use crate::controller::CurrencyFieldController;
use crate::cursor::{clamp_to_char_boundary, prev_cursor_boundary};
use crate::error::FieldError;
use crate::host::{ListenerHandle, TextHost};

/// A queued change notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChange {
    /// Listener the notification is addressed to.
    pub listener: ListenerHandle,
    /// Text after the change.
    pub text: String,
}

/// Headless single-line text widget.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    text: String,
    cursor: usize,
    listeners: Vec<ListenerHandle>,
    pending: VecDeque<TextChange>,
}

impl MemoryHost {
    /// Create an empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the caret position.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the attached listeners in attachment order.
    #[must_use]
    pub fn listeners(&self) -> &[ListenerHandle] {
        &self.listeners
    }

    /// Returns the number of queued notifications.
    #[must_use]
    pub fn pending_changes(&self) -> usize {
        self.pending.len()
    }

    /// Insert `input` at the caret, as if typed.
    pub fn type_text(&mut self, input: &str) {
        if input.is_empty() {
            return;
        }
        self.text.insert_str(self.cursor, input);
        self.cursor += input.len();
        self.notify();
    }

    /// Delete the character before the caret, as if backspace was pressed.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = prev_cursor_boundary(&self.text, self.cursor);
        self.text.replace_range(start..self.cursor, "");
        self.cursor = start;
        self.notify();
    }

    /// Replace everything with `text` and put the caret at the end, as if
    /// the user selected all and pasted.
    pub fn paste_over(&mut self, text: &str) {
        text.clone_into(&mut self.text);
        self.cursor = self.text.len();
        self.notify();
    }

    /// Remove and return every queued notification.
    pub fn drain_changes(&mut self) -> Vec<TextChange> {
        self.pending.drain(..).collect()
    }

    /// Remove and return the queued texts addressed to `listener`, leaving
    /// other listeners' notifications queued.
    pub fn take_changes_for(&mut self, listener: ListenerHandle) -> Vec<String> {
        let mut taken = Vec::new();
        self.pending.retain(|change| {
            if change.listener == listener {
                taken.push(change.text.clone());
                false
            } else {
                true
            }
        });
        taken
    }

    fn notify(&mut self) {
        for &listener in &self.listeners {
            self.pending.push_back(TextChange {
                listener,
                text: self.text.clone(),
            });
        }
    }
}

impl TextHost for MemoryHost {
    fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
        self.cursor = clamp_to_char_boundary(&self.text, self.cursor);
        self.notify();
    }

    fn set_cursor(&mut self, offset: usize) {
        self.cursor = clamp_to_char_boundary(&self.text, offset);
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn add_change_listener(&mut self, handle: ListenerHandle) {
        if !self.listeners.contains(&handle) {
            self.listeners.push(handle);
        }
    }

    fn remove_change_listener(&mut self, handle: ListenerHandle) {
        self.listeners.retain(|&l| l != handle);
    }
}

impl<F: CurrencyFormatter> CurrencyFieldController<MemoryHost, F> {
    /// Deliver the host's queued notifications for this controller.
    ///
    /// Returns how many notifications were delivered. Notifications for
    /// other listeners stay queued.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`CurrencyFieldController::on_user_edit`].
    pub fn dispatch_pending(&mut self) -> Result<usize, FieldError> {
        let handle = self.listener_handle();
        let changes = self.host_mut().take_changes_for(handle);
        for text in &changes {
            self.on_user_edit(text)?;
        }
        Ok(changes.len())
    }
}
