//! Host toolkit seam.
//!
//! The controller never touches a widget directly. Anything that can show
//! text, place a caret and register change listeners can host the field.

use core::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque identifier for a text-change listener registered with a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle(u64);

impl ListenerHandle {
    /// Create a handle from a raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Allocate a handle that no earlier call to `next` returned.
    #[must_use]
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the underlying u64 value.
    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListenerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener#{}", self.0)
    }
}

impl From<u64> for ListenerHandle {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A text widget the field can drive.
///
/// Hosts notify every attached listener whenever the text changes, whether
/// the change came from a keystroke or from [`TextHost::set_text`]. Offsets
/// are UTF-8 byte offsets into the current text.
pub trait TextHost {
    /// Replace the whole text.
    fn set_text(&mut self, text: &str);

    /// Move the caret to `offset`.
    fn set_cursor(&mut self, offset: usize);

    /// Returns the current text.
    fn text(&self) -> &str;

    /// Start delivering change notifications to `handle`.
    fn add_change_listener(&mut self, handle: ListenerHandle);

    /// Stop delivering change notifications to `handle`.
    fn remove_change_listener(&mut self, handle: ListenerHandle);
}
