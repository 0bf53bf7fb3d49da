//! Currency Field - text/value synchronization for a currency input.
//!
//! The field always shows a formatted amount, accepts digit keystrokes and
//! keeps the caret right after the numeric part, whether the locale puts the
//! currency symbol before or after the number.
//!
//! # Architecture
//!
//! [`CurrencyFieldController`] is composed with any host text widget through
//! the [`TextHost`] trait. The host delivers every text change to
//! [`CurrencyFieldController::on_user_edit`]; the controller parses the
//! digits as cents, reformats and writes the text back while its listeners
//! are detached, so its own writes never loop back as user edits.
//!
//! ```text
//! keystroke -> host text -> on_user_edit -> parse_cents_input -> Amount
//!                                                       |
//!          host.set_text / set_cursor  <-  render  <----+
//! ```
//!
//! # Modules
//!
//! - [`controller`] - The field state machine
//! - [`host`] - Host toolkit seam and listener handles
//! - [`memory`] - In-memory host that queues change notifications
//! - [`cursor`] - Caret placement after the numeric part
//! - [`config`] - Environment-based configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod controller;
pub mod cursor;
pub mod error;
mod guard;
pub mod host;
pub mod memory;

pub use config::{ConfigError, FieldConfig};
pub use controller::CurrencyFieldController;
pub use cursor::render;
pub use error::FieldError;
pub use host::{ListenerHandle, TextHost};
pub use memory::{MemoryHost, TextChange};
