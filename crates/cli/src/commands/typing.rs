//! Keystroke simulation.
//!
//! # Usage
//!
//! ```bash
//! cf-cli type 123456
//! cf-cli --locale de-DE --currency EUR type "99<1"
//! ```

use currency_field::TextHost;
use currency_field_core::Amount;
use serde::Serialize;

use super::{CommandError, Options, with_caret};

/// Key that deletes the character before the caret.
pub const BACKSPACE: char = '<';

/// Field state after one key.
#[derive(Debug, Serialize)]
pub struct Step {
    pub key: char,
    pub value: Amount,
    pub text: String,
    pub cursor: usize,
}

/// Type `keys` into a fresh field and report every reformat.
pub fn run(options: &Options, keys: &str) -> Result<(), CommandError> {
    let steps = simulate(options, keys)?;
    let lines: Vec<String> = steps
        .iter()
        .map(|step| {
            format!(
                "{}  {:>12}  {}",
                step.key,
                step.value,
                with_caret(&step.text, step.cursor)
            )
        })
        .collect();
    options.emit(&steps, &lines)
}

/// Feed `keys` through a field backed by an in-memory host.
pub fn simulate(options: &Options, keys: &str) -> Result<Vec<Step>, CommandError> {
    let mut field = options.field()?;
    let mut steps = Vec::with_capacity(keys.len());

    for key in keys.chars() {
        if key == BACKSPACE {
            field.host_mut().backspace();
        } else {
            field.host_mut().type_text(key.encode_utf8(&mut [0; 4]));
        }
        let delivered = field.dispatch_pending()?;
        tracing::debug!(%key, delivered, "key dispatched");

        steps.push(Step {
            key,
            value: field.value().clone(),
            text: field.host().text().to_owned(),
            cursor: field.host().cursor(),
        });
    }

    Ok(steps)
}
