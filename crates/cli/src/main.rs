//! Currency Field CLI - drive the currency field from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Type keys into a field; '<' is backspace
//! cf-cli type 123456
//! cf-cli --locale de-DE --currency EUR type "1234<5"
//!
//! # Format an amount
//! cf-cli --locale fr-FR --currency EUR format 1234567.89
//!
//! # Strictly parse preformatted text
//! cf-cli --locale de-DE --currency EUR parse "1.234,56 €"
//!
//! # List built-in locales
//! cf-cli locales
//! ```
//!
//! # Commands
//!
//! - `type` - Simulate keystrokes and show every reformat
//! - `format` - Format an amount and show the caret
//! - `parse` - Validate preformatted text
//! - `locales` - List locales with a sample rendering
//!
//! # Environment Variables
//!
//! - `CURRENCY_FIELD_LOCALE` - Default locale (default: en-US)
//! - `CURRENCY_FIELD_CURRENCY` - Default currency (default: USD)
//! - `RUST_LOG` - Log filter (default: `currency_field=info,cf_cli=info`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::Options;

#[derive(Parser)]
#[command(name = "cf-cli")]
#[command(author, version, about = "Currency field harness")]
struct Cli {
    /// Locale tag, e.g. `en-US` (overrides `CURRENCY_FIELD_LOCALE`)
    #[arg(short, long, global = true)]
    locale: Option<String>,

    /// ISO 4217 currency code (overrides `CURRENCY_FIELD_CURRENCY`)
    #[arg(short, long, global = true)]
    currency: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Type keys into an empty field, one reformat per key
    Type {
        /// Keys to type; `<` deletes the character before the caret
        keys: String,
    },
    /// Format an amount such as `1234.56`
    Format {
        /// Non-negative amount; digits past the second decimal place are rounded half-up
        amount: String,
    },
    /// Strictly parse text formatted for the locale and currency
    Parse {
        /// Formatted text, e.g. `$1,234.56`
        text: String,
    },
    /// List built-in locales
    Locales,
}

fn main() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "currency_field=info,cf_cli=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let options = Options::resolve(cli.locale.as_deref(), cli.currency.as_deref(), cli.json)?;

    match cli.command {
        Commands::Type { keys } => commands::typing::run(&options, &keys)?,
        Commands::Format { amount } => commands::format::run(&options, &amount)?,
        Commands::Parse { text } => commands::parse::run(&options, &text)?,
        Commands::Locales => commands::locales::run(&options)?,
    }
    Ok(())
}
