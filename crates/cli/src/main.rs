// RailPal CLI - reconcile scanned work orders against track inventory

mod checkout;
mod exit_codes;
mod parse;
mod reconcile;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use railpal_backend_client::API_BASE;
use railpal_config::Settings;

use exit_codes::{EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "railpal")]
#[command(about = "Rail yard reconciliation from scanned work orders and inventory sheets")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Recognize sheets, build the record store, and reconcile
    #[command(after_help = "\
Examples:
  railpal reconcile --work-orders am_trick.jpg --inventory track4.jpg
  railpal reconcile --work-orders wo1.jpg --work-orders wo2.jpg --inventory inv.jpg
  railpal reconcile --work-orders wo.txt --inventory inv.txt --raw -o results.csv
  railpal reconcile --work-orders wo.jpg --inventory inv.jpg --json | jq .summary")]
    Reconcile {
        /// Work-order sheet(s), recognized and upserted in argument order
        #[arg(long = "work-orders", value_name = "FILE", required = true)]
        work_orders: Vec<PathBuf>,

        /// Inventory sheet(s), combined into one snapshot that replaces the store
        #[arg(long = "inventory", value_name = "FILE", required = true)]
        inventory: Vec<PathBuf>,

        /// Inputs are already-recognized text files; skip OCR
        #[arg(long)]
        raw: bool,

        /// Results file (default: railpal_results.csv)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Print the full report as JSON on stdout
        #[arg(long)]
        json: bool,

        /// Backend base URL (overrides RAILPAL_API_BASE and settings)
        #[arg(long, value_name = "URL")]
        api_base: Option<String>,

        /// Suppress stderr progress messages
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Run the text normalizer on raw recognized text (file or stdin)
    #[command(after_help = "\
Examples:
  railpal parse work-orders sheet.txt
  tesseract photo.jpg - | railpal parse inventory
  railpal parse work-orders sheet.txt --json | jq '.[0].car'")]
    Parse {
        /// Which normalizer to run
        kind: ParseKind,

        /// Input file (omit to read from stdin)
        file: Option<PathBuf>,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a checkout session and print the redirect URL
    #[command(after_help = "\
PRICE_ID may be a Stripe price ID, or one of the aliases `monthly` /
`credits` resolved from settings.toml.

Examples:
  railpal checkout monthly
  railpal checkout price_1NXabc")]
    Checkout {
        /// Stripe price ID (or alias: monthly, credits)
        price_id: String,

        /// Backend base URL (overrides RAILPAL_API_BASE and settings)
        #[arg(long, value_name = "URL")]
        api_base: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ParseKind {
    /// Car + optional spot per line
    WorkOrders,
    /// Standing-order cars, one per line
    Inventory,
}

/// Resolve the backend base URL: flag > env > settings > built-in default.
fn resolve_api_base(flag: Option<String>, settings: &Settings) -> String {
    if let Some(base) = flag {
        return base.trim_end_matches('/').to_string();
    }

    if let Ok(base) = std::env::var("RAILPAL_API_BASE") {
        let trimmed = base.trim();
        if !trimmed.is_empty() {
            return trimmed.trim_end_matches('/').to_string();
        }
    }

    if let Some(base) = &settings.api_base {
        return base.trim_end_matches('/').to_string();
    }

    API_BASE.to_string()
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        None => {
            // No subcommand = show help
            eprintln!("Usage: railpal <command> [options]");
            eprintln!("       railpal --help for more information");
            Ok(())
        }
        Some(Commands::Reconcile {
            work_orders,
            inventory,
            raw,
            output,
            json,
            api_base,
            quiet,
        }) => reconcile::cmd_reconcile(work_orders, inventory, raw, output, json, api_base, quiet),
        Some(Commands::Parse { kind, file, json }) => parse::cmd_parse(kind, file, json),
        Some(Commands::Checkout { price_id, api_base }) => {
            checkout::cmd_checkout(price_id, api_base)
        }
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn export_io(msg: impl Into<String>) -> Self {
        Self { code: exit_codes::EXIT_EXPORT_IO, message: msg.into(), hint: None }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_base_flag_wins() {
        let settings = Settings {
            api_base: Some("http://from-settings".into()),
            ..Settings::default()
        };
        let base = resolve_api_base(Some("http://from-flag/".into()), &settings);
        assert_eq!(base, "http://from-flag");
    }

    #[test]
    fn api_base_falls_back_to_settings_then_default() {
        let settings = Settings {
            api_base: Some("http://from-settings/".into()),
            ..Settings::default()
        };
        assert_eq!(resolve_api_base(None, &settings), "http://from-settings");
        assert_eq!(resolve_api_base(None, &Settings::default()), API_BASE);
    }
}
