//! # vtypes CLI entry point
//!
//! Parses command-line arguments, resolves settings, and dispatches to the
//! subcommand handlers in `vtypes_cli`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vtypes_cli::money::{run_money, MoneyArgs};
use vtypes_cli::regions::{run_regions, RegionsArgs};
use vtypes_cli::row_version::{run_row_version, RowVersionArgs};

/// Inspect row version stamps and locale-aware money values.
#[derive(Parser, Debug)]
#[command(name = "vtypes", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML settings file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Ambient culture for this invocation (e.g. `en-US`).
    #[arg(long, global = true)]
    culture: Option<String>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a row version and print its encodings.
    RowVersion(RowVersionArgs),

    /// Bind an amount to a currency or culture and format it.
    Money(MoneyArgs),

    /// List currency groups of the region index.
    Regions(RegionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = vtypes_cli::resolve_settings(cli.config.as_deref(), cli.culture.as_deref());
    let configured_filter = settings
        .as_ref()
        .ok()
        .and_then(|s| s.log_filter.clone());
    init_tracing(cli.verbose, configured_filter, cli.json_logs);

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(2);
        }
    };
    settings.apply();
    tracing::debug!(culture = ?settings.culture, "settings applied");

    let result = match &cli.command {
        Commands::RowVersion(args) => run_row_version(args),
        Commands::Money(args) => run_money(args),
        Commands::Regions(args) => run_regions(args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

/// `RUST_LOG` wins, then the settings file, then the verbosity flags.
fn init_tracing(verbose: u8, configured: Option<String>, json: bool) {
    let fallback = configured.unwrap_or_else(|| {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
        .to_string()
    });
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}
