//! # sufra
//!
//! Command-line front end for the item customization engine.
//!
//! ## Startup Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  parse args ──► load config ──► init tracing ──► load catalog          │
//! │                                                        │                │
//! │                         ┌──────────────────────────────┼──────────┐     │
//! │                         ▼                              ▼          ▼     │
//! │                    configure                         stock      audit   │
//! │                         │                              │          │     │
//! │                         └──────── JSON on stdout ──────┴──────────┘     │
//! │                                                                         │
//! │  Logs go to stderr so stdout stays machine-readable.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```bash
//! sufra --catalog menu.json configure --item shawarma \
//!     --toggle size:large --toggle extras:cheese --quantity 2 --commit
//! sufra --catalog menu.json stock --item shawarma --quantity 10
//! sufra --catalog menu.json audit
//! ```

mod cli;
mod commands;
mod config;
mod error;

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use config::CustomizerConfig;
use error::AppResult;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match CustomizerConfig::load(cli.config.clone()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("sufra: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging.level);

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: &CustomizerConfig) -> AppResult<()> {
    let catalog_path = config.catalog_path(cli.catalog)?;
    info!(path = %catalog_path.display(), "Loading catalog snapshot");
    let catalog = commands::load_catalog(&catalog_path)?;

    match cli.command {
        Commands::Configure {
            item,
            toggles,
            deselects,
            quantity,
            commit,
        } => commands::configure::run(
            &catalog,
            config,
            commands::configure::Args {
                item,
                toggles,
                deselects,
                quantity,
                commit,
            },
        ),
        Commands::Stock { item, quantity } => commands::stock::run(&catalog, config, &item, quantity),
        Commands::Audit => commands::audit::run(&catalog, config),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=sufra_core=trace` - Trace the engine only
/// - Default: `[logging] level` from the config file
fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
