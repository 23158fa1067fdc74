//! # Stockroom Terminal Front End
//!
//! Plays the UI role for the inventory: collects text input, parses and
//! validates it, calls the [`InventoryManager`] and renders what comes back.
//!
//! ## Module Organization
//! ```text
//! stockroom_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── Flags + environment + defaults
//! ├── session.rs      ◄─── Interactive loop and one-shot runner
//! ├── commands/
//! │   ├── mod.rs      ◄─── dispatch(): one exhaustive match over Command
//! │   └── product.rs  ◄─── add / update / list / search / delete handlers
//! ├── render.rs       ◄─── Tables and JSON
//! └── error.rs        ◄─── CliError shown to the user
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Resolve config (flags > STOCKROOM_* env > defaults)                 │
//! │  2. Initialize logging (stderr, RUST_LOG overrides)                     │
//! │  3. Determine database path (platform data dir by default)              │
//! │  4. Open the InventoryManager (creates file + table if absent)          │
//! │  5. Run one command, or the interactive loop until quit / EOF           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod render;
pub mod session;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use stockroom_db::{DbConfig, InventoryManager};
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use error::CliError;
use session::SessionOptions;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "stockroom")]
#[command(about = "Stockroom - single-user inventory manager", long_about = None)]
pub struct Cli {
    /// Database file (default: platform data directory, or STOCKROOM_DB_PATH)
    #[arg(short, long, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Log more (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,

    /// Run one command and exit, e.g. `stockroom search bolt`.
    /// Without a command an interactive session starts.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

/// Runs the front end.
pub async fn run(cli: Cli) -> ExitCode {
    let config = AppConfig::from_env().with_overrides(cli.db, cli.json, cli.verbose);

    init_tracing(config.verbose);

    match run_with_config(&config, &cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            info!(code = ?e.code, "Exiting with error");
            ExitCode::FAILURE
        }
    }
}

async fn run_with_config(config: &AppConfig, command: &[String]) -> Result<(), CliError> {
    let db_path = config.database_path().map_err(|e| {
        eprintln!("Error: {}", e);
        e
    })?;
    info!(path = %db_path.display(), "Database path determined");

    let mut inventory = match InventoryManager::open(DbConfig::new(&db_path)).await {
        Ok(inventory) => inventory,
        Err(e) => {
            let e = CliError::from(e);
            eprintln!("Error: {}", e);
            return Err(e);
        }
    };

    let mut stdout = std::io::stdout().lock();

    if !command.is_empty() {
        return session::run_once(&mut inventory, command, &mut stdout, config.json).await;
    }

    let interactive = std::io::stdin().is_terminal();
    if interactive && !config.json {
        println!("Stockroom - {}", db_path.display());
        println!("Type 'help' for commands, 'quit' to exit.");
    }

    let options = SessionOptions {
        json: config.json,
        prompt: interactive && !config.json,
    };
    let input = BufReader::new(tokio::io::stdin());
    session::run_interactive(&mut inventory, input, &mut stdout, options).await
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - Default: WARN, so the session output stays readable
/// - `--verbose`: INFO, DEBUG for stockroom crates
/// - `RUST_LOG=...`: overrides both
///
/// Logs go to stderr; stdout carries tables and JSON only.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "info,stockroom_db=debug,stockroom_cli=debug,sqlx=warn"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
