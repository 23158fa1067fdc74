//! # Stockroom Entry Point
//!
//! ```bash
//! stockroom                       # interactive session
//! stockroom list                  # one command, then exit
//! stockroom --db ./stock.db search bolt
//! ```

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    let cli = stockroom_cli::Cli::parse();
    stockroom_cli::run(cli).await
}
