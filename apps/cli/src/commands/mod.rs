//! # Commands Module
//!
//! Executes parsed [`Command`]s against the inventory.
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  "update 3 25"                                                          │
//! │       │                                                                 │
//! │       │  Command::parse (stockroom-core)                                │
//! │       ▼                                                                 │
//! │  Command::Update { id: 3, quantity: 25 }                                │
//! │       │                                                                 │
//! │       │  dispatch() ── one exhaustive match                             │
//! │       ▼                                                                 │
//! │  product::update(&mut inventory, 3, 25)                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Outcome::Message("Stock updated: ...")                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Handlers only call the inventory and describe the result. Rendering is
//! left to the session so one-shot and interactive modes share it.

pub mod product;

use std::time::Instant;

use stockroom_core::{Command, Product};
use stockroom_db::InventoryManager;
use tracing::debug;

use crate::error::CliError;

/// What a command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Rows to show as a table.
    Products(Vec<Product>),

    /// A single product that was created or changed, with a message.
    Changed { message: String, product: Product },

    /// Plain confirmation or notice.
    Message(String),

    /// The help text.
    Help,

    /// The inventory was closed; the session should end.
    Closed,
}

/// Runs one command.
pub async fn dispatch(
    inventory: &mut InventoryManager,
    command: Command,
) -> Result<Outcome, CliError> {
    let start = Instant::now();
    let command_name = command.name();

    let outcome = match command {
        Command::Add { name, quantity } => product::add(inventory, &name, quantity).await?,
        Command::Update { id, quantity } => product::update(inventory, id, quantity).await?,
        Command::List => product::list(inventory)?,
        Command::Search { term } => product::search(inventory, &term)?,
        Command::Delete { id } => product::delete(inventory, id).await?,
        Command::Help => Outcome::Help,
        Command::Close => {
            inventory.close().await?;
            Outcome::Closed
        }
    };

    debug!(
        command = command_name,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Command complete"
    );
    Ok(outcome)
}
