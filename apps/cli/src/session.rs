//! # Session
//!
//! The interactive command loop and the one-shot runner.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  loop                                                                   │
//! │    line ◄── input (stdin)                                               │
//! │      │  EOF ──────────────────────────────► close inventory, return     │
//! │      ▼                                                                  │
//! │    Command::parse ── Err ──► print message, next line                   │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │    dispatch ── Err ──► print message; fatal? return Err                 │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │    render outcome; Closed? return                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Input and output are generic so tests can drive a session from a byte
//! slice and capture what it prints.

use std::io::Write;

use serde_json::json;
use stockroom_core::Command;
use stockroom_db::InventoryManager;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{info, warn};

use crate::commands::{dispatch, Outcome};
use crate::error::CliError;
use crate::render;

/// Output settings for a session.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Print results as JSON.
    pub json: bool,

    /// Print a `> ` prompt before each line (interactive terminals).
    pub prompt: bool,
}

/// Reads commands from `input` until `quit`, end of input, or a fatal error.
///
/// The inventory is closed on the way out unless a fatal error ended the
/// session.
pub async fn run_interactive<R, W>(
    inventory: &mut InventoryManager,
    input: R,
    out: &mut W,
    options: SessionOptions,
) -> Result<(), CliError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        if options.prompt {
            write!(out, "> ").map_err(io_error)?;
            out.flush().map_err(io_error)?;
        }

        let line = match lines.next_line().await.map_err(io_error)? {
            Some(line) => line,
            None => {
                info!("End of input");
                if inventory.is_open() {
                    inventory.close().await?;
                }
                return Ok(());
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                write_error(out, &CliError::from(e), options.json)?;
                continue;
            }
        };

        match dispatch(inventory, command).await {
            Ok(Outcome::Closed) => {
                write_outcome(out, &Outcome::Closed, options.json)?;
                return Ok(());
            }
            Ok(outcome) => write_outcome(out, &outcome, options.json)?,
            Err(e) if e.is_fatal() => {
                warn!(code = ?e.code, "Ending session after fatal error");
                write_error(out, &e, options.json)?;
                return Err(e);
            }
            Err(e) => write_error(out, &e, options.json)?,
        }
    }
}

/// Runs a single command given as words, e.g. `["search", "bolt"]`, then
/// closes the inventory.
pub async fn run_once<W: Write>(
    inventory: &mut InventoryManager,
    words: &[String],
    out: &mut W,
    json: bool,
) -> Result<(), CliError> {
    let result = execute_line(inventory, &words.join(" ")).await;

    if inventory.is_open() {
        inventory.close().await?;
    }

    match result {
        Ok(outcome) => write_outcome(out, &outcome, json),
        Err(e) => {
            write_error(out, &e, json)?;
            Err(e)
        }
    }
}

async fn execute_line(inventory: &mut InventoryManager, line: &str) -> Result<Outcome, CliError> {
    let command = Command::parse(line)?;
    dispatch(inventory, command).await
}

// =============================================================================
// Output
// =============================================================================

fn write_outcome<W: Write>(out: &mut W, outcome: &Outcome, json: bool) -> Result<(), CliError> {
    let text = match (outcome, json) {
        (Outcome::Products(products), false) => render::products_table(products),
        (Outcome::Products(products), true) => render::json(products)?,
        (Outcome::Changed { message, .. }, false) => format!("{}\n", message),
        (Outcome::Changed { message, product }, true) => {
            render::json(&json!({ "message": message, "product": product }))?
        }
        (Outcome::Message(message), false) => format!("{}\n", message),
        (Outcome::Message(message), true) => render::json(&json!({ "message": message }))?,
        (Outcome::Help, false) => render::HELP.to_string(),
        (Outcome::Help, true) => render::json(&json!({ "help": render::HELP }))?,
        (Outcome::Closed, false) => "Inventory closed.\n".to_string(),
        (Outcome::Closed, true) => render::json(&json!({ "message": "Inventory closed." }))?,
    };

    out.write_all(text.as_bytes()).map_err(io_error)?;
    if json {
        writeln!(out).map_err(io_error)?;
    }
    Ok(())
}

fn write_error<W: Write>(out: &mut W, err: &CliError, json: bool) -> Result<(), CliError> {
    if json {
        writeln!(out, "{}", render::json(err)?).map_err(io_error)
    } else {
        writeln!(out, "Error: {}", err).map_err(io_error)
    }
}

fn io_error(e: std::io::Error) -> CliError {
    CliError::internal(format!("Terminal I/O failed: {}", e))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use stockroom_db::DbConfig;

    async fn drive(script: &str, json: bool) -> (InventoryManager, String, Result<(), CliError>) {
        let mut inventory = InventoryManager::open(DbConfig::in_memory()).await.unwrap();
        let mut out = Vec::new();
        let options = SessionOptions {
            json,
            prompt: false,
        };
        let result = run_interactive(&mut inventory, script.as_bytes(), &mut out, options).await;
        (inventory, String::from_utf8(out).unwrap(), result)
    }

    #[tokio::test]
    async fn test_add_list_quit() {
        let script = "add Widget 10\nadd Gadget 5\nlist\nquit\n";
        let (inventory, out, result) = drive(script, false).await;

        result.unwrap();
        assert!(!inventory.is_open());
        assert!(out.contains("Product 'Widget' added with ID 1."));
        assert!(out.contains("  2 | Gadget |        5"));
        assert!(out.ends_with("Inventory closed.\n"));
    }

    #[tokio::test]
    async fn test_bad_input_does_not_end_session() {
        let script = "add Bolt lots\n\nupdate x 1\nfrobnicate\nadd Bolt 100\n";
        let (inventory, out, result) = drive(script, false).await;

        result.unwrap();
        assert!(out.contains("Error: Invalid quantity. Enter a valid integer."));
        assert!(out.contains("Error: Invalid id. Enter a valid integer."));
        assert!(out.contains("Error: Unknown command: 'frobnicate'"));
        assert!(out.contains("Product 'Bolt' added with ID 1."));
        // End of input closes the inventory.
        assert!(!inventory.is_open());
    }

    #[tokio::test]
    async fn test_search_update_delete() {
        let script = "add Widget 10\nadd Gadget 5\nadd widget-pro 3\n\
                      update 2 50\ndelete 1\ndelete 1\nsearch widget\n";
        let (_, out, result) = drive(script, false).await;

        result.unwrap();
        assert!(out.contains("Stock updated: 'Gadget' now has 50."));
        assert!(out.contains("Product 1 deleted."));
        assert!(out.contains("No product with ID 1; nothing changed."));
        assert!(out.contains("  3 | widget-pro |        3"));
        assert!(!out.contains("     Widget |"));
    }

    #[tokio::test]
    async fn test_json_output() {
        let script = "add Bolt 100\nsearch bolt\nupdate x 1\n";
        let (_, out, result) = drive(script, true).await;

        result.unwrap();
        let docs: Vec<serde_json::Value> = serde_json::Deserializer::from_str(&out)
            .into_iter::<serde_json::Value>()
            .map(|v| v.unwrap())
            .collect();

        assert_eq!(docs.len(), 3);
        assert_eq!(docs[0]["product"]["id"], 1);
        assert_eq!(docs[1][0]["name"], "Bolt");
        assert_eq!(docs[2]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_json_output_includes_help() {
        let script = "help\nlist\nquit\n";
        let (_, out, result) = drive(script, true).await;

        result.unwrap();
        let docs: Vec<serde_json::Value> = serde_json::Deserializer::from_str(&out)
            .into_iter::<serde_json::Value>()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(docs.len(), 3);
        assert_eq!(docs[0]["help"], render::HELP);
        assert_eq!(docs[1]["message"], "Inventory is empty.");
        assert_eq!(docs[2]["message"], "Inventory closed.");
    }

    #[tokio::test]
    async fn test_run_once() {
        let mut inventory = InventoryManager::open(DbConfig::in_memory()).await.unwrap();
        let mut out = Vec::new();
        let words = vec!["add".to_string(), "Hex".to_string(), "Bolt".to_string(), "7".to_string()];

        run_once(&mut inventory, &words, &mut out, false).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Product 'Hex Bolt' added with ID 1.\n"
        );
        assert!(!inventory.is_open());
    }

    #[tokio::test]
    async fn test_run_once_reports_validation_error() {
        let mut inventory = InventoryManager::open(DbConfig::in_memory()).await.unwrap();
        let mut out = Vec::new();
        let words = vec!["delete".to_string(), "seven".to_string()];

        let err = run_once(&mut inventory, &words, &mut out, false).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(!inventory.is_open());
    }
}
