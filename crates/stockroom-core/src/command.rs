//! # Commands
//!
//! The closed set of intents a user can raise, and their text syntax.
//!
//! ## Syntax
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add <name...> <quantity>     add Hex Bolt M8 100                       │
//! │  update <id> <quantity>       update 3 25                               │
//! │  list                         (aliases: ls, show)                       │
//! │  search <term...>             search widget                             │
//! │  delete <id>                  (alias: rm)                               │
//! │  help                         (alias: ?)                                │
//! │  quit                         (aliases: exit, close)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Keywords are case-insensitive. For `add`, the last word is the quantity
//! and everything before it is the name, so names may contain spaces.
//! For `search`, the rest of the line is the term, verbatim.

use crate::error::ValidationError;
use crate::types::ProductId;
use crate::validation::{parse_integer, validate_product_name, ValidationResult};

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { name: String, quantity: i64 },
    Update { id: ProductId, quantity: i64 },
    List,
    Search { term: String },
    Delete { id: ProductId },
    Help,
    Close,
}

impl Command {
    /// Parses one input line.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::Command;
    ///
    /// assert_eq!(
    ///     Command::parse("add Hex Bolt 100").unwrap(),
    ///     Command::Add { name: "Hex Bolt".to_string(), quantity: 100 }
    /// );
    /// assert!(Command::parse("update 3 lots").is_err());
    /// ```
    pub fn parse(line: &str) -> ValidationResult<Command> {
        let line = line.trim();
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        if keyword.is_empty() {
            return Err(ValidationError::required("command"));
        }

        match keyword.to_lowercase().as_str() {
            "add" => parse_add(rest),
            "update" => {
                let mut args = rest.split_whitespace();
                let id = parse_integer("id", args.next().unwrap_or(""))?;
                let quantity = parse_integer("quantity", args.next().unwrap_or(""))?;
                Ok(Command::Update { id, quantity })
            }
            "list" | "ls" | "show" => Ok(Command::List),
            "search" | "find" => {
                if rest.is_empty() {
                    return Err(ValidationError::required("search term"));
                }
                Ok(Command::Search {
                    term: rest.to_string(),
                })
            }
            "delete" | "rm" => {
                let id = parse_integer("id", rest)?;
                Ok(Command::Delete { id })
            }
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "close" => Ok(Command::Close),
            _ => Err(ValidationError::UnknownCommand(keyword.to_string())),
        }
    }

    /// Short name used in log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Add { .. } => "add",
            Command::Update { .. } => "update",
            Command::List => "list",
            Command::Search { .. } => "search",
            Command::Delete { .. } => "delete",
            Command::Help => "help",
            Command::Close => "close",
        }
    }
}

fn parse_add(rest: &str) -> ValidationResult<Command> {
    let (name, quantity_text) = match rest.rsplit_once(char::is_whitespace) {
        Some((name, quantity)) => (name.trim(), quantity),
        // A lone integer is a quantity without a name.
        None if rest.is_empty() || rest.parse::<i64>().is_ok() => {
            return Err(ValidationError::required("name"))
        }
        None => return Err(ValidationError::required("quantity")),
    };

    validate_product_name(name)?;
    let quantity = parse_integer("quantity", quantity_text)?;

    Ok(Command::Add {
        name: name.to_string(),
        quantity,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
