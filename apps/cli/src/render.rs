//! # Rendering
//!
//! Turns command results into text: a right-aligned table, or JSON.
//!
//! ```text
//!  ID |       Name | Quantity
//! ----+------------+----------
//!   1 |     Widget |       10
//!   3 | widget-pro |        3
//! ```

use stockroom_core::Product;

use crate::error::CliError;

const HEADERS: [&str; 3] = ["ID", "Name", "Quantity"];

/// Formats products as a table, one row per product, columns right-aligned.
pub fn products_table(products: &[Product]) -> String {
    let rows: Vec<[String; 3]> = products
        .iter()
        .map(|p| [p.id.to_string(), p.name.clone(), p.quantity.to_string()])
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(String::from), &widths);

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w + 2)).collect();
    out.push_str(&rule.join("+"));
    out.push('\n');

    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 3], widths: &[usize; 3]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!(" {:>width$} ", cell, width = width))
        .collect();
    out.push_str(padded.join("|").trim_end());
    out.push('\n');
}

/// Serializes any result as pretty JSON.
pub fn json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CliError::internal(format!("JSON serialization failed: {}", e)))
}

/// Command summary shown by `help`.
pub const HELP: &str = "\
Commands:
  add <name> <quantity>     Add a product (name may contain spaces)
  update <id> <quantity>    Set the quantity of a product
  list                      Show every product
  search <term>             Find products by exact ID or by name (ignores case)
  delete <id>               Remove a product
  help                      Show this help
  quit                      Close the inventory and exit
";
