//! # Product Commands
//!
//! Handlers for add, update, list, search and delete.
//!
//! Not-found ids are not errors at the inventory level. These handlers turn
//! them into a notice so the user knows nothing changed.

use stockroom_core::ProductId;
use stockroom_db::InventoryManager;
use tracing::debug;

use super::Outcome;
use crate::error::CliError;

/// Adds a product.
pub async fn add(
    inventory: &mut InventoryManager,
    name: &str,
    quantity: i64,
) -> Result<Outcome, CliError> {
    debug!(name = %name, quantity, "add command");

    let product = inventory.add(name, quantity).await?;
    Ok(Outcome::Changed {
        message: format!("Product '{}' added with ID {}.", product.name, product.id),
        product,
    })
}

/// Sets a product's quantity.
pub async fn update(
    inventory: &mut InventoryManager,
    id: ProductId,
    quantity: i64,
) -> Result<Outcome, CliError> {
    debug!(id, quantity, "update command");

    match inventory.update(id, quantity).await? {
        Some(product) => Ok(Outcome::Changed {
            message: format!("Stock updated: '{}' now has {}.", product.name, product.quantity),
            product,
        }),
        None => Ok(not_found(id)),
    }
}

/// Lists every product.
pub fn list(inventory: &InventoryManager) -> Result<Outcome, CliError> {
    let products = inventory.list()?;
    if products.is_empty() {
        return Ok(Outcome::Message("Inventory is empty.".to_string()));
    }
    Ok(Outcome::Products(products))
}

/// Searches by exact id or name substring.
pub fn search(inventory: &InventoryManager, term: &str) -> Result<Outcome, CliError> {
    debug!(term = %term, "search command");

    let products = inventory.search(term)?;
    if products.is_empty() {
        return Ok(Outcome::Message(format!("No products match '{}'.", term)));
    }
    Ok(Outcome::Products(products))
}

/// Deletes a product.
pub async fn delete(inventory: &mut InventoryManager, id: ProductId) -> Result<Outcome, CliError> {
    debug!(id, "delete command");

    if inventory.delete(id).await? {
        Ok(Outcome::Message(format!("Product {} deleted.", id)))
    } else {
        Ok(not_found(id))
    }
}

fn not_found(id: ProductId) -> Outcome {
    Outcome::Message(format!("No product with ID {}; nothing changed.", id))
}
