//! # Product Repository
//!
//! Database operations for the `products` table.
//!
//! Every statement is parameterized and commits on its own (SQLite
//! autocommit). There are no multi-statement transactions.
//!
//! ## Not-Found Semantics
//! `update_quantity` and `delete` report how many rows they touched instead
//! of failing on an unknown id. Callers decide whether zero is an error;
//! the inventory manager treats it as a no-op.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use stockroom_core::{Product, ProductId};

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let bolt = repo.insert("Bolt", 100).await?;
/// repo.update_quantity(bolt.id, 90).await?;
/// let all = repo.list_all().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Reads every product, ordered by id (creation order).
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, quantity
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Loaded products");
        Ok(products)
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: ProductId) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, quantity
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Inserts a new product and returns it with its store-assigned id.
    pub async fn insert(&self, name: &str, quantity: i64) -> DbResult<Product> {
        debug!(name = %name, quantity, "Inserting product");

        let result = sqlx::query(
            r#"
            INSERT INTO products (name, quantity)
            VALUES (?1, ?2)
            "#,
        )
        .bind(name)
        .bind(quantity)
        .execute(&self.pool)
        .await?;

        Ok(Product::new(result.last_insert_rowid(), name, quantity))
    }

    /// Sets the quantity of a product.
    ///
    /// ## Returns
    /// Number of rows affected: `1` if the id exists, `0` otherwise.
    pub async fn update_quantity(&self, id: ProductId, quantity: i64) -> DbResult<u64> {
        debug!(id, quantity, "Updating quantity");

        let result = sqlx::query(
            r#"
            UPDATE products
            SET quantity = ?1
            WHERE id = ?2
            "#,
        )
        .bind(quantity)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Hard-deletes a product.
    ///
    /// ## Returns
    /// Number of rows affected: `1` if the id existed, `0` otherwise.
    pub async fn delete(&self, id: ProductId) -> DbResult<u64> {
        debug!(id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Counts products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
