//! # Inventory Manager
//!
//! The single authority over product records. It owns the store handle and
//! an in-memory [`Snapshot`] that mirrors the `products` table.
//!
//! ## Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    add / update / delete                                │
//! │                                                                         │
//! │  caller                                                                 │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  1. store write (single statement, autocommit)                          │
//! │     │                                                                   │
//! │     ├── Err ──► StorageWriteError, snapshot untouched                   │
//! │     │                                                                   │
//! │     ▼ Ok                                                                │
//! │  2. patch snapshot the same way                                         │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  3. return the new / patched record                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Read Path
//! `list`, `search` and `get` read the snapshot only. The store is read in
//! full once, at `initialize`, and again only through the diagnostic
//! [`InventoryManager::store_contents`].
//!
//! ## Lifecycle
//! ```text
//!   new() ──► Uninitialized ──initialize()──► Open ──close()──► Closed
//!                  │                                               ▲
//!                  └──────────────────close()──────────────────────┘
//! ```
//! Every operation other than `initialize`/`close` requires `Open`.
//! `Closed` is terminal; anything called on it is `InvalidState`.
//!
//! ## Concurrency
//! Mutating methods take `&mut self`, so a store write and its snapshot
//! patch can never interleave with another call. To share a manager across
//! tasks, wrap the whole manager in a `tokio::sync::Mutex`.

use tracing::{debug, info, warn};

use crate::error::{InventoryError, InventoryResult};
use crate::pool::{Database, DbConfig};
use stockroom_core::{Product, ProductId, Snapshot};

enum ManagerState {
    Uninitialized,
    Open { db: Database, snapshot: Snapshot },
    Closed,
}

impl ManagerState {
    fn name(&self) -> &'static str {
        match self {
            ManagerState::Uninitialized => "uninitialized",
            ManagerState::Open { .. } => "open",
            ManagerState::Closed => "closed",
        }
    }
}

/// Coordinates the `products` table with its in-memory snapshot.
///
/// ## Usage
/// ```rust,ignore
/// let mut inventory = InventoryManager::open(DbConfig::new("stock.db")).await?;
///
/// let bolt = inventory.add("Bolt", 100).await?;
/// inventory.update(bolt.id, 90).await?;
/// let hits = inventory.search("bolt")?;
///
/// inventory.close().await?;
/// ```
pub struct InventoryManager {
    config: DbConfig,
    state: ManagerState,
}

impl InventoryManager {
    /// Creates a manager that has not touched the store yet.
    pub fn new(config: DbConfig) -> Self {
        InventoryManager {
            config,
            state: ManagerState::Uninitialized,
        }
    }

    /// Creates and initializes a manager in one step.
    pub async fn open(config: DbConfig) -> InventoryResult<Self> {
        let mut manager = InventoryManager::new(config);
        manager.initialize().await?;
        Ok(manager)
    }

    /// Opens the store, ensures the schema and loads every row.
    ///
    /// ## Errors
    /// * `StorageUnavailable` - file can't be opened, schema statement
    ///   failed, or the initial read failed
    /// * `InvalidState` - already open, or closed
    pub async fn initialize(&mut self) -> InventoryResult<()> {
        if !matches!(self.state, ManagerState::Uninitialized) {
            return Err(self.invalid_state("initialize"));
        }

        let db = Database::new(self.config.clone().ensure_schema(true))
            .await
            .map_err(InventoryError::StorageUnavailable)?;

        let records = match db.products().list_all().await {
            Ok(records) => records,
            Err(e) => {
                db.close().await;
                return Err(InventoryError::StorageUnavailable(e));
            }
        };

        let snapshot = Snapshot::from_records(records);
        info!(products = snapshot.len(), "Inventory loaded");

        self.state = ManagerState::Open { db, snapshot };
        Ok(())
    }

    /// Inserts a product and appends it to the snapshot.
    ///
    /// The name is not validated here; rejecting empty input is the
    /// caller's job.
    pub async fn add(&mut self, name: &str, quantity: i64) -> InventoryResult<Product> {
        let (db, snapshot) = self.open_mut("add")?;

        let product = db
            .products()
            .insert(name, quantity)
            .await
            .map_err(|e| InventoryError::write("insert", e))?;

        snapshot.push(product.clone());
        info!(id = product.id, name = %product.name, quantity, "Product added");

        Ok(product)
    }

    /// Sets the quantity of a product, keeping its position.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - the patched record
    /// * `Ok(None)` - no product with that id; nothing changed
    pub async fn update(
        &mut self,
        id: ProductId,
        new_quantity: i64,
    ) -> InventoryResult<Option<Product>> {
        let (db, snapshot) = self.open_mut("update")?;

        let rows = db
            .products()
            .update_quantity(id, new_quantity)
            .await
            .map_err(|e| InventoryError::write("update", e))?;

        if rows == 0 {
            debug!(id, "Update matched no product");
            return Ok(None);
        }

        let patched = snapshot.set_quantity(id, new_quantity).cloned();
        match &patched {
            Some(_) => info!(id, quantity = new_quantity, "Quantity updated"),
            None => warn!(id, "Store row updated but missing from snapshot"),
        }

        Ok(patched)
    }

    /// Deletes a product.
    ///
    /// ## Returns
    /// `true` if a record was removed, `false` if the id was unknown.
    pub async fn delete(&mut self, id: ProductId) -> InventoryResult<bool> {
        let (db, snapshot) = self.open_mut("delete")?;

        let rows = db
            .products()
            .delete(id)
            .await
            .map_err(|e| InventoryError::write("delete", e))?;

        let removed = snapshot.remove(id).is_some();
        if rows > 0 && !removed {
            warn!(id, "Store row deleted but missing from snapshot");
        }
        if removed {
            info!(id, "Product deleted");
        } else {
            debug!(id, "Delete matched no product");
        }

        Ok(removed)
    }

    /// Every product in creation order. Never touches the store.
    pub fn list(&self) -> InventoryResult<Vec<Product>> {
        Ok(self.snapshot("list")?.to_vec())
    }

    /// Products whose id equals `term` or whose name contains it,
    /// ignoring case. Creation order. An empty term matches everything.
    pub fn search(&self, term: &str) -> InventoryResult<Vec<Product>> {
        let results = self.snapshot("search")?.search(term);
        debug!(term = %term, count = results.len(), "Search complete");
        Ok(results)
    }

    /// Looks up one product in the snapshot.
    pub fn get(&self, id: ProductId) -> InventoryResult<Option<Product>> {
        Ok(self.snapshot("get")?.get(id).cloned())
    }

    /// Number of products in the snapshot.
    pub fn len(&self) -> InventoryResult<usize> {
        Ok(self.snapshot("len")?.len())
    }

    pub fn is_empty(&self) -> InventoryResult<bool> {
        Ok(self.snapshot("is_empty")?.is_empty())
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ManagerState::Open { .. })
    }

    /// Reads the store directly, bypassing the snapshot.
    ///
    /// Used for diagnostics: outside a running call, the result equals
    /// [`list`](Self::list).
    pub async fn store_contents(&self) -> InventoryResult<Vec<Product>> {
        let db = match &self.state {
            ManagerState::Open { db, .. } => db,
            _ => return Err(self.invalid_state("read store")),
        };

        db.products()
            .list_all()
            .await
            .map_err(InventoryError::StorageReadError)
    }

    /// Releases the store connection and discards the snapshot.
    ///
    /// Closing an uninitialized manager is allowed. Closing twice is
    /// `InvalidState`.
    pub async fn close(&mut self) -> InventoryResult<()> {
        match std::mem::replace(&mut self.state, ManagerState::Closed) {
            ManagerState::Open { db, .. } => {
                db.close().await;
                info!("Inventory closed");
                Ok(())
            }
            ManagerState::Uninitialized => Ok(()),
            ManagerState::Closed => Err(self.invalid_state("close")),
        }
    }

    // -------------------------------------------------------------------------
    // State helpers
    // -------------------------------------------------------------------------

    fn invalid_state(&self, operation: &'static str) -> InventoryError {
        InventoryError::InvalidState {
            operation,
            state: self.state.name(),
        }
    }

    fn snapshot(&self, operation: &'static str) -> InventoryResult<&Snapshot> {
        match &self.state {
            ManagerState::Open { snapshot, .. } => Ok(snapshot),
            _ => Err(self.invalid_state(operation)),
        }
    }

    fn open_mut(&mut self, operation: &'static str) -> InventoryResult<(&Database, &mut Snapshot)> {
        match &mut self.state {
            ManagerState::Open { db, snapshot } => Ok((&*db, snapshot)),
            other => Err(InventoryError::InvalidState {
                operation,
                state: other.name(),
            }),
        }
    }
}

impl std::fmt::Debug for InventoryManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("InventoryManager");
        s.field("path", &self.config.database_path)
            .field("state", &self.state.name());
        if let ManagerState::Open { snapshot, .. } = &self.state {
            s.field("products", &snapshot.len());
        }
        s.finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;

    async fn open_in_memory() -> InventoryManager {
        InventoryManager::open(DbConfig::in_memory()).await.unwrap()
    }

    async fn seeded() -> InventoryManager {
        let mut inventory = open_in_memory().await;
        inventory.add("Widget", 10).await.unwrap();
        inventory.add("Gadget", 5).await.unwrap();
        inventory.add("widget-pro", 3).await.unwrap();
        inventory
    }

    fn ids(products: &[Product]) -> Vec<ProductId> {
        products.iter().map(|p| p.id).collect()
    }

    async fn assert_in_sync(inventory: &InventoryManager) {
        assert_eq!(
            inventory.list().unwrap(),
            inventory.store_contents().await.unwrap()
        );
    }

    /// Makes every write to `products` fail at the store level.
    async fn deny_writes(inventory: &InventoryManager) {
        let ManagerState::Open { db, .. } = &inventory.state else {
            panic!("manager not open");
        };
        for op in ["INSERT", "UPDATE", "DELETE"] {
            let sql = format!(
                "CREATE TRIGGER deny_{op} BEFORE {op} ON products \
                 BEGIN SELECT RAISE(ABORT, 'writes disabled'); END"
            );
            sqlx::query(&sql).execute(db.pool()).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_starts_empty() {
        let inventory = open_in_memory().await;
        assert!(inventory.is_open());
        assert!(inventory.is_empty().unwrap());
        assert!(inventory.list().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_by_name_and_id() {
        let inventory = seeded().await;

        assert_eq!(ids(&inventory.search("widget").unwrap()), vec![1, 3]);
        assert_eq!(ids(&inventory.search("2").unwrap()), vec![2]);
        assert_eq!(ids(&inventory.search("").unwrap()), vec![1, 2, 3]);
        assert!(inventory.search("sprocket").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_then_list() {
        let mut inventory = seeded().await;

        let bolt = inventory.add("Bolt", 100).await.unwrap();
        let list = inventory.list().unwrap();

        assert_eq!(list.last(), Some(&bolt));
        assert_eq!(list.iter().filter(|p| p.name == "Bolt").count(), 1);
        assert!(!ids(&list[..3]).contains(&bolt.id));
        assert_in_sync(&inventory).await;
    }

    #[tokio::test]
    async fn test_ids_strictly_increase_across_deletes() {
        let mut inventory = open_in_memory().await;
        let mut issued = Vec::new();

        for i in 0..6 {
            let p = inventory.add(&format!("item-{i}"), i).await.unwrap();
            issued.push(p.id);
            if i % 2 == 1 {
                assert!(inventory.delete(p.id).await.unwrap());
            }
        }

        assert!(issued.windows(2).all(|w| w[0] < w[1]));
        assert_in_sync(&inventory).await;
    }

    #[tokio::test]
    async fn test_update_patches_in_place() {
        let mut inventory = seeded().await;

        let updated = inventory.update(2, 42).await.unwrap();
        assert_eq!(updated, Some(Product::new(2, "Gadget", 42)));
        assert_eq!(ids(&inventory.list().unwrap()), vec![1, 2, 3]);
        assert_eq!(inventory.get(2).unwrap().unwrap().quantity, 42);
        assert_in_sync(&inventory).await;
    }

    #[tokio::test]
    async fn test_missing_id_is_noop() {
        let mut inventory = seeded().await;
        let before = inventory.list().unwrap();

        assert_eq!(inventory.update(999_999, 5).await.unwrap(), None);
        assert!(!inventory.delete(999_999).await.unwrap());

        assert_eq!(inventory.list().unwrap(), before);
        assert_in_sync(&inventory).await;
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let mut inventory = seeded().await;

        assert!(inventory.delete(2).await.unwrap());

        assert_eq!(ids(&inventory.list().unwrap()), vec![1, 3]);
        assert!(inventory.search("2").unwrap().is_empty());
        assert_eq!(inventory.get(2).unwrap(), None);
        assert_in_sync(&inventory).await;
    }

    #[tokio::test]
    async fn test_stays_in_sync_over_mixed_operations() {
        let mut inventory = open_in_memory().await;

        for round in 0..4 {
            let a = inventory.add("Nut", round).await.unwrap();
            assert_in_sync(&inventory).await;
            let b = inventory.add("Washer", round * 10).await.unwrap();
            assert_in_sync(&inventory).await;
            inventory.update(a.id, round + 100).await.unwrap();
            assert_in_sync(&inventory).await;
            inventory.delete(b.id).await.unwrap();
            assert_in_sync(&inventory).await;
            inventory.update(b.id, 1).await.unwrap();
            assert_in_sync(&inventory).await;
        }

        assert_eq!(inventory.len().unwrap(), 4);
    }

    #[tokio::test]
    async fn test_failed_writes_leave_snapshot_untouched() {
        let mut inventory = seeded().await;
        deny_writes(&inventory).await;
        let before = inventory.list().unwrap();

        let err = inventory.add("Bolt", 1).await.unwrap_err();
        assert!(matches!(
            err,
            InventoryError::StorageWriteError {
                operation: "insert",
                ..
            }
        ));

        let err = inventory.update(1, 0).await.unwrap_err();
        assert!(matches!(err, InventoryError::StorageWriteError { .. }));

        let err = inventory.delete(1).await.unwrap_err();
        assert!(matches!(err, InventoryError::StorageWriteError { .. }));

        assert_eq!(inventory.list().unwrap(), before);
        assert_in_sync(&inventory).await;
    }

    #[tokio::test]
    async fn test_operations_after_close_are_invalid() {
        let mut inventory = seeded().await;
        inventory.close().await.unwrap();

        assert!(!inventory.is_open());
        assert!(matches!(
            inventory.add("Bolt", 1).await,
            Err(InventoryError::InvalidState { operation: "add", state: "closed" })
        ));
        assert!(matches!(
            inventory.update(1, 1).await,
            Err(InventoryError::InvalidState { .. })
        ));
        assert!(matches!(
            inventory.delete(1).await,
            Err(InventoryError::InvalidState { .. })
        ));
        assert!(matches!(
            inventory.list(),
            Err(InventoryError::InvalidState { .. })
        ));
        assert!(matches!(
            inventory.search("w"),
            Err(InventoryError::InvalidState { .. })
        ));
        assert!(matches!(
            inventory.store_contents().await,
            Err(InventoryError::InvalidState { .. })
        ));
        assert!(matches!(
            inventory.initialize().await,
            Err(InventoryError::InvalidState { .. })
        ));
        assert!(matches!(
            inventory.close().await,
            Err(InventoryError::InvalidState { operation: "close", .. })
        ));
    }

    #[tokio::test]
    async fn test_operations_before_initialize_are_invalid() {
        let mut inventory = InventoryManager::new(DbConfig::in_memory());

        assert!(matches!(
            inventory.list(),
            Err(InventoryError::InvalidState { state: "uninitialized", .. })
        ));
        assert!(matches!(
            inventory.add("Bolt", 1).await,
            Err(InventoryError::InvalidState { .. })
        ));

        inventory.initialize().await.unwrap();
        assert!(matches!(
            inventory.initialize().await,
            Err(InventoryError::InvalidState { state: "open", .. })
        ));
    }

    #[tokio::test]
    async fn test_close_uninitialized() {
        let mut inventory = InventoryManager::new(DbConfig::in_memory());
        inventory.close().await.unwrap();
        assert!(matches!(
            inventory.initialize().await,
            Err(InventoryError::InvalidState { state: "closed", .. })
        ));
    }

    #[tokio::test]
    async fn test_unavailable_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("stock.db");

        let err = InventoryManager::open(DbConfig::new(path)).await.unwrap_err();
        assert!(matches!(err, InventoryError::StorageUnavailable(_)));
        assert!(err.is_fatal());
    }

    #[tokio::test]
    async fn test_unreadable_products_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stock.db");

        // A products table from some other program, without name/quantity.
        let db = Database::new(DbConfig::new(&path).ensure_schema(false))
            .await
            .unwrap();
        sqlx::query("CREATE TABLE products (id INTEGER PRIMARY KEY, label TEXT)")
            .execute(db.pool())
            .await
            .unwrap();
        db.close().await;

        let mut inventory = InventoryManager::new(DbConfig::new(&path));
        let err = inventory.initialize().await.unwrap_err();

        assert!(matches!(
            err,
            InventoryError::StorageUnavailable(DbError::QueryFailed(_))
        ));
        assert!(err.is_fatal());
        assert!(!inventory.is_open());
        assert!(matches!(
            inventory.list(),
            Err(InventoryError::InvalidState { state: "uninitialized", .. })
        ));
    }

    #[tokio::test]
    async fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stock.db");

        let mut inventory = InventoryManager::open(DbConfig::new(&path)).await.unwrap();
        inventory.add("Widget", 10).await.unwrap();
        let gadget = inventory.add("Gadget", 5).await.unwrap();
        inventory.add("Bolt", 100).await.unwrap();
        inventory.update(gadget.id, 7).await.unwrap();
        let before = inventory.list().unwrap();
        inventory.close().await.unwrap();

        let mut reopened = InventoryManager::open(DbConfig::new(&path)).await.unwrap();
        assert_eq!(reopened.list().unwrap(), before);

        // Ids keep increasing after a reopen, even past a deleted max id.
        let last = before.last().unwrap().id;
        assert!(reopened.delete(last).await.unwrap());
        let next = reopened.add("Nut", 1).await.unwrap();
        assert!(next.id > last);
        reopened.close().await.unwrap();
    }

    #[tokio::test]
    async fn test_accepts_empty_name() {
        let mut inventory = open_in_memory().await;
        let p = inventory.add("", 0).await.unwrap();
        assert_eq!(inventory.get(p.id).unwrap(), Some(p));
    }
}
