//! # Inventory Snapshot
//!
//! The in-memory, ordered mirror of the `products` table.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Snapshot (BTreeMap by id)                          │
//! │                                                                         │
//! │   id 1 ──► Widget      10                                               │
//! │   id 3 ──► widget-pro   3        id 2 was deleted; order is kept        │
//! │   id 4 ──► Bolt       100   ◄─── push() appends the newest id           │
//! │                                                                         │
//! │   get / set_quantity / remove  : O(log n)                               │
//! │   iter / search / to_vec       : creation order                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Store ids are monotonic, so ordering by id is the same as ordering by
//! creation. Keying by id gives logarithmic lookup without a separate
//! position index to keep in step after removals.
//!
//! The snapshot is a cache. It never talks to the store; the inventory
//! manager in `stockroom-db` patches it after each committed write.

use std::collections::BTreeMap;

use crate::types::{Product, ProductId};

/// Ordered, id-indexed collection of products.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    records: BTreeMap<ProductId, Product>,
}

impl Snapshot {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Snapshot::default()
    }

    /// Builds a snapshot from a full store read.
    ///
    /// A repeated id keeps the last record seen.
    pub fn from_records(records: impl IntoIterator<Item = Product>) -> Self {
        Snapshot {
            records: records.into_iter().map(|p| (p.id, p)).collect(),
        }
    }

    /// Appends a freshly created record.
    ///
    /// The id must be newer than every id already present, which holds for
    /// ids handed out by the store.
    pub fn push(&mut self, product: Product) {
        debug_assert!(
            self.last_id().map_or(true, |last| product.id > last),
            "snapshot ids must be strictly increasing"
        );
        self.records.insert(product.id, product);
    }

    /// Replaces the quantity of the record with `id`, keeping its position.
    ///
    /// Returns the patched record, or `None` if the id is absent.
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) -> Option<&Product> {
        let product = self.records.get_mut(&id)?;
        product.quantity = quantity;
        Some(product)
    }

    /// Removes the record with `id`. The remaining records keep their order.
    pub fn remove(&mut self, id: ProductId) -> Option<Product> {
        self.records.remove(&id)
    }

    /// Looks up a record by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.records.get(&id)
    }

    /// Highest (most recently created) id, if any.
    pub fn last_id(&self) -> Option<ProductId> {
        self.records.keys().next_back().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.records.values()
    }

    /// Owned copy of every record, in creation order.
    pub fn to_vec(&self) -> Vec<Product> {
        self.iter().cloned().collect()
    }

    /// Records matching `term`, in creation order.
    ///
    /// See [`Product::matches`] for the predicate. An empty term returns
    /// every record.
    pub fn search(&self, term: &str) -> Vec<Product> {
        self.iter().filter(|p| p.matches(term)).cloned().collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Snapshot {
        Snapshot::from_records(vec![
            Product::new(1, "Widget", 10),
            Product::new(2, "Gadget", 5),
            Product::new(3, "widget-pro", 3),
        ])
    }

    fn ids(products: &[Product]) -> Vec<ProductId> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_search_by_name_keeps_order() {
        let snapshot = sample();
        assert_eq!(ids(&snapshot.search("widget")), vec![1, 3]);
    }

    #[test]
    fn test_search_by_id() {
        let snapshot = sample();
        assert_eq!(ids(&snapshot.search("2")), vec![2]);
    }

    #[test]
    fn test_search_empty_term_returns_all() {
        let snapshot = sample();
        assert_eq!(ids(&snapshot.search("")), vec![1, 2, 3]);
    }

    #[test]
    fn test_search_no_match() {
        let snapshot = sample();
        assert!(snapshot.search("sprocket").is_empty());
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let mut snapshot = sample();
        let removed = snapshot.remove(2).unwrap();
        assert_eq!(removed.name, "Gadget");
        assert_eq!(ids(&snapshot.to_vec()), vec![1, 3]);
        assert!(snapshot.search("2").is_empty());
    }

    #[test]
    fn test_remove_missing_is_none() {
        let mut snapshot = sample();
        assert!(snapshot.remove(99).is_none());
        assert_eq!(snapshot.len(), 3);
    }

    #[test]
    fn test_set_quantity_in_place() {
        let mut snapshot = sample();
        let patched = snapshot.set_quantity(2, 50).cloned().unwrap();
        assert_eq!(patched, Product::new(2, "Gadget", 50));
        assert_eq!(ids(&snapshot.to_vec()), vec![1, 2, 3]);
        assert!(snapshot.set_quantity(99, 1).is_none());
    }

    #[test]
    fn test_push_appends_at_end() {
        let mut snapshot = sample();
        snapshot.push(Product::new(4, "Bolt", 100));
        assert_eq!(snapshot.last_id(), Some(4));
        assert_eq!(ids(&snapshot.to_vec()), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_from_records_orders_by_id() {
        let snapshot = Snapshot::from_records(vec![
            Product::new(5, "E", 1),
            Product::new(2, "B", 1),
        ]);
        assert_eq!(ids(&snapshot.to_vec()), vec![2, 5]);
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = Snapshot::new();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.last_id(), None);
        assert!(snapshot.search("").is_empty());
    }
}
