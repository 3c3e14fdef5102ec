//! Shopping cart state manager.
//!
//! The cart owns the list of line items exclusively; consumers mutate it
//! through the methods here and read it through [`CartSnapshot`]s. Every
//! mutation persists synchronously to the backing [`StateStore`] under
//! [`keys::CART`] and notifies subscribers with a fresh snapshot.
//!
//! All operations are total: an unknown product id is a silent no-op, never
//! an error.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pawly_core::ProductId;

use crate::api::types::Product;
use crate::store::{StateStore, keys};

/// One product-and-quantity entry in the cart.
///
/// Display fields (`image_url`, `category`) are copied from the product at
/// the time it was added; the stored `unit_price` is authoritative for all
/// totals until checkout submits the snapshot to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Id of the product this line refers to. Unique within the cart.
    pub product_id: ProductId,
    /// Product name at the time it was added.
    pub name: String,
    /// Price per unit at the time it was added.
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    /// Number of units; never less than 1.
    pub quantity: u32,
    /// Product image reference, if the product had one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Product category, if the product had one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl CartLineItem {
    /// Line subtotal: `unit_price * quantity`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Read-only derived view of the cart: items plus computed totals.
///
/// Recomputed on every read, never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSnapshot {
    /// Line items in insertion order.
    pub items: Vec<CartLineItem>,
    /// Sum of all line item quantities.
    pub item_count: u32,
    /// Sum of `unit_price * quantity` over all line items.
    pub total: Decimal,
}

impl CartSnapshot {
    /// An empty cart snapshot.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            item_count: 0,
            total: Decimal::ZERO,
        }
    }

    /// Whether the cart has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The total formatted for display (e.g., "$29.00").
    #[must_use]
    pub fn total_display(&self) -> String {
        pawly_core::format_amount(self.total)
    }
}

/// Callback invoked with a fresh snapshot after every cart mutation.
type Subscriber = Box<dyn Fn(&CartSnapshot) + Send + Sync>;

/// The shopping cart state manager.
///
/// Holds exactly one line item per distinct product id, preserving insertion
/// order. An item re-added after removal is appended, not reinserted at its
/// original position.
pub struct CartManager<S: StateStore> {
    store: S,
    items: Vec<CartLineItem>,
    subscribers: Vec<Subscriber>,
}

impl<S: StateStore> CartManager<S> {
    /// Create a cart manager, restoring any persisted items from `store`.
    #[must_use]
    pub fn new(store: S) -> Self {
        let items = store.load::<Vec<CartLineItem>>(keys::CART).unwrap_or_default();
        Self {
            store,
            items,
            subscribers: Vec::new(),
        }
    }

    /// Register a callback invoked with a fresh snapshot after every
    /// mutation. This replaces the original UI's implicit re-render trigger.
    pub fn subscribe(&mut self, subscriber: impl Fn(&CartSnapshot) + Send + Sync + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Add `quantity` units of `product` to the cart.
    ///
    /// If a line item for the product already exists its quantity is
    /// incremented; otherwise a new line item is appended with the product's
    /// display fields copied in.
    pub fn add_item(&mut self, product: &Product, quantity: u32) {
        let quantity = quantity.max(1);
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            item.quantity = item.quantity.saturating_add(quantity);
        } else {
            self.items.push(CartLineItem {
                product_id: product.id,
                name: product.name.clone(),
                unit_price: product.price,
                quantity,
                image_url: product.image.clone(),
                category: product.category.clone(),
            });
        }
        self.persist_and_notify();
    }

    /// Remove the line item for `product_id`. No-op if absent.
    pub fn remove_item(&mut self, product_id: ProductId) {
        let before = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        if self.items.len() != before {
            self.persist_and_notify();
        }
    }

    /// Set the quantity for `product_id`, clamped to at least 1.
    ///
    /// Reducing below 1 clamps to 1; removal is [`Self::remove_item`].
    /// No-op if the id is absent.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = quantity.max(1);
            self.persist_and_notify();
        }
    }

    /// Empty the cart. Used after checkout completes.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist_and_notify();
    }

    /// Current items plus derived count and total.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        let item_count = self
            .items
            .iter()
            .fold(0u32, |count, i| count.saturating_add(i.quantity));
        let total = self.items.iter().map(CartLineItem::line_total).sum();
        CartSnapshot {
            items: self.items.clone(),
            item_count,
            total,
        }
    }

    fn persist_and_notify(&self) {
        self.store.save(keys::CART, &self.items);
        let snapshot = self.snapshot();
        for subscriber in &self.subscribers {
            subscriber(&snapshot);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;
    use crate::store::MemoryStore;

    fn product(id: i64, price: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            description: None,
            price: price.parse().unwrap(),
            image: None,
            category: Some("toys".to_owned()),
            stock: None,
        }
    }

    #[test]
    fn test_distinct_ids_sum_counts() {
        let mut cart = CartManager::new(MemoryStore::new());
        cart.add_item(&product(1, "1.00"), 2);
        cart.add_item(&product(2, "2.00"), 3);
        cart.add_item(&product(3, "3.00"), 1);

        let snap = cart.snapshot();
        assert_eq!(snap.items.len(), 3);
        assert_eq!(snap.item_count, 6);
    }

    #[test]
    fn test_same_product_folds_into_one_line() {
        let mut cart = CartManager::new(MemoryStore::new());
        let p = product(1, "1.00");
        cart.add_item(&p, 2);
        cart.add_item(&p, 3);

        let snap = cart.snapshot();
        assert_eq!(snap.items.len(), 1);
        assert_eq!(snap.items.first().unwrap().quantity, 5);
    }

    #[test]
    fn test_rapid_double_add_scenario() {
        // id 7 at 14.50, added twice with quantity 1.
        let mut cart = CartManager::new(MemoryStore::new());
        let p = product(7, "14.50");
        cart.add_item(&p, 1);
        cart.add_item(&p, 1);

        let snap = cart.snapshot();
        assert_eq!(snap.items.len(), 1);
        assert_eq!(snap.items.first().unwrap().quantity, 2);
        assert_eq!(snap.item_count, 2);
        assert_eq!(snap.total, Decimal::new(2900, 2));
        assert_eq!(snap.total_display(), "$29.00");
    }

    #[test]
    fn test_add_item_saturates_instead_of_overflowing() {
        let mut cart = CartManager::new(MemoryStore::new());
        let p = product(1, "1.00");
        cart.add_item(&p, u32::MAX);
        cart.add_item(&p, 5);

        let snap = cart.snapshot();
        assert_eq!(snap.items.first().unwrap().quantity, u32::MAX);
        assert_eq!(snap.item_count, u32::MAX);
    }

    #[test]
    fn test_set_quantity_clamps_to_one() {
        let mut cart = CartManager::new(MemoryStore::new());
        cart.add_item(&product(1, "1.00"), 4);
        cart.set_quantity(ProductId::new(1), 0);
        assert_eq!(cart.snapshot().item_count, 1);
        cart.set_quantity(ProductId::new(1), 9);
        assert_eq!(cart.snapshot().item_count, 9);
    }

    #[test]
    fn test_set_quantity_unknown_id_is_noop() {
        let mut cart = CartManager::new(MemoryStore::new());
        cart.add_item(&product(1, "1.00"), 1);
        cart.set_quantity(ProductId::new(99), 5);
        assert_eq!(cart.snapshot().item_count, 1);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut cart = CartManager::new(MemoryStore::new());
        cart.add_item(&product(1, "2.50"), 2);
        let before = cart.snapshot();
        cart.remove_item(ProductId::new(99));
        assert_eq!(cart.snapshot(), before);
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut cart = CartManager::new(MemoryStore::new());
        cart.add_item(&product(1, "2.50"), 2);
        cart.clear();

        let snap = cart.snapshot();
        assert!(snap.is_empty());
        assert_eq!(snap.item_count, 0);
        assert_eq!(snap.total, Decimal::ZERO);
        assert_eq!(snap.total_display(), "$0.00");
    }

    #[test]
    fn test_readding_after_removal_appends() {
        let mut cart = CartManager::new(MemoryStore::new());
        cart.add_item(&product(1, "1.00"), 1);
        cart.add_item(&product(2, "1.00"), 1);
        cart.add_item(&product(3, "1.00"), 1);
        cart.remove_item(ProductId::new(1));
        cart.add_item(&product(1, "1.00"), 1);

        let order: Vec<i64> = cart
            .snapshot()
            .items
            .iter()
            .map(|i| i.product_id.as_i64())
            .collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn test_persist_restore_roundtrip() {
        let store = Arc::new(MemoryStore::new());
        {
            let mut cart = CartManager::new(Arc::clone(&store));
            cart.add_item(&product(1, "9.99"), 2);
        }
        // Fresh manager over the same storage simulates a reload.
        let cart = CartManager::new(store);
        let snap = cart.snapshot();
        assert_eq!(snap.items.len(), 1);
        assert_eq!(snap.item_count, 2);
        assert_eq!(snap.total, Decimal::new(1998, 2));
    }

    #[test]
    fn test_every_mutation_notifies() {
        let notified = Arc::new(AtomicU32::new(0));
        let seen = Arc::clone(&notified);

        let mut cart = CartManager::new(MemoryStore::new());
        cart.subscribe(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        cart.add_item(&product(1, "1.00"), 1);
        cart.set_quantity(ProductId::new(1), 3);
        cart.remove_item(ProductId::new(1));
        cart.clear();
        assert_eq!(notified.load(Ordering::SeqCst), 4);
    }
}
