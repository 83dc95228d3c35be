//! The session cart.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An entry in the cart: a product snapshot plus quantity.
///
/// The product fields are copied at add-time, not referenced from the
/// catalog, so cart contents never change under the customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Snapshot of the product as it was when added.
    pub product: Product,
    /// Quantity, always >= 1.
    pub quantity: u32,
}

impl CartItem {
    /// Line subtotal: unit price times quantity.
    pub fn subtotal(&self) -> Money {
        self.product.price.saturating_mul(i64::from(self.quantity))
    }
}

/// The session-scoped shopping cart.
///
/// Entries are unique by product id and kept in insertion order for
/// display. All operations are total: acting on an unknown product id is a
/// silent no-op, not an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    items: IndexMap<ProductId, CartItem>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self {
            items: IndexMap::new(),
            currency: Currency::INR,
        }
    }

    /// Add one unit of a product.
    ///
    /// If an entry for the product already exists its quantity is
    /// incremented; otherwise a new entry is appended with quantity 1,
    /// snapshotting the product's current field values. Returns true when a
    /// new entry was created.
    pub fn add(&mut self, product: &Product) -> bool {
        if let Some(item) = self.items.get_mut(&product.id) {
            item.quantity = item.quantity.saturating_add(1);
            tracing::debug!(id = %product.id, quantity = item.quantity, "cart item incremented");
            return false;
        }
        self.items.insert(
            product.id.clone(),
            CartItem {
                product: product.clone(),
                quantity: 1,
            },
        );
        tracing::debug!(id = %product.id, "cart item added");
        true
    }

    /// Adjust an entry's quantity by a signed delta, clamped to a floor of 1.
    ///
    /// Quantity can never reach 0 through this operation; use [`Cart::remove`]
    /// to delete an entry. Unknown ids are ignored.
    pub fn update_quantity(&mut self, id: &ProductId, delta: i32) {
        if let Some(item) = self.items.get_mut(id) {
            let quantity = i64::from(item.quantity) + i64::from(delta);
            item.quantity = quantity.clamp(1, i64::from(u32::MAX)) as u32;
            tracing::debug!(id = %id, quantity = item.quantity, "cart quantity updated");
        }
    }

    /// Delete an entry, preserving the order of the rest.
    ///
    /// No-op (and no error) if the id is not in the cart.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let removed = self.items.shift_remove(id).is_some();
        if removed {
            tracing::debug!(id = %id, "cart item removed");
        }
        removed
    }

    /// Sum of price times quantity over all entries, derived fresh.
    pub fn total(&self) -> Money {
        self.items.values().fold(Money::zero(self.currency), |acc, item| {
            acc.saturating_add(&item.subtotal())
        })
    }

    /// Sum of all quantities, for badge display.
    pub fn count(&self) -> u32 {
        self.items
            .values()
            .fold(0u32, |acc, item| acc.saturating_add(item.quantity))
    }

    /// Look up an entry by product id.
    pub fn get(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.get(id)
    }

    /// Entries in display (insertion) order.
    pub fn items(&self) -> impl Iterator<Item = &CartItem> {
        self.items.values()
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}
