//! Checkout payment stub.

use serde::{Deserialize, Serialize};
use swarna_commerce::cart::Cart;
use swarna_commerce::ids::OrderId;
use swarna_commerce::money::Money;

/// Record of a placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderReceipt {
    /// Generated order identifier.
    pub id: OrderId,
    /// Order total at placement time.
    pub total: Money,
    /// Total number of units ordered.
    pub item_count: u32,
    /// Unix timestamp of placement.
    pub placed_at: i64,
}

/// Place an order for the cart's current contents.
///
/// There is no payment gateway in scope: this reports success
/// unconditionally and leaves the cart untouched. An empty cart still
/// "succeeds" with a zero total.
pub fn place_order(cart: &Cart) -> OrderReceipt {
    let receipt = OrderReceipt {
        id: OrderId::generate(),
        total: cart.total(),
        item_count: cart.count(),
        placed_at: current_timestamp(),
    };
    tracing::info!(
        order = %receipt.id,
        total = %receipt.total,
        items = receipt.item_count,
        "order placed"
    );
    receipt
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
