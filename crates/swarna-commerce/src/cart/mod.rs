//! Cart types: the session cart and its items.

#[allow(clippy::module_inception)]
mod cart;

pub use cart::{Cart, CartItem};
