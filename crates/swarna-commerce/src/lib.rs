//! Storefront domain types and logic for the Swarnapakshi sweets store.
//!
//! This crate provides the in-memory state core of the storefront:
//!
//! - **Catalog**: the static product list and category taxonomy
//! - **Cart**: the session cart with quantity arithmetic and totals
//! - **Search**: pure filtering over the catalog
//!
//! # Example
//!
//! ```rust
//! use swarna_commerce::prelude::*;
//!
//! let catalog = Catalog::seed();
//! let mut cart = Cart::new();
//!
//! // Add the first product twice: one entry, quantity 2.
//! let product = &catalog.products()[0];
//! cart.add(product);
//! cart.add(product);
//! assert_eq!(cart.count(), 2);
//! assert_eq!(cart.len(), 1);
//!
//! // Totals are derived fresh on every call.
//! let total = cart.total();
//! assert_eq!(total, product.price.multiply(2));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, CategoryMap, Product, OTHER_CATEGORY};

    // Cart
    pub use crate::cart::{Cart, CartItem};

    // Search
    pub use crate::search::ProductFilter;
}
