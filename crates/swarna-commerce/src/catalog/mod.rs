//! Catalog types: products, categories, and the compiled-in store data.

#[allow(clippy::module_inception)]
mod catalog;
mod category;
mod product;
mod seed;

pub use catalog::Catalog;
pub use category::{CategoryMap, OTHER_CATEGORY};
pub use product::Product;
