//! The store catalog: validated product list plus category taxonomy.

use std::collections::HashSet;

use crate::catalog::category::{CategoryMap, OTHER_CATEGORY};
use crate::catalog::product::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// The static, read-only product catalog.
///
/// Data is compiled in, not loaded from storage, so the only failure mode
/// is invalid seed data, rejected at construction time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    categories: CategoryMap,
}

impl Catalog {
    /// Build a catalog, validating the product data.
    ///
    /// Rejects duplicate product ids, negative prices, out-of-range ratings,
    /// and categories missing from the taxonomy (other than "Other").
    pub fn new(products: Vec<Product>, categories: CategoryMap) -> Result<Self, CommerceError> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.clone()) {
                return Err(CommerceError::DuplicateProductId(
                    product.id.as_str().to_string(),
                ));
            }
            if product.price.is_negative() {
                return Err(CommerceError::NegativePrice {
                    id: product.id.as_str().to_string(),
                    paise: product.price.amount_paise,
                });
            }
            if let Some(rating) = product.rating {
                if !(1..=5).contains(&rating) {
                    return Err(CommerceError::RatingOutOfRange {
                        id: product.id.as_str().to_string(),
                        rating,
                    });
                }
            }
            if !categories.contains(&product.category) && product.category != OTHER_CATEGORY {
                return Err(CommerceError::UnknownCategory {
                    id: product.id.as_str().to_string(),
                    category: product.category.clone(),
                });
            }
        }

        tracing::info!(
            products = products.len(),
            categories = categories.len(),
            "catalog loaded"
        );

        Ok(Self {
            products,
            categories,
        })
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The category taxonomy.
    pub fn categories(&self) -> &CategoryMap {
        &self.categories
    }

    /// Look up a product by id.
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
