//! Product type.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are immutable once the catalog is loaded. The cart copies a
/// product's fields at add-time, so later catalog changes never alter cart
/// contents retroactively.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Pack weight as shown to the customer (e.g., "500g").
    pub weight: String,
    /// Category name; must be a key of the category map or "Other".
    pub category: String,
    /// Sub-category name within the category.
    pub sub_category: Option<String>,
    /// Product image URL.
    pub image_url: String,
    /// Customer rating, 1-5.
    pub rating: Option<u8>,
    /// Ingredients text.
    pub ingredients: Option<String>,
}

impl Product {
    /// Create a new product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        weight: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            weight: weight.into(),
            category: category.into(),
            sub_category: None,
            image_url: String::new(),
            rating: None,
            ingredients: None,
        }
    }

    /// Set the sub-category.
    pub fn with_sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.sub_category = Some(sub_category.into());
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    /// Set the rating.
    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Set the ingredients text.
    pub fn with_ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = Some(ingredients.into());
        self
    }
}
