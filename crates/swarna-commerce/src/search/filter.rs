//! Product filtering.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// The three browse filters, AND-combined.
///
/// Filtering is a pure function of its inputs and preserves catalog order
/// (stable filter, never a re-sort). The engine does not validate that the
/// sub-category belongs to the category; keeping the two consistent is the
/// caller's job.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductFilter {
    /// Case-insensitive substring match against the product name. Empty
    /// matches everything.
    pub search: String,
    /// Exact category match; None passes all categories.
    pub category: Option<String>,
    /// Exact sub-category match; None passes all sub-categories.
    pub sub_category: Option<String>,
}

impl ProductFilter {
    /// A filter that passes everything.
    pub fn all() -> Self {
        Self::default()
    }

    /// Set the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the sub-category.
    pub fn with_sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.sub_category = Some(sub_category.into());
        self
    }

    /// Check whether a single product passes all three predicates.
    pub fn matches(&self, product: &Product) -> bool {
        let matches_search = self.search.is_empty()
            || product
                .name
                .to_lowercase()
                .contains(&self.search.to_lowercase());
        let matches_category = self
            .category
            .as_deref()
            .map_or(true, |c| product.category == c);
        let matches_sub_category = self
            .sub_category
            .as_deref()
            .map_or(true, |s| product.sub_category.as_deref() == Some(s));
        matches_search && matches_category && matches_sub_category
    }

    /// Filter a product slice, preserving relative order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_empty_filter_returns_everything_in_order() {
        let catalog = Catalog::seed();
        let visible = ProductFilter::all().apply(catalog.products());
        assert_eq!(visible.len(), catalog.len());
        let ids: Vec<&str> = visible.iter().map(|p| p.id.as_str()).collect();
        let original: Vec<&str> = catalog.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, original);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = Catalog::seed();
        let filter = ProductFilter::all().with_search("KAJU");
        let visible = filter.apply(catalog.products());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id.as_str(), "s3");
    }

    #[test]
    fn test_category_and_sub_category_and_search() {
        // Sweets -> Kaju Sweets -> "kaju" yields exactly s3.
        let catalog = Catalog::seed();
        let filter = ProductFilter::all()
            .with_category("Sweets")
            .with_sub_category("Kaju Sweets")
            .with_search("kaju");
        let visible = filter.apply(catalog.products());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id.as_str(), "s3");
    }

    #[test]
    fn test_mismatched_category_and_sub_category_are_both_applied() {
        // The engine applies both predicates without cross-validation.
        let catalog = Catalog::seed();
        let filter = ProductFilter::all()
            .with_category("Sweets")
            .with_sub_category("Thukkada");
        assert!(filter.apply(catalog.products()).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let catalog = Catalog::seed();
        let filter = ProductFilter::all().with_category("Savouries");

        let once = filter.apply(catalog.products());
        let owned: Vec<Product> = once.iter().map(|p| (*p).clone()).collect();
        let twice = filter.apply(&owned);

        let a: Vec<&str> = once.iter().map(|p| p.id.as_str()).collect();
        let b: Vec<&str> = twice.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_search_no_match() {
        let catalog = Catalog::seed();
        let filter = ProductFilter::all().with_search("chocolate truffle");
        assert!(filter.apply(catalog.products()).is_empty());
    }
}
