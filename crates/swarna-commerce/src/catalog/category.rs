//! Category taxonomy for the browse-by-category flow.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Fallback category used when a category has no entry of its own.
pub const OTHER_CATEGORY: &str = "Other";

/// Ordered mapping from category name to its sub-category names.
///
/// The taxonomy is independent of which sub-categories actually have
/// products; empty sub-categories are still listed for browsing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoryMap {
    entries: IndexMap<String, Vec<String>>,
}

impl CategoryMap {
    /// Create an empty category map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a category map from (category, sub-categories) pairs.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<S>)>,
        S: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(name, subs)| (name.into(), subs.into_iter().map(Into::into).collect()))
            .collect();
        Self { entries }
    }

    /// Check whether a category exists.
    pub fn contains(&self, category: &str) -> bool {
        self.entries.contains_key(category)
    }

    /// Iterate over category names in display order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Sub-categories of a category in display order.
    ///
    /// Unknown categories fall back to the "Other" entry, and to an empty
    /// list if there is no "Other" entry either.
    pub fn sub_categories(&self, category: &str) -> &[String] {
        self.entries
            .get(category)
            .or_else(|| self.entries.get(OTHER_CATEGORY))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
