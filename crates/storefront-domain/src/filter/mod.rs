//! Game search filter state.
//!
//! Mirrors the storefront's search sidebar: free-text search, one category,
//! a price range, any number of tags, and the sort order. Screens hold one
//! [`FilterState`] and merge partial [`FilterUpdate`]s into it.

pub mod price_range;

pub use price_range::{PriceRange, MAX_PRICE};

use crate::sort::SortBy;
use serde::Serialize;

/// Category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub search_term: String,
    pub category: String,
    pub price_range: PriceRange,
    pub selected_tags: Vec<String>,
    pub sort_by: SortBy,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category: ALL_CATEGORIES.to_string(),
            price_range: PriceRange::default(),
            selected_tags: Vec::new(),
            sort_by: SortBy::default(),
        }
    }
}

/// Partial change to a [`FilterState`]; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    pub search_term: Option<String>,
    pub category: Option<String>,
    pub price_range: Option<PriceRange>,
    pub selected_tags: Option<Vec<String>>,
    pub sort_by: Option<SortBy>,
}

impl FilterUpdate {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search_term: Some(term.into()),
            ..Self::default()
        }
    }

    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }

    pub fn sort(sort_by: SortBy) -> Self {
        Self {
            sort_by: Some(sort_by),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl FilterState {
    /// Merge an update, returning whether anything changed.
    pub fn apply(&mut self, update: FilterUpdate) -> bool {
        let before = self.clone();

        if let Some(term) = update.search_term {
            self.search_term = term;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(range) = update.price_range {
            self.price_range = range;
        }
        if let Some(tags) = update.selected_tags {
            self.selected_tags = tags;
        }
        if let Some(sort_by) = update.sort_by {
            self.sort_by = sort_by;
        }

        *self != before
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn has_category(&self) -> bool {
        self.category != ALL_CATEGORIES
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let filters = FilterState::default();
        assert_eq!(filters.search_term, "");
        assert_eq!(filters.category, "all");
        assert!(filters.price_range.is_unbounded());
        assert!(filters.selected_tags.is_empty());
        assert_eq!(filters.sort_by, SortBy::Relevance);
        assert!(!filters.has_category());
    }

    #[test]
    fn test_apply_merges_only_given_fields() {
        let mut filters = FilterState::default();
        filters.apply(FilterUpdate::search("racing"));
        let changed = filters.apply(FilterUpdate {
            price_range: Some(PriceRange::new(10, 60).unwrap()),
            selected_tags: Some(vec!["multiplayer".into(), "arabic".into()]),
            ..FilterUpdate::default()
        });

        assert!(changed);
        assert_eq!(filters.search_term, "racing");
        assert_eq!(filters.category, "all");
        assert_eq!(filters.price_range, PriceRange::new(10, 60).unwrap());
        assert_eq!(filters.selected_tags, vec!["multiplayer", "arabic"]);
    }

    #[test]
    fn test_apply_same_value_reports_no_change() {
        let mut filters = FilterState::default();
        assert!(!filters.apply(FilterUpdate::sort(SortBy::Relevance)));
        assert!(!filters.apply(FilterUpdate::default()));
        assert!(filters.apply(FilterUpdate::sort(SortBy::Newest)));
    }

    #[test]
    fn test_reset() {
        let mut filters = FilterState::default();
        filters.apply(FilterUpdate::category("strategy"));
        assert!(filters.has_category());

        filters.reset();
        assert!(filters.is_default());
    }

    #[test]
    fn test_empty_update() {
        assert!(FilterUpdate::default().is_empty());
        assert!(!FilterUpdate::search("x").is_empty());
    }
}
