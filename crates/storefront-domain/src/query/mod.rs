//! Search request parameters.
//!
//! Builds the query string the storefront sends to `games/search`. Only
//! meaningful filters are included, so an untouched sidebar produces the
//! shortest possible query. Nothing here performs I/O.

use crate::filter::FilterState;
use serde::Serialize;
use storefront_core::{StorefrontError, StorefrontResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    pub filters: FilterState,
    pub page: usize,
    pub limit: usize,
}

impl SearchQuery {
    pub fn new(filters: FilterState, page: usize, limit: usize) -> Self {
        Self {
            filters,
            page,
            limit,
        }
    }

    /// Ordered `(name, value)` pairs.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let filters = &self.filters;
        let mut params = Vec::with_capacity(8);

        if !filters.search_term.is_empty() {
            params.push(("search", filters.search_term.clone()));
        }
        if filters.has_category() {
            params.push(("category", filters.category.clone()));
        }
        params.push(("minPrice", filters.price_range.min().to_string()));
        params.push(("maxPrice", filters.price_range.max().to_string()));
        if !filters.selected_tags.is_empty() {
            params.push(("tags", filters.selected_tags.join(",")));
        }
        params.push(("sortBy", filters.sort_by.to_string()));
        params.push(("page", self.page.to_string()));
        params.push(("limit", self.limit.to_string()));

        params
    }

    /// URL-encoded form of [`SearchQuery::params`].
    pub fn to_query_string(&self) -> StorefrontResult<String> {
        serde_urlencoded::to_string(self.params())
            .map_err(|e| StorefrontError::Serialization(e.to_string()))
    }
}
