//! Owner-side state of a paginated search results screen.
//!
//! The pagination control is stateless; this type holds the current page,
//! the page size, the result count reported by the backend and the active
//! filters. Changing filters always returns to the first page.

use crate::filter::{FilterState, FilterUpdate};
use crate::query::SearchQuery;
use storefront_core::{
    should_paginate, total_pages_for, PageChangeListener, PageRequest, StorefrontError,
    StorefrontResult,
};

#[derive(Debug, Clone)]
pub struct SearchResults {
    filters: FilterState,
    current_page: usize,
    items_per_page: usize,
    total_count: usize,
}

impl SearchResults {
    pub fn new(items_per_page: usize) -> StorefrontResult<Self> {
        if items_per_page == 0 {
            return Err(StorefrontError::InvalidPerPage);
        }
        Ok(Self {
            filters: FilterState::default(),
            current_page: 1,
            items_per_page,
            total_count: 0,
        })
    }

    pub fn with_filters(mut self, filters: FilterState) -> Self {
        self.filters = filters;
        self
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn total_pages(&self) -> usize {
        total_pages_for(self.total_count, self.items_per_page).unwrap_or(0)
    }

    /// Request for the pagination control, or `None` when it should be hidden.
    pub fn page_request(&self) -> Option<PageRequest> {
        let total = self.total_pages();
        if !should_paginate(total) {
            return None;
        }
        PageRequest::new(self.current_page, total).ok()
    }

    /// Record the result count from a search response.
    ///
    /// Keeps the current page inside the new page range.
    pub fn set_total_count(&mut self, total_count: usize) {
        self.total_count = total_count;
        let total = self.total_pages().max(1);
        if self.current_page > total {
            tracing::debug!(
                from = self.current_page,
                to = total,
                "clamping current page after result count shrank"
            );
            self.current_page = total;
        }
    }

    pub fn go_to(&mut self, page: usize) -> StorefrontResult<()> {
        let total = self.total_pages().max(1);
        if page == 0 || page > total {
            return Err(StorefrontError::PageOutOfRange { page, total });
        }
        self.current_page = page;
        Ok(())
    }

    /// Merge a filter change; any effective change returns to page 1.
    pub fn update_filters(&mut self, update: FilterUpdate) -> bool {
        let changed = self.filters.apply(update);
        if changed {
            self.current_page = 1;
        }
        changed
    }

    pub fn reset_filters(&mut self) {
        self.filters.reset();
        self.current_page = 1;
    }

    pub fn query(&self) -> SearchQuery {
        SearchQuery::new(self.filters.clone(), self.current_page, self.items_per_page)
    }
}

impl PageChangeListener for SearchResults {
    fn on_page_change(&mut self, page: usize) {
        if let Err(e) = self.go_to(page) {
            tracing::warn!("Ignoring page change: {}", e);
        }
    }
}
