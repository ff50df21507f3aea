//! Page window computation.
//!
//! Provides the numbered-page window that a pagination control renders for a
//! given current page and page count. The window is a pure function of its
//! inputs and knows nothing about rendering or input handling.

use crate::{StorefrontError, StorefrontResult};
use serde::Serialize;
use std::fmt;

/// Pages shown on each side of the current page.
const BAND_RADIUS: usize = 1;

/// A single entry of a page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum PageToken {
    /// A clickable page number (1-indexed).
    Page(usize),
    /// Placeholder for one or more skipped pages.
    Ellipsis,
}

impl PageToken {
    pub fn page(self) -> Option<usize> {
        match self {
            PageToken::Page(n) => Some(n),
            PageToken::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(self) -> bool {
        matches!(self, PageToken::Ellipsis)
    }
}

/// Ordered tokens rendered for one `(current, total)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PageWindow {
    tokens: Vec<PageToken>,
}

impl PageWindow {
    pub fn tokens(&self) -> &[PageToken] {
        &self.tokens
    }

    /// Page numbers in render order, ellipses skipped.
    pub fn pages(&self) -> Vec<usize> {
        self.tokens.iter().filter_map(|t| t.page()).collect()
    }

    pub fn ellipsis_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_ellipsis()).count()
    }

    pub fn contains_page(&self, page: usize) -> bool {
        self.tokens.contains(&PageToken::Page(page))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for PageWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match token {
                PageToken::Page(n) => write!(f, "{n}")?,
                PageToken::Ellipsis => f.write_str("…")?,
            }
        }
        Ok(())
    }
}

/// A validated `(current, total)` pair.
///
/// Construction rejects zero pages and out-of-range current pages, so every
/// method on a `PageRequest` is infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    current: usize,
    total: usize,
}

impl PageRequest {
    pub fn new(current: usize, total: usize) -> StorefrontResult<Self> {
        if total == 0 {
            return Err(StorefrontError::NoPages);
        }
        if current == 0 || current > total {
            return Err(StorefrontError::PageOutOfRange {
                page: current,
                total,
            });
        }
        Ok(Self { current, total })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Compute the tokens to render.
    ///
    /// Page 1 and the last page are always present, the current page is
    /// surrounded by its immediate neighbours, and any gap between those
    /// groups collapses into a single ellipsis.
    pub fn window(&self) -> PageWindow {
        let (current, total) = (self.current, self.total);
        let mut tokens = vec![PageToken::Page(1)];

        if current > 3 {
            tokens.push(PageToken::Ellipsis);
        }

        let band_start = current.saturating_sub(BAND_RADIUS).max(1);
        let band_end = current.saturating_add(BAND_RADIUS).min(total);
        for page in band_start..=band_end {
            if page != 1 {
                tokens.push(PageToken::Page(page));
            }
        }

        if total - current > 2 {
            tokens.push(PageToken::Ellipsis);
        }

        if total > 1 && band_end != total {
            tokens.push(PageToken::Page(total));
        }

        tracing::trace!(current, total, tokens = tokens.len(), "computed page window");
        PageWindow { tokens }
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    pub fn previous(&self) -> Option<usize> {
        self.has_previous().then(|| self.current - 1)
    }

    pub fn next(&self) -> Option<usize> {
        self.has_next().then(|| self.current + 1)
    }

    pub fn is_current(&self, page: usize) -> bool {
        self.current == page
    }
}

/// Number of pages needed to show `total_count` items, `per_page` at a time.
pub fn total_pages_for(total_count: usize, per_page: usize) -> StorefrontResult<usize> {
    if per_page == 0 {
        return Err(StorefrontError::InvalidPerPage);
    }
    Ok(total_count.div_ceil(per_page))
}

/// Results screens only show the control when there is somewhere to go.
pub fn should_paginate(total_pages: usize) -> bool {
    total_pages > 1
}
