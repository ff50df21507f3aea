use serde::Serialize;
use storefront_core::{StorefrontError, StorefrontResult};

/// Upper bound of the price slider, in whole dollars.
pub const MAX_PRICE: u32 = 1000;

/// Inclusive price bounds selected in the search sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceRange {
    min: u32,
    max: u32,
}

impl PriceRange {
    pub fn new(min: u32, max: u32) -> StorefrontResult<Self> {
        if min > max || max > MAX_PRICE {
            return Err(StorefrontError::InvalidPriceRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Whether the range still covers every price.
    pub fn is_unbounded(&self) -> bool {
        self.min == 0 && self.max == MAX_PRICE
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0,
            max: MAX_PRICE,
        }
    }
}
