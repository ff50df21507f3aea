pub mod config;
pub mod error;
pub mod navigation;
pub mod pagination;
pub mod result;

pub use config::{AppConfig, PaginationConfig, ResultsConfig};
pub use error::StorefrontError;
pub use navigation::{Control, ControlItem, PageChangeListener};
pub use pagination::{should_paginate, total_pages_for, PageRequest, PageToken, PageWindow};
pub use result::StorefrontResult;
