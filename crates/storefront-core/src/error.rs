use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("Pagination requires at least one page")]
    NoPages,

    #[error("Page {page} is outside 1..={total}")]
    PageOutOfRange { page: usize, total: usize },

    #[error("Items per page must be greater than zero")]
    InvalidPerPage,

    #[error("{total} pages of {per_page} results exceed the supported result count")]
    ResultCountOverflow { total: usize, per_page: usize },

    #[error("Invalid price range: {min}..{max}")]
    InvalidPriceRange { min: u32, max: u32 },

    #[error("Unknown sort option: {0}")]
    UnknownSortOption(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
