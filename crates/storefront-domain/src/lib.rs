pub mod filter;
pub mod query;
pub mod results;
pub mod sort;

pub use filter::{FilterState, FilterUpdate, PriceRange, ALL_CATEGORIES, MAX_PRICE};
pub use query::SearchQuery;
pub use results::SearchResults;
pub use sort::SortBy;
