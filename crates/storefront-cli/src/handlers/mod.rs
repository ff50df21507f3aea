pub mod browse;
pub mod paginate;
pub mod query;
