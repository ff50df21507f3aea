pub mod pagination;

pub use pagination::{ControlSlot, PaginationView};
