pub mod app;
pub mod components;
pub mod events;
pub mod theme;
pub mod ui;

pub use app::PagerApp;
pub use components::{ControlSlot, PaginationView};
