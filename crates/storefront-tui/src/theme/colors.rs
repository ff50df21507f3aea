use ratatui::style::Color;

pub const BORDER: Color = Color::White;
pub const TITLE_TEXT: Color = Color::Cyan;

pub const PAGE_TEXT: Color = Color::White;
pub const ACTIVE_PAGE_FG: Color = Color::Black;
pub const ACTIVE_PAGE_BG: Color = Color::Green;
pub const ELLIPSIS_TEXT: Color = Color::DarkGray;

pub const NAV_TEXT: Color = Color::Yellow;
pub const DISABLED_TEXT: Color = Color::DarkGray;

pub const LABEL_TEXT: Color = Color::DarkGray;
