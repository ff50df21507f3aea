use super::colors::*;
use ratatui::style::{Modifier, Style};

pub fn border() -> Style {
    Style::default().fg(BORDER)
}

pub fn title() -> Style {
    Style::default().fg(TITLE_TEXT).add_modifier(Modifier::BOLD)
}

pub fn page_token() -> Style {
    Style::default().fg(PAGE_TEXT)
}

pub fn active_page() -> Style {
    Style::default()
        .fg(ACTIVE_PAGE_FG)
        .bg(ACTIVE_PAGE_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn ellipsis() -> Style {
    Style::default().fg(ELLIPSIS_TEXT)
}

pub fn nav_button(disabled: bool) -> Style {
    if disabled {
        Style::default().fg(DISABLED_TEXT).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(NAV_TEXT)
    }
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}
