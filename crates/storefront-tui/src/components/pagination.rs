//! Single-row pagination control.
//!
//! Lays out the controls of a [`PageRequest`] left to right, draws them with
//! distinct styles for the active page, ellipses and disabled navigation, and
//! maps mouse clicks and arrow keys back to page changes.

use crate::theme;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{buffer::Buffer, layout::Rect, style::Style, text::Span, widgets::Widget};
use storefront_core::{Control, ControlItem, PageChangeListener, PageRequest, PaginationConfig};

/// Columns between two adjacent controls.
const GAP: u16 = 1;

/// A control placed on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlSlot {
    pub item: ControlItem,
    pub area: Rect,
    pub text: String,
}

impl ControlSlot {
    pub fn control(&self) -> Control {
        self.item.control
    }

    pub fn is_disabled(&self) -> bool {
        self.item.disabled
    }

    pub fn is_active(&self) -> bool {
        self.item.active
    }

    fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.x + self.area.width
            && row >= self.area.y
            && row < self.area.y + self.area.height
    }

    fn style(&self) -> Style {
        match self.item.control {
            Control::Previous | Control::Next => theme::nav_button(self.item.disabled),
            Control::Ellipsis => theme::ellipsis(),
            Control::Page(_) if self.item.active => theme::active_page(),
            Control::Page(_) => theme::page_token(),
        }
    }
}

pub struct PaginationView {
    request: PageRequest,
    previous_label: String,
    next_label: String,
    ellipsis: String,
}

impl PaginationView {
    pub fn new(request: PageRequest, config: &PaginationConfig) -> Self {
        Self {
            request,
            previous_label: config.effective_previous_label().to_string(),
            next_label: config.effective_next_label().to_string(),
            ellipsis: config.effective_ellipsis().to_string(),
        }
    }

    pub fn request(&self) -> PageRequest {
        self.request
    }

    fn text_for(&self, control: Control) -> String {
        match control {
            Control::Previous => self.previous_label.clone(),
            Control::Next => self.next_label.clone(),
            Control::Ellipsis => self.ellipsis.clone(),
            Control::Page(n) => n.to_string(),
        }
    }

    /// Place every control on the first row of `area`, centered.
    ///
    /// Controls that do not fit are left out, so they are neither drawn nor
    /// clickable.
    pub fn layout(&self, area: Rect) -> Vec<ControlSlot> {
        if area.width == 0 || area.height == 0 {
            return Vec::new();
        }

        let pieces: Vec<(ControlItem, String, u16)> = self
            .request
            .controls()
            .into_iter()
            .map(|item| {
                let text = self.text_for(item.control);
                let width = u16::try_from(Span::raw(text.as_str()).width()).unwrap_or(u16::MAX);
                (item, text, width)
            })
            .collect();

        let content_width = pieces
            .iter()
            .map(|(_, _, w)| *w)
            .fold(0u16, u16::saturating_add)
            .saturating_add(GAP.saturating_mul(
                u16::try_from(pieces.len().saturating_sub(1)).unwrap_or(u16::MAX),
            ));
        let mut x = area.x + area.width.saturating_sub(content_width) / 2;
        let right_edge = area.right();

        let mut slots = Vec::with_capacity(pieces.len());
        for (item, text, width) in pieces {
            if x.saturating_add(width) > right_edge {
                break;
            }
            slots.push(ControlSlot {
                item,
                area: Rect::new(x, area.y, width, 1),
                text,
            });
            x = x.saturating_add(width).saturating_add(GAP);
        }
        slots
    }

    pub fn hit_test(&self, area: Rect, column: u16, row: u16) -> Option<ControlSlot> {
        self.layout(area)
            .into_iter()
            .find(|slot| slot.contains(column, row))
    }

    /// Route a mouse event; only left-button presses activate controls.
    pub fn handle_mouse<L>(&self, event: MouseEvent, area: Rect, listener: &mut L) -> bool
    where
        L: PageChangeListener + ?Sized,
    {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }
        match self.hit_test(area, event.column, event.row) {
            Some(slot) => self.request.activate(slot.control(), listener),
            None => false,
        }
    }

    /// Route a key press: arrows step, Home/End jump to the ends.
    pub fn handle_key<L>(&self, key: KeyEvent, listener: &mut L) -> bool
    where
        L: PageChangeListener + ?Sized,
    {
        let control = match key.code {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => Control::Previous,
            KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => Control::Next,
            KeyCode::Home => Control::Page(1),
            KeyCode::End => Control::Page(self.request.total()),
            _ => return false,
        };
        self.request.activate(control, listener)
    }
}

impl Widget for &PaginationView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for slot in self.layout(area) {
            buf.set_stringn(
                slot.area.x,
                slot.area.y,
                &slot.text,
                slot.area.width as usize,
                slot.style(),
            );
        }
    }
}
