//! Interactive model of a pagination control.
//!
//! Turns a [`PageRequest`] into the ordered list of controls a renderer
//! draws (previous button, page tokens, next button) and routes activations
//! to the owner through a [`PageChangeListener`].

use crate::pagination::{PageRequest, PageToken};
use serde::Serialize;

/// Receives the page the user asked for.
///
/// The control never changes its own current page; the owner decides what to
/// do with the request and renders again.
#[cfg_attr(test, mockall::automock)]
pub trait PageChangeListener {
    fn on_page_change(&mut self, page: usize);
}

impl<F> PageChangeListener for F
where
    F: FnMut(usize),
{
    fn on_page_change(&mut self, page: usize) {
        self(page)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum Control {
    Previous,
    Page(usize),
    Ellipsis,
    Next,
}

impl From<PageToken> for Control {
    fn from(token: PageToken) -> Self {
        match token {
            PageToken::Page(n) => Control::Page(n),
            PageToken::Ellipsis => Control::Ellipsis,
        }
    }
}

/// One rendered element of the control together with its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ControlItem {
    pub control: Control,
    /// Navigation button that cannot be activated. Ellipses are never
    /// disabled; they are simply not interactive.
    pub disabled: bool,
    /// The page currently shown by the owner.
    pub active: bool,
}

impl ControlItem {
    pub fn is_interactive(&self) -> bool {
        !self.disabled && self.control != Control::Ellipsis
    }
}

impl PageRequest {
    /// Every element of the control, in render order.
    pub fn controls(&self) -> Vec<ControlItem> {
        let window = self.window();
        let mut items = Vec::with_capacity(window.len() + 2);

        items.push(ControlItem {
            control: Control::Previous,
            disabled: !self.has_previous(),
            active: false,
        });
        items.extend(window.tokens().iter().map(|&token| ControlItem {
            control: token.into(),
            disabled: false,
            active: token.page().is_some_and(|n| self.is_current(n)),
        }));
        items.push(ControlItem {
            control: Control::Next,
            disabled: !self.has_next(),
            active: false,
        });

        items
    }

    /// Page a control would request, if it can be activated at all.
    pub fn target(&self, control: Control) -> Option<usize> {
        match control {
            Control::Previous => self.previous(),
            Control::Next => self.next(),
            Control::Page(n) => self.window().contains_page(n).then_some(n),
            Control::Ellipsis => None,
        }
    }

    /// Activate a control, notifying the listener at most once.
    ///
    /// Returns `false` when the control is disabled, is an ellipsis, or names
    /// a page that is not part of the current window.
    pub fn activate<L>(&self, control: Control, listener: &mut L) -> bool
    where
        L: PageChangeListener + ?Sized,
    {
        match self.target(control) {
            Some(page) => {
                tracing::debug!(?control, from = self.current(), to = page, "page change requested");
                listener.on_page_change(page);
                true
            }
            None => false,
        }
    }
}
