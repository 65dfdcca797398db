//! Terminal pager widget.
//!
//! Renders a computed item sequence on a single row and maps mouse columns
//! back to items, so a pager can be driven by keyboard or mouse.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Span,
    widgets::StatefulWidget,
};

use crate::pagination::PageItem;
use crate::theme::{FOCUSED_STYLE, item_style};

/// Columns between two rendered items.
pub const ITEM_GAP: u16 = 1;

// ============================================================================
// PagerState
// ============================================================================

/// Keyboard focus for a [`PagerWidget`].
///
/// Focus is an index into the item slice and only ever rests on activatable
/// items (pages and enabled controls).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PagerState {
    focused: Option<usize>,
}

impl PagerState {
    /// Creates a state with nothing focused.
    #[must_use]
    pub const fn new() -> Self {
        Self { focused: None }
    }

    /// Returns the focused index.
    #[must_use]
    pub const fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Focuses `index` if it refers to an activatable item, otherwise clears
    /// focus.
    pub fn focus(&mut self, items: &[PageItem], index: usize) {
        self.focused = items
            .get(index)
            .filter(|item| item.is_activatable())
            .map(|_| index);
    }

    /// Moves focus to the next activatable item, wrapping at the end.
    pub fn focus_next(&mut self, items: &[PageItem]) {
        let start = self.focused.map_or(0, |index| index + 1);
        self.focused = (0..items.len())
            .map(|offset| (start + offset) % items.len())
            .find(|&index| items[index].is_activatable());
    }

    /// Moves focus to the previous activatable item, wrapping at the start.
    pub fn focus_previous(&mut self, items: &[PageItem]) {
        let len = items.len();
        let start = self.focused.unwrap_or(0) + len;
        self.focused = (1..=len)
            .map(|offset| (start - offset) % len)
            .find(|&index| items[index].is_activatable());
    }

    /// Focuses the current page, or clears focus if no page is current.
    pub fn focus_current(&mut self, items: &[PageItem]) {
        self.focused = items.iter().position(PageItem::is_current);
    }

    /// Returns the focused item.
    #[must_use]
    pub fn focused_item<'a>(&self, items: &'a [PageItem]) -> Option<&'a PageItem> {
        self.focused.and_then(|index| items.get(index))
    }

    /// Returns the page the focused item would switch to.
    #[must_use]
    pub fn focused_target(&self, items: &[PageItem]) -> Option<i64> {
        self.focused_item(items)
            .filter(|item| item.is_activatable())
            .and_then(PageItem::target_page)
    }
}

// ============================================================================
// PagerWidget
// ============================================================================

/// Renders page items left to right on the first row of its area.
///
/// # Example
///
/// ```text
/// « ‹ 1 … 9 10 11 … 20 › »
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PagerWidget<'a> {
    items: &'a [PageItem],
}

impl<'a> PagerWidget<'a> {
    /// Create a widget over `items`.
    #[must_use]
    pub const fn new(items: &'a [PageItem]) -> Self {
        Self { items }
    }

    /// Total columns needed to show every item.
    #[must_use]
    pub fn width(items: &[PageItem]) -> u16 {
        cells(items)
            .last()
            .map_or(0, |(offset, width)| offset.saturating_add(width))
    }

    /// Returns the index of the item drawn at (`column`, `row`) in `area`.
    ///
    /// Gaps between items, rows other than the first and clipped items
    /// return `None`.
    #[must_use]
    pub fn item_at(items: &[PageItem], area: Rect, column: u16, row: u16) -> Option<usize> {
        if area.is_empty() || row != area.y || column < area.x {
            return None;
        }
        let relative = column - area.x;
        if relative >= area.width {
            return None;
        }
        cells(items)
            .enumerate()
            .find(|(_, (offset, width))| {
                relative >= *offset && relative < offset.saturating_add(*width)
            })
            .filter(|(_, (offset, width))| offset.saturating_add(*width) <= area.width)
            .map(|(index, _)| index)
    }
}

impl StatefulWidget for PagerWidget<'_> {
    type State = PagerState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.is_empty() {
            return;
        }

        for (index, (item, (offset, width))) in self.items.iter().zip(cells(self.items)).enumerate()
        {
            if offset.saturating_add(width) > area.width {
                break;
            }
            let mut style = item_style(item);
            if state.focused == Some(index) {
                style = style.patch(FOCUSED_STYLE);
            }
            buf.set_span(
                area.x + offset,
                area.y,
                &Span::styled(item.to_string(), style),
                width,
            );
        }
    }
}

/// `(offset, width)` of each item relative to the widget's left edge.
fn cells(items: &[PageItem]) -> impl Iterator<Item = (u16, u16)> + '_ {
    items.iter().scan(0_u16, |next, item| {
        let width = u16::try_from(Span::raw(item.to_string()).width()).unwrap_or(u16::MAX);
        let offset = *next;
        *next = offset.saturating_add(width).saturating_add(ITEM_GAP);
        Some((offset, width))
    })
}

// ============================================================================
// Tests
// ============================================================================
