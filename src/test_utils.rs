//! Shared test utilities and Mother pattern factories.
#![allow(dead_code)]

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use rstest::fixture;

use crate::pagination::{PageItem, PaginationConfig};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct ConfigMother;

impl ConfigMother {
    /// Twenty pages positioned in the middle, all controls visible.
    #[must_use]
    pub fn twenty_pages() -> PaginationConfig {
        PaginationConfig::new(20).page(10)
    }

    /// A configuration with every navigation control hidden.
    #[must_use]
    pub fn pages_only(count: i64, page: i64) -> PaginationConfig {
        PaginationConfig::new(count)
            .page(page)
            .hide_first(true)
            .hide_prev(true)
            .hide_next(true)
            .hide_last(true)
    }
}

// ============================================================================
// Item Helpers
// ============================================================================

/// Renders items as their glyphs joined by single spaces.
#[must_use]
pub fn glyphs(items: &[PageItem]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The numeric page values in order.
#[must_use]
pub fn page_values(items: &[PageItem]) -> Vec<i64> {
    items
        .iter()
        .filter_map(|item| match item {
            PageItem::Page { value, .. } => Some(*value),
            _ => None,
        })
        .collect()
}

/// The symbols of row `y`, with trailing blanks removed.
#[must_use]
pub fn buffer_row(buffer: &Buffer, y: u16) -> String {
    let area = buffer.area;
    (area.x..area.x + area.width)
        .filter_map(|x| buffer.cell((x, y)).map(|cell| cell.symbol().to_string()))
        .collect::<String>()
        .trim_end()
        .to_string()
}

// ============================================================================
// rstest Fixtures
// ============================================================================

#[fixture]
pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(60, 12)).expect("terminal creation should succeed")
}
