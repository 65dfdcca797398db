//! Theme and styling constants for the pager.
//!
//! Tokyo Night-inspired colors, one style per item state.

use ratatui::style::{Color, Modifier, Style};

use crate::pagination::PageItem;

// ============================================================================
// Color Constants
// ============================================================================

/// Primary accent color - current page and focused elements.
pub const PRIMARY_COLOR: Color = Color::Cyan;

/// Muted text color.
pub const MUTED_COLOR: Color = Color::Gray;

/// Color for controls that cannot be activated.
pub const DISABLED_COLOR: Color = Color::DarkGray;

/// Accent color for navigation controls.
pub const ACCENT_COLOR: Color = Color::Magenta;

// ============================================================================
// Style Constants
// ============================================================================

/// Default border style.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Title style.
pub const TITLE_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

/// A page number that is not current.
pub const PAGE_STYLE: Style = Style::new().fg(Color::White);

/// The current page.
pub const CURRENT_PAGE_STYLE: Style = Style::new()
    .fg(Color::Black)
    .bg(PRIMARY_COLOR)
    .add_modifier(Modifier::BOLD);

/// Gap markers.
pub const ELLIPSIS_STYLE: Style = Style::new().fg(MUTED_COLOR);

/// Enabled navigation controls.
pub const NAV_STYLE: Style = Style::new().fg(ACCENT_COLOR).add_modifier(Modifier::BOLD);

/// Disabled navigation controls.
pub const DISABLED_STYLE: Style = Style::new().fg(DISABLED_COLOR);

/// Overlay applied to the keyboard-focused item.
pub const FOCUSED_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);

/// Help and status text.
pub const MUTED_STYLE: Style = Style::new().fg(MUTED_COLOR);

/// Returns the base style for an item.
#[must_use]
pub const fn item_style(item: &PageItem) -> Style {
    match item {
        PageItem::Page {
            is_current: true, ..
        } => CURRENT_PAGE_STYLE,
        PageItem::Page { .. } => PAGE_STYLE,
        PageItem::Ellipsis { .. } => ELLIPSIS_STYLE,
        PageItem::NavControl {
            is_disabled: true, ..
        } => DISABLED_STYLE,
        PageItem::NavControl { .. } => NAV_STYLE,
    }
}
