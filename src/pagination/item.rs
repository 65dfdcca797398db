//! Items produced by the range computer.

use std::fmt;

use serde::Serialize;

// ============================================================================
// Item Kinds
// ============================================================================

/// Which gap an ellipsis stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EllipsisEdge {
    /// Between the start boundary pages and the sibling window.
    Start,
    /// Between the sibling window and the end boundary pages.
    End,
}

/// Navigation controls surrounding the page numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NavKind {
    First,
    Previous,
    Next,
    Last,
}

impl NavKind {
    /// Compact glyph used when rendering the control.
    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::First => "«",
            Self::Previous => "‹",
            Self::Next => "›",
            Self::Last => "»",
        }
    }

    /// Human-readable name used in accessibility labels.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Previous => "previous",
            Self::Next => "next",
            Self::Last => "last",
        }
    }
}

// ============================================================================
// PageItem
// ============================================================================

/// One entry in the sequence a pager renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PageItem {
    /// A clickable page number.
    #[serde(rename_all = "camelCase")]
    Page { value: i64, is_current: bool },
    /// A non-interactive marker for hidden pages.
    Ellipsis { edge: EllipsisEdge },
    /// A first/previous/next/last control.
    #[serde(rename_all = "camelCase")]
    NavControl {
        kind: NavKind,
        target_page: i64,
        is_disabled: bool,
    },
}

impl PageItem {
    /// The page a pager should switch to when this item is activated.
    ///
    /// Returns `None` for ellipses. Disabled controls still report their
    /// target; use [`PageItem::is_activatable`] to decide whether to act.
    #[must_use]
    pub const fn target_page(&self) -> Option<i64> {
        match self {
            Self::Page { value, .. } => Some(*value),
            Self::NavControl { target_page, .. } => Some(*target_page),
            Self::Ellipsis { .. } => None,
        }
    }

    /// Returns `true` for pages and enabled navigation controls.
    #[must_use]
    pub const fn is_activatable(&self) -> bool {
        match self {
            Self::Page { .. } => true,
            Self::NavControl { is_disabled, .. } => !*is_disabled,
            Self::Ellipsis { .. } => false,
        }
    }

    /// Returns `true` if this is the page currently shown.
    #[must_use]
    pub const fn is_current(&self) -> bool {
        matches!(
            self,
            Self::Page {
                is_current: true,
                ..
            }
        )
    }

    /// Returns `true` if this is a disabled navigation control.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        matches!(
            self,
            Self::NavControl {
                is_disabled: true,
                ..
            }
        )
    }

    /// Accessibility text describing what activating the item does.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Page {
                value,
                is_current: true,
            } => format!("page {value}"),
            Self::Page { value, .. } => format!("Go to page {value}"),
            Self::Ellipsis { .. } => "More pages".to_string(),
            Self::NavControl { kind, .. } => format!("Go to {} page", kind.as_str()),
        }
    }
}

impl fmt::Display for PageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page { value, .. } => write!(f, "{value}"),
            Self::Ellipsis { .. } => f.write_str("…"),
            Self::NavControl { kind, .. } => f.write_str(kind.glyph()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
