//! Pagination range computation with a terminal pager.
//!
//! The core is [`compute`], a pure function from a [`PaginationConfig`] to
//! the ordered [`PageItem`]s a pager renders: page numbers, ellipses and
//! first/previous/next/last controls.
//!
//! ```
//! use pagerange::{PageItem, PaginationConfig, compute};
//!
//! let items = compute(&PaginationConfig::new(20).page(10).hide_first(true).hide_last(true));
//! let current: Vec<i64> = items
//!     .iter()
//!     .filter(|item| item.is_current())
//!     .filter_map(PageItem::target_page)
//!     .collect();
//! assert_eq!(current, [10]);
//! ```
//!
//! The remaining modules are a ratatui pager built on top of it.

pub mod app;
pub mod commands;
pub mod error;
pub mod pagination;
pub mod settings;
pub mod theme;
pub mod tui;
pub mod ui;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use error::PagerError;
pub use pagination::{EllipsisEdge, NavKind, PageItem, PaginationConfig, compute};
pub use settings::PagerSettings;
