//! Pagination range computation.
//!
//! - [`config`]: [`PaginationConfig`], the per-render input
//! - [`item`]: [`PageItem`] and its kinds
//! - [`range`]: [`compute`], the pure function from config to items

pub mod config;
pub mod item;
pub mod range;

pub use config::{DEFAULT_BOUNDARY_COUNT, DEFAULT_SIBLING_COUNT, Normalized, PaginationConfig};
pub use item::{EllipsisEdge, NavKind, PageItem};
pub use range::compute;
