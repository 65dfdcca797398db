//! Reusable widgets.
//!
//! - [`pager`]: renders a page item sequence and tracks keyboard focus

pub mod pager;

pub use pager::{ITEM_GAP, PagerState, PagerWidget};
