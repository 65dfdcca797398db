//! Pagination configuration.
//!
//! [`PaginationConfig`] is the immutable input to [`compute`](super::compute).
//! Callers build a fresh value on every render. Any combination of values is
//! accepted; anomalies are clamped by [`PaginationConfig::normalized`] rather
//! than rejected, so a pager always has something to draw.

use serde::{Deserialize, Serialize};

use crate::error::PagerError;

// ============================================================================
// Defaults
// ============================================================================

/// Default number of pages always shown at each end of the range.
pub const DEFAULT_BOUNDARY_COUNT: i64 = 1;

/// Default number of pages always shown on each side of the current page.
pub const DEFAULT_SIBLING_COUNT: i64 = 1;

const fn default_page() -> i64 {
    1
}

const fn default_boundary_count() -> i64 {
    DEFAULT_BOUNDARY_COUNT
}

const fn default_sibling_count() -> i64 {
    DEFAULT_SIBLING_COUNT
}

// ============================================================================
// PaginationConfig
// ============================================================================

/// Input for a single pagination range computation.
///
/// # Example
///
/// ```
/// use pagerange::PaginationConfig;
///
/// let config = PaginationConfig::new(20).page(10).boundary_count(2);
/// assert_eq!(config.count, 20);
/// assert_eq!(config.sibling_count, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationConfig {
    /// Total number of pages.
    pub count: i64,
    /// The active page, nominally in `[1, count]`.
    #[serde(default = "default_page")]
    pub page: i64,
    /// Pages always shown at the start and at the end.
    #[serde(default = "default_boundary_count")]
    pub boundary_count: i64,
    /// Pages always shown before and after the active page.
    #[serde(default = "default_sibling_count")]
    pub sibling_count: i64,
    /// Omit the "first page" control.
    #[serde(default)]
    pub hide_first: bool,
    /// Omit the "previous page" control.
    #[serde(default)]
    pub hide_prev: bool,
    /// Omit the "next page" control.
    #[serde(default)]
    pub hide_next: bool,
    /// Omit the "last page" control.
    #[serde(default)]
    pub hide_last: bool,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PaginationConfig {
    /// Creates a configuration for `count` pages positioned on page 1.
    #[must_use]
    pub const fn new(count: i64) -> Self {
        Self {
            count,
            page: 1,
            boundary_count: DEFAULT_BOUNDARY_COUNT,
            sibling_count: DEFAULT_SIBLING_COUNT,
            hide_first: false,
            hide_prev: false,
            hide_next: false,
            hide_last: false,
        }
    }

    /// Sets the active page.
    #[must_use]
    pub const fn page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }

    /// Sets the number of boundary pages.
    #[must_use]
    pub const fn boundary_count(mut self, boundary_count: i64) -> Self {
        self.boundary_count = boundary_count;
        self
    }

    /// Sets the number of sibling pages.
    #[must_use]
    pub const fn sibling_count(mut self, sibling_count: i64) -> Self {
        self.sibling_count = sibling_count;
        self
    }

    /// Hides or shows the "first page" control.
    #[must_use]
    pub const fn hide_first(mut self, hide: bool) -> Self {
        self.hide_first = hide;
        self
    }

    /// Hides or shows the "previous page" control.
    #[must_use]
    pub const fn hide_prev(mut self, hide: bool) -> Self {
        self.hide_prev = hide;
        self
    }

    /// Hides or shows the "next page" control.
    #[must_use]
    pub const fn hide_next(mut self, hide: bool) -> Self {
        self.hide_next = hide;
        self
    }

    /// Hides or shows the "last page" control.
    #[must_use]
    pub const fn hide_last(mut self, hide: bool) -> Self {
        self.hide_last = hide;
        self
    }

    /// Returns `true` if `page` lies in `[1, count]`.
    #[must_use]
    pub const fn page_in_range(&self) -> bool {
        self.page >= 1 && self.page <= self.count
    }

    /// Clamps the configuration into the domain the range computer works in.
    ///
    /// - negative boundary and sibling counts become 0
    /// - boundary and sibling counts larger than `count` become `count`
    /// - `page` is clamped into `[0, count + 1]`, which yields the same range
    ///   as any further out-of-range value
    #[must_use]
    pub fn normalized(&self) -> Normalized {
        let count = self.count.max(0);
        let boundary = self.boundary_count.clamp(0, count);
        let sibling = self.sibling_count.clamp(0, count);
        let page = self.page.clamp(0, count.saturating_add(1));

        if boundary != self.boundary_count
            || sibling != self.sibling_count
            || page != self.page
            || count != self.count
        {
            tracing::debug!(
                count = self.count,
                page = self.page,
                boundary_count = self.boundary_count,
                sibling_count = self.sibling_count,
                "Clamping pagination config"
            );
        }

        Normalized {
            count,
            page,
            boundary,
            sibling,
        }
    }

    /// Strictly checks the configuration, reporting the first anomaly found.
    ///
    /// The range computer never needs this; it exists for callers that prefer
    /// to reject bad input instead of rendering a clamped pager.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::InvalidConfig`] when `count < 1`, `page` is out
    /// of `[1, count]`, or a boundary/sibling count is negative.
    pub fn validate(&self) -> Result<(), PagerError> {
        if self.count < 1 {
            return Err(PagerError::invalid_config(
                "count",
                self.count,
                "must be at least 1",
            ));
        }
        if !self.page_in_range() {
            return Err(PagerError::invalid_config(
                "page",
                self.page,
                format!("must be between 1 and {}", self.count),
            ));
        }
        if self.boundary_count < 0 {
            return Err(PagerError::invalid_config(
                "boundaryCount",
                self.boundary_count,
                "must not be negative",
            ));
        }
        if self.sibling_count < 0 {
            return Err(PagerError::invalid_config(
                "siblingCount",
                self.sibling_count,
                "must not be negative",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Normalized
// ============================================================================

/// A clamped view of a [`PaginationConfig`].
///
/// Every field is non-negative, `boundary` and `sibling` are at most `count`
/// and `page` is within `[0, count + 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalized {
    pub count: i64,
    pub page: i64,
    pub boundary: i64,
    pub sibling: i64,
}

impl Normalized {
    /// The page used for navigation targets: always a valid page number.
    #[must_use]
    pub fn anchor_page(&self) -> i64 {
        self.page.clamp(1, self.last_page())
    }

    /// The last page a control may target; 1 when there is nothing to page.
    #[must_use]
    pub fn last_page(&self) -> i64 {
        self.count.max(1)
    }
}

// ============================================================================
// Tests
// ============================================================================
