//! The page range computer.
//!
//! Given a [`PaginationConfig`], produces the ordered items a pager renders:
//!
//! ```text
//! « ‹ 1 … 9 10 11 … 20 › »
//! │ │ │ │ └──────┘ │  │ │ └ last
//! │ │ │ │ siblings │  │ └ next
//! │ │ │ start gap  │  └ end boundary
//! │ │ └ start boundary
//! │ └ previous     end gap
//! └ first
//! ```
//!
//! Each gap collapses to nothing when it is empty, and to the single hidden
//! page when only one page would be hidden, so an ellipsis always stands for
//! at least two pages.

use std::ops::RangeInclusive;

use super::config::{Normalized, PaginationConfig};
use super::item::{EllipsisEdge, NavKind, PageItem};

/// Computes the items for `config`.
///
/// Never fails: out-of-range input is clamped (see
/// [`PaginationConfig::normalized`]). When `count < 1` the result holds no
/// pages and every visible control is disabled.
///
/// # Example
///
/// ```
/// use pagerange::{PaginationConfig, compute};
///
/// let items = compute(&PaginationConfig::new(20).page(10));
/// let line: Vec<String> = items.iter().map(ToString::to_string).collect();
/// assert_eq!(line.join(" "), "« ‹ 1 … 9 10 11 … 20 › »");
/// ```
#[must_use]
pub fn compute(config: &PaginationConfig) -> Vec<PageItem> {
    let bounds = config.normalized();
    let layout = RangeLayout::new(&bounds);

    let mut items = Vec::new();

    if !config.hide_first {
        items.push(nav(NavKind::First, &bounds));
    }
    if !config.hide_prev {
        items.push(nav(NavKind::Previous, &bounds));
    }

    let page_item = |value: i64| PageItem::Page {
        value,
        is_current: value == config.page,
    };

    items.extend(layout.start_pages.map(page_item));
    match layout.start_gap {
        Gap::Ellipsis => items.push(PageItem::Ellipsis {
            edge: EllipsisEdge::Start,
        }),
        Gap::Single(value) => items.push(page_item(value)),
        Gap::None => {}
    }
    items.extend(layout.siblings.map(page_item));
    match layout.end_gap {
        Gap::Ellipsis => items.push(PageItem::Ellipsis {
            edge: EllipsisEdge::End,
        }),
        Gap::Single(value) => items.push(page_item(value)),
        Gap::None => {}
    }
    items.extend(layout.end_pages.map(page_item));

    if !config.hide_next {
        items.push(nav(NavKind::Next, &bounds));
    }
    if !config.hide_last {
        items.push(nav(NavKind::Last, &bounds));
    }

    tracing::trace!(
        count = bounds.count,
        page = config.page,
        items = items.len(),
        "Computed page range"
    );

    items
}

fn nav(kind: NavKind, bounds: &Normalized) -> PageItem {
    // Disabled state uses the clamped page, so a single or empty range
    // disables every control whatever page was requested.
    let anchor = bounds.anchor_page();
    let last = bounds.last_page();
    let at_start = anchor <= 1;
    let at_end = anchor >= bounds.count;

    let (target_page, is_disabled) = match kind {
        NavKind::First => (1, at_start),
        NavKind::Previous => (anchor.saturating_sub(1).max(1), at_start),
        NavKind::Next => (anchor.saturating_add(1).min(last), at_end),
        NavKind::Last => (last, at_end),
    };

    PageItem::NavControl {
        kind,
        target_page,
        is_disabled,
    }
}

// ============================================================================
// Layout
// ============================================================================

/// What fills the space between a boundary block and the sibling window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gap {
    None,
    Single(i64),
    Ellipsis,
}

/// The numeric part of the range, before items are assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RangeLayout {
    start_pages: RangeInclusive<i64>,
    start_gap: Gap,
    siblings: RangeInclusive<i64>,
    end_gap: Gap,
    end_pages: RangeInclusive<i64>,
}

impl RangeLayout {
    fn new(bounds: &Normalized) -> Self {
        let Normalized {
            count,
            page,
            boundary,
            sibling,
        } = *bounds;

        if count < 1 {
            return Self::empty();
        }

        let start_pages = 1..=boundary.min(count);
        let end_first = count
            .saturating_sub(boundary)
            .saturating_add(1)
            .max(boundary.saturating_add(1));
        let end_pages = end_first..=count;

        let sibling_span = sibling.saturating_mul(2);
        let lowest_sibling = boundary.saturating_add(2);
        let siblings_start = page
            .saturating_sub(sibling)
            .min(
                count
                    .saturating_sub(boundary)
                    .saturating_sub(sibling_span)
                    .saturating_sub(1),
            )
            .max(lowest_sibling);

        // Leave room for at least one page (or an ellipsis) before the end block.
        let highest_sibling = if end_pages.is_empty() {
            count - 1
        } else {
            end_first - 2
        };
        let siblings_end = page
            .saturating_add(sibling)
            .max(lowest_sibling.saturating_add(sibling_span))
            .min(highest_sibling);

        let start_single = boundary.saturating_add(1);
        let end_single = count - boundary;

        let start_gap = if siblings_start > lowest_sibling {
            Gap::Ellipsis
        } else if start_single < end_single {
            Gap::Single(start_single)
        } else {
            Gap::None
        };

        let end_gap = if siblings_end < end_single - 1 {
            Gap::Ellipsis
        } else if end_single > boundary {
            Gap::Single(end_single)
        } else {
            Gap::None
        };

        Self {
            start_pages,
            start_gap,
            siblings: siblings_start..=siblings_end,
            end_gap,
            end_pages,
        }
    }

    #[allow(clippy::reversed_empty_ranges)]
    fn empty() -> Self {
        Self {
            start_pages: 1..=0,
            start_gap: Gap::None,
            siblings: 1..=0,
            end_gap: Gap::None,
            end_pages: 1..=0,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ConfigMother, glyphs, page_values};
    use insta::assert_snapshot;
    use rstest::*;

    #[rstest]
    #[case::window_covers_range(5, 3, 1, 1, "1 2 3 4 5")]
    #[case::middle_page(20, 10, 1, 1, "1 … 9 10 11 … 20")]
    #[case::wide_boundary(20, 10, 2, 1, "1 2 … 9 10 11 … 19 20")]
    #[case::wide_siblings(20, 10, 1, 2, "1 … 8 9 10 11 12 … 20")]
    #[case::first_page(20, 1, 1, 1, "1 2 3 4 5 … 20")]
    #[case::last_page(20, 20, 1, 1, "1 … 16 17 18 19 20")]
    #[case::single_hidden_page_at_start(20, 4, 1, 1, "1 2 3 4 5 … 20")]
    #[case::first_ellipsis_page(20, 5, 1, 1, "1 … 4 5 6 … 20")]
    #[case::no_boundary(20, 10, 0, 1, "… 9 10 11 …")]
    #[case::no_siblings(20, 10, 1, 0, "1 … 10 … 20")]
    #[case::no_boundary_no_siblings(10, 1, 0, 0, "1 2 …")]
    #[case::exactly_fits(7, 4, 1, 1, "1 2 3 4 5 6 7")]
    #[case::boundary_exceeds_count(5, 2, 9, 1, "1 2 3 4 5")]
    #[case::page_past_end(20, 25, 1, 1, "1 … 16 17 18 19 20")]
    #[case::page_before_start(20, -3, 1, 1, "1 2 3 4 5 … 20")]
    fn test_page_sequence(
        #[case] count: i64,
        #[case] page: i64,
        #[case] boundary: i64,
        #[case] sibling: i64,
        #[case] expected: &str,
    ) {
        let config = ConfigMother::pages_only(count, page)
            .boundary_count(boundary)
            .sibling_count(sibling);
        assert_eq!(glyphs(&compute(&config)), expected);
    }

    #[test]
    fn test_full_item_sequence_with_controls() {
        let items = compute(&PaginationConfig::new(20).page(10));
        assert_snapshot!(glyphs(&items), @"« ‹ 1 … 9 10 11 … 20 › »");

        assert_eq!(
            items[0],
            PageItem::NavControl {
                kind: NavKind::First,
                target_page: 1,
                is_disabled: false,
            }
        );
        assert_eq!(
            items[1],
            PageItem::NavControl {
                kind: NavKind::Previous,
                target_page: 9,
                is_disabled: false,
            }
        );
        assert_eq!(
            items[3],
            PageItem::Ellipsis {
                edge: EllipsisEdge::Start,
            }
        );
        assert_eq!(
            items[7],
            PageItem::Ellipsis {
                edge: EllipsisEdge::End,
            }
        );
        assert_eq!(
            items[9],
            PageItem::NavControl {
                kind: NavKind::Next,
                target_page: 11,
                is_disabled: false,
            }
        );
        assert_eq!(
            items[10],
            PageItem::NavControl {
                kind: NavKind::Last,
                target_page: 20,
                is_disabled: false,
            }
        );
    }

    #[test]
    fn test_hidden_controls_are_absent() {
        let config = PaginationConfig::new(5)
            .page(1)
            .hide_prev(true)
            .hide_first(true);
        let items = compute(&config);

        assert_snapshot!(glyphs(&items), @"1 2 3 4 5 › »");
        assert!(!items.iter().any(|item| matches!(
            item,
            PageItem::NavControl {
                kind: NavKind::First | NavKind::Previous,
                ..
            }
        )));
        assert_eq!(
            &items[5..],
            [
                PageItem::NavControl {
                    kind: NavKind::Next,
                    target_page: 2,
                    is_disabled: false,
                },
                PageItem::NavControl {
                    kind: NavKind::Last,
                    target_page: 5,
                    is_disabled: false,
                },
            ]
        );
    }

    #[test]
    fn test_all_controls_hidden() {
        let items = compute(&ConfigMother::pages_only(3, 2));
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|item| matches!(item, PageItem::Page { .. })));
    }

    #[rstest]
    #[case(1)]
    #[case(-7)]
    #[case(42)]
    fn test_single_page(#[case] page: i64) {
        let items = compute(&PaginationConfig::new(1).page(page));
        assert_eq!(page_values(&items), [1]);
        let controls: Vec<_> = items
            .iter()
            .filter(|item| matches!(item, PageItem::NavControl { .. }))
            .collect();
        assert_eq!(controls.len(), 4);
        assert!(controls.iter().all(|item| item.is_disabled()));
    }

    #[rstest]
    #[case(0)]
    #[case(-3)]
    fn test_empty_count(#[case] count: i64) {
        for page in [-1, 0, 1, 5] {
            let items = compute(&PaginationConfig::new(count).page(page));
            assert!(page_values(&items).is_empty());
            assert_eq!(items.len(), 4);
            assert!(items.iter().all(PageItem::is_disabled));
            assert!(items.iter().all(|item| item.target_page() == Some(1)));
        }
    }

    #[test]
    fn test_disabled_flags_follow_page() {
        let at_start = compute(&PaginationConfig::new(10).page(1));
        let at_end = compute(&PaginationConfig::new(10).page(10));
        let middle = compute(&PaginationConfig::new(10).page(5));

        let disabled = |items: &[PageItem]| -> Vec<bool> {
            items
                .iter()
                .filter(|item| matches!(item, PageItem::NavControl { .. }))
                .map(PageItem::is_disabled)
                .collect()
        };

        assert_eq!(disabled(&at_start), [true, true, false, false]);
        assert_eq!(disabled(&at_end), [false, false, true, true]);
        assert_eq!(disabled(&middle), [false, false, false, false]);
    }

    #[test]
    fn test_out_of_range_page_has_no_current_item() {
        for page in [-3, 0, 21, 100] {
            let items = compute(&PaginationConfig::new(20).page(page));
            assert!(!items.iter().any(PageItem::is_current), "page {page}");
        }
    }

    #[test]
    fn test_out_of_range_page_targets_stay_valid() {
        let items = compute(&PaginationConfig::new(20).page(25));
        let targets: Vec<(bool, Option<i64>)> = items
            .iter()
            .filter(|item| matches!(item, PageItem::NavControl { .. }))
            .map(|item| (item.is_disabled(), item.target_page()))
            .collect();
        assert_eq!(
            targets,
            [
                (false, Some(1)),
                (false, Some(19)),
                (true, Some(20)),
                (true, Some(20)),
            ]
        );

        let items = compute(&PaginationConfig::new(20).page(-3));
        assert_eq!(items[1].target_page(), Some(1));
        assert!(items[1].is_disabled());
        let next = items[items.len() - 2];
        assert_eq!(next.target_page(), Some(2));
        assert!(!next.is_disabled());
    }

    #[test]
    fn test_negative_counts_behave_as_zero() {
        let negative = compute(&PaginationConfig::new(20).page(10).boundary_count(-2).sibling_count(-5));
        let zero = compute(&PaginationConfig::new(20).page(10).boundary_count(0).sibling_count(0));
        assert_eq!(negative, zero);
    }

    #[test]
    fn test_extreme_counts_do_not_overflow() {
        let items = compute(&ConfigMother::pages_only(i64::MAX, i64::MAX / 2));
        let values = page_values(&items);
        assert_eq!(values.first(), Some(&1));
        assert_eq!(values.last(), Some(&i64::MAX));
        assert!(values.contains(&(i64::MAX / 2)));

        let items = compute(&PaginationConfig::new(i64::MAX).page(i64::MIN));
        assert_eq!(page_values(&items)[..5], [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_extreme_counts_with_controls() {
        let items = compute(&PaginationConfig::new(i64::MAX).page(i64::MAX));

        let next = items
            .iter()
            .find(|item| matches!(item, PageItem::NavControl { kind: NavKind::Next, .. }));
        assert_eq!(
            next,
            Some(&PageItem::NavControl {
                kind: NavKind::Next,
                target_page: i64::MAX,
                is_disabled: true,
            })
        );
        assert_eq!(
            items.last(),
            Some(&PageItem::NavControl {
                kind: NavKind::Last,
                target_page: i64::MAX,
                is_disabled: true,
            })
        );
        assert_eq!(
            items[1],
            PageItem::NavControl {
                kind: NavKind::Previous,
                target_page: i64::MAX - 1,
                is_disabled: false,
            }
        );
    }

    #[test]
    fn test_deterministic() {
        let config = PaginationConfig::new(37).page(12).boundary_count(2);
        assert_eq!(compute(&config), compute(&config));
    }

    // ------------------------------------------------------------------------
    // Invariants over an exhaustive grid of small configurations
    // ------------------------------------------------------------------------

    fn small_configs() -> impl Iterator<Item = PaginationConfig> {
        (0..=30).flat_map(|count| {
            (-2..=count + 2).flat_map(move |page| {
                (-1..=6).flat_map(move |boundary| {
                    (-1..=6).map(move |sibling| {
                        PaginationConfig::new(count)
                            .page(page)
                            .boundary_count(boundary)
                            .sibling_count(sibling)
                    })
                })
            })
        })
    }

    #[test]
    fn test_pages_strictly_increasing_and_in_range() {
        for config in small_configs() {
            let values = page_values(&compute(&config));
            assert!(
                values.windows(2).all(|pair| pair[0] < pair[1]),
                "{config:?} -> {values:?}"
            );
            assert!(
                values.iter().all(|value| (1..=config.count).contains(value)),
                "{config:?} -> {values:?}"
            );
        }
    }

    #[test]
    fn test_ellipsis_hides_at_least_two_pages() {
        for config in small_configs() {
            let items = compute(&config);
            let numeric: Vec<&PageItem> = items
                .iter()
                .filter(|item| !matches!(item, PageItem::NavControl { .. }))
                .collect();

            for (index, item) in numeric.iter().enumerate() {
                if !matches!(item, PageItem::Ellipsis { .. }) {
                    continue;
                }
                let before = index
                    .checked_sub(1)
                    .and_then(|i| numeric[i].target_page())
                    .unwrap_or(0);
                let after = numeric
                    .get(index + 1)
                    .and_then(|next| next.target_page())
                    .unwrap_or(config.count + 1);
                assert!(after - before >= 3, "{config:?} -> {}", glyphs(&items));
            }
        }
    }

    #[test]
    fn test_no_adjacent_ellipses() {
        for config in small_configs() {
            let items = compute(&config);
            assert!(
                !items.windows(2).any(|pair| matches!(
                    pair,
                    [PageItem::Ellipsis { .. }, PageItem::Ellipsis { .. }]
                )),
                "{config:?} -> {}",
                glyphs(&items)
            );
        }
    }

    #[test]
    fn test_exactly_one_current_page_when_in_range() {
        for config in small_configs() {
            let current = compute(&config)
                .iter()
                .filter(|item| item.is_current())
                .count();
            let expected = usize::from(config.page_in_range());
            assert_eq!(current, expected, "{config:?}");
        }
    }

    #[test]
    fn test_boundary_pages_always_shown() {
        for config in small_configs().filter(|config| config.count >= 1) {
            let values = page_values(&compute(&config));
            let boundary = config.boundary_count.clamp(0, config.count);
            for edge in (1..=boundary).chain(config.count - boundary + 1..=config.count) {
                assert!(values.contains(&edge), "{config:?} missing {edge}");
            }
        }
    }

    #[test]
    fn test_width_is_stable_once_range_is_long() {
        for boundary in 0..=3_i64 {
            for sibling in 0..=3_i64 {
                let count = 2 * boundary + 2 * sibling + 5;
                let expected = usize::try_from(2 * boundary + 2 * sibling + 3).unwrap();
                for page in 1..=count {
                    let config = ConfigMother::pages_only(count, page)
                        .boundary_count(boundary)
                        .sibling_count(sibling);
                    assert_eq!(compute(&config).len(), expected, "{config:?}");
                }
            }
        }
    }
}
