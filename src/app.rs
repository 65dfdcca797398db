//! Interactive pager state.
//!
//! [`App`] owns the current [`PaginationConfig`], recomputes items after every
//! command and reports page changes through a caller-supplied callback, the
//! same way a pager embedded in a larger UI would.

use ratatui::layout::Rect;

use crate::commands::PagerCommand;
use crate::pagination::{PageItem, PaginationConfig, compute};
use crate::widgets::{PagerState, PagerWidget};

/// Callback invoked with the new page whenever the page changes.
pub type OnChange = Box<dyn FnMut(i64)>;

/// Upper bound for boundary and sibling counts adjusted from the keyboard.
const MAX_VISIBILITY: i64 = 8;

pub struct App {
    config: PaginationConfig,
    items: Vec<PageItem>,
    pub pager_state: PagerState,
    on_change: OnChange,
    /// Set once a quit command is received.
    pub exit: bool,
}

impl App {
    /// Creates the app, computing the initial items and focusing the
    /// current page.
    #[must_use]
    pub fn new(config: PaginationConfig, on_change: OnChange) -> Self {
        let items = compute(&config);
        let mut pager_state = PagerState::new();
        pager_state.focus_current(&items);
        Self {
            config,
            items,
            pager_state,
            on_change,
            exit: false,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &PaginationConfig {
        &self.config
    }

    #[must_use]
    pub fn items(&self) -> &[PageItem] {
        &self.items
    }

    /// Items and focus state together, for rendering.
    pub fn pager_parts(&mut self) -> (&[PageItem], &mut PagerState) {
        (&self.items, &mut self.pager_state)
    }

    /// Applies a command.
    pub fn update(&mut self, command: PagerCommand) {
        if command.is_exit() {
            tracing::info!("Quitting pager demo");
            self.exit = true;
            return;
        }
        if command.is_visibility() {
            tracing::debug!(?command, "Adjusting pager visibility");
        }

        let anchor = self.config.normalized().anchor_page();
        let last = self.config.normalized().last_page();

        match command {
            PagerCommand::PreviousPage => self.go_to(anchor.saturating_sub(1)),
            PagerCommand::NextPage => self.go_to(anchor.saturating_add(1)),
            PagerCommand::FirstPage => self.go_to(1),
            PagerCommand::LastPage => self.go_to(last),
            PagerCommand::FocusNext => self.pager_state.focus_next(&self.items),
            PagerCommand::FocusPrevious => self.pager_state.focus_previous(&self.items),
            PagerCommand::Activate => {
                if let Some(target) = self.pager_state.focused_target(&self.items) {
                    self.go_to(target);
                }
            }
            PagerCommand::IncreaseSiblings => {
                self.reconfigure(|config| {
                    config.sibling_count(config.sibling_count.saturating_add(1).min(MAX_VISIBILITY))
                });
            }
            PagerCommand::DecreaseSiblings => {
                self.reconfigure(|config| config.sibling_count(config.sibling_count.saturating_sub(1).max(0)));
            }
            PagerCommand::IncreaseBoundary => {
                self.reconfigure(|config| {
                    config.boundary_count(config.boundary_count.saturating_add(1).min(MAX_VISIBILITY))
                });
            }
            PagerCommand::DecreaseBoundary => {
                self.reconfigure(|config| {
                    config.boundary_count(config.boundary_count.saturating_sub(1).max(0))
                });
            }
            PagerCommand::ToggleFirst => {
                self.reconfigure(|config| config.hide_first(!config.hide_first));
            }
            PagerCommand::TogglePrevious => {
                self.reconfigure(|config| config.hide_prev(!config.hide_prev));
            }
            PagerCommand::ToggleNext => {
                self.reconfigure(|config| config.hide_next(!config.hide_next));
            }
            PagerCommand::ToggleLast => {
                self.reconfigure(|config| config.hide_last(!config.hide_last));
            }
            PagerCommand::Quit | PagerCommand::Noop => {}
        }
    }

    /// Activates the item under a mouse click inside `pager_area`.
    pub fn click(&mut self, column: u16, row: u16, pager_area: Rect) {
        let Some(index) = PagerWidget::item_at(&self.items, pager_area, column, row) else {
            return;
        };
        let item = self.items[index];
        if !item.is_activatable() {
            return;
        }
        if let Some(target) = item.target_page() {
            self.go_to(target);
        }
    }

    /// Label of the focused item, for the status line.
    #[must_use]
    pub fn focused_label(&self) -> Option<String> {
        self.pager_state
            .focused_item(&self.items)
            .map(PageItem::label)
    }

    /// Switches to `page` (clamped to a valid page) and notifies `on_change`
    /// if the page actually changed.
    fn go_to(&mut self, page: i64) {
        let last = self.config.normalized().last_page();
        let page = page.clamp(1, last);
        if self.config.count < 1 || page == self.config.page {
            return;
        }

        tracing::debug!(from = self.config.page, to = page, "Changing page");
        self.config = self.config.page(page);
        self.items = compute(&self.config);
        self.pager_state.focus_current(&self.items);
        (self.on_change)(page);
    }

    fn reconfigure(&mut self, change: impl FnOnce(PaginationConfig) -> PaginationConfig) {
        let focused = self.pager_state.focused_item(&self.items).copied();
        self.config = change(self.config);
        self.items = compute(&self.config);

        // Keep focus on the same item when it is still present.
        match focused.and_then(|item| self.items.iter().position(|other| *other == item)) {
            Some(index) => self.pager_state.focus(&self.items, index),
            None => self.pager_state.focus_current(&self.items),
        }
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("config", &self.config)
            .field("items", &self.items.len())
            .field("pager_state", &self.pager_state)
            .field("exit", &self.exit)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
