//! Rendering for the pager demo.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::pagination::PageItem;
use crate::theme::{BORDER_STYLE, MUTED_STYLE, TITLE_STYLE};
use crate::widgets::PagerWidget;

const HELP_TEXT: &str =
    "←/→ page  Tab focus  Enter open  +/- siblings  [/] boundary  f p n L controls  q quit";

// ============================================================================
// Layout
// ============================================================================

/// Screen regions of the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    /// The bordered box around the pager.
    pub frame: Rect,
    /// The single row the pager is drawn on, centered inside `frame`.
    pub pager: Rect,
    pub status: Rect,
    pub help: Rect,
}

impl UiLayout {
    /// Splits `area` and centers a pager wide enough for `items`.
    #[must_use]
    pub fn new(area: Rect, items: &[PageItem]) -> Self {
        let [frame, status, help] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Min(1),
            ])
            .areas(area);

        let inner = Block::default().borders(Borders::ALL).inner(frame);
        let width = PagerWidget::width(items).min(inner.width);
        let pager = Rect {
            x: inner.x + (inner.width - width) / 2,
            y: inner.y,
            width,
            height: inner.height.min(1),
        };

        Self {
            frame,
            pager,
            status,
            help,
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Draws the whole demo screen.
pub fn render(app: &mut App, frame: &mut Frame) {
    let layout = UiLayout::new(frame.area(), app.items());

    let block = Block::default()
        .title(Span::styled(" Pagination ", TITLE_STYLE))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE);
    frame.render_widget(block, layout.frame);

    let (items, pager_state) = app.pager_parts();
    frame.render_stateful_widget(PagerWidget::new(items), layout.pager, pager_state);

    frame.render_widget(Paragraph::new(status_lines(app)), layout.status);
    frame.render_widget(
        Paragraph::new(Line::styled(HELP_TEXT, MUTED_STYLE)),
        layout.help,
    );
}

fn status_lines(app: &App) -> Vec<Line<'static>> {
    let config = app.config();
    let summary = format!(
        " Page {} of {}  boundary {}  siblings {}",
        config.page, config.count, config.boundary_count, config.sibling_count
    );
    let focused = app
        .focused_label()
        .map_or_else(|| " Focused: none".to_string(), |label| format!(" Focused: {label}"));

    vec![Line::raw(summary), Line::styled(focused, MUTED_STYLE)]
}

// ============================================================================
// Tests
// ============================================================================
