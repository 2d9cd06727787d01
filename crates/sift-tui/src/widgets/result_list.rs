//! Result list widget — the popup of matched records below the query bar.
//!
//! # Navigation
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Move selection up one row (scrolls view if needed) |
//! | `↓` / `j` | Move selection down one row |
//! | `PageUp` / `Ctrl+u` | Move up one page |
//! | `PageDown` / `Ctrl+d` | Move down one page |
//!
//! `offset` is the index of the first visible row; `cursor` is the absolute
//! index of the selected row and is always kept within the visible window.

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::markup;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{
        Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};
use serde_json::Value;

const PAGE_STEP: usize = 10;

/// One matched record ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub record: Value,
    /// Display string with highlight markers.
    pub display_text: String,
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct ResultListState {
    pub rows: Vec<ResultRow>,
    /// Index of the first visible row.
    pub offset: usize,
    /// Absolute index of the selected row.
    pub cursor: usize,
    /// Cached from the last render so `handle()` can keep the cursor visible.
    last_height: Cell<usize>,
}

impl Default for ResultListState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ResultListState {
    pub fn new(rows: Vec<ResultRow>) -> Self {
        Self {
            rows,
            offset: 0,
            cursor: 0,
            last_height: Cell::new(20),
        }
    }

    /// Replace the rows with a fresh result set and reset the selection.
    pub fn set_rows(&mut self, rows: Vec<ResultRow>) {
        self.rows = rows;
        self.offset = 0;
        self.cursor = 0;
    }

    pub fn selected(&self) -> Option<&ResultRow> {
        self.rows.get(self.cursor)
    }

    fn height(&self) -> usize {
        self.last_height.get().max(1)
    }

    fn keep_cursor_visible(&mut self) {
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + self.height() {
            self.offset = self.cursor + 1 - self.height();
        }
    }

    /// Handle a navigation event from the app shell.
    pub fn handle(&mut self, event: &AppEvent) {
        let total = self.rows.len();
        if total == 0 {
            return;
        }
        let last = total - 1;

        self.cursor = match event {
            AppEvent::Nav(Direction::Up) => self.cursor.saturating_sub(1),
            AppEvent::Nav(Direction::Down) => (self.cursor + 1).min(last),
            AppEvent::ScrollUp => self.cursor.saturating_sub(PAGE_STEP),
            AppEvent::ScrollDown => (self.cursor + PAGE_STEP).min(last),
            _ => return,
        };
        self.keep_cursor_visible();
        tracing::debug!(cursor = self.cursor, offset = self.offset, "results: moved");
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct ResultList<'a> {
    state: &'a ResultListState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> ResultList<'a> {
    pub fn new(state: &'a ResultListState, focused: bool, theme: &'a Theme) -> Self {
        Self { state, focused, theme }
    }
}

impl Widget for ResultList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!("Results ({})", self.state.rows.len());
        let block = Block::bordered()
            .title(title)
            .border_style(self.theme.border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        let height = inner.height as usize;
        // Cache for handle(); draw always runs before the next event.
        self.state.last_height.set(height);

        let total = self.state.rows.len();
        if total == 0 {
            Paragraph::new(Line::from(Span::styled("no matches", self.theme.result_empty)))
                .render(inner, buf);
            return;
        }

        let start = self.state.offset.min(total.saturating_sub(1));
        let end = (start + height).min(total);

        let lines: Vec<Line<'static>> = self.state.rows[start..end]
            .iter()
            .enumerate()
            .map(|(row, result)| {
                let base = if start + row == self.state.cursor {
                    self.theme.result_text.patch(self.theme.result_selected)
                } else {
                    self.theme.result_text
                };
                markup::to_line(&result.display_text, base, self.theme.search_highlight)
            })
            .collect();

        let text_area = Rect { width: inner.width.saturating_sub(1), ..inner };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            width: 1,
            ..inner
        };

        Paragraph::new(lines).render(text_area, buf);

        let mut sb_state = ScrollbarState::new(total)
            .position(start)
            .viewport_content_length(height);
        StatefulWidget::render(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            sb_area,
            buf,
            &mut sb_state,
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(n: usize) -> Vec<ResultRow> {
        (0..n)
            .map(|i| ResultRow {
                record: json!(i),
                display_text: format!("row {i}"),
            })
            .collect()
    }

    #[test]
    fn empty_list_ignores_navigation() {
        let mut state = ResultListState::default();
        state.handle(&AppEvent::Nav(Direction::Down));
        assert_eq!(state.cursor, 0);
        assert!(state.selected().is_none());
    }

    #[test]
    fn cursor_is_clamped() {
        let mut state = ResultListState::new(rows(3));
        for _ in 0..5 {
            state.handle(&AppEvent::Nav(Direction::Down));
        }
        assert_eq!(state.cursor, 2);
        state.handle(&AppEvent::ScrollUp);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn window_follows_cursor() {
        let mut state = ResultListState::new(rows(50));
        state.last_height.set(5);
        state.handle(&AppEvent::ScrollDown);
        assert_eq!(state.cursor, 10);
        assert_eq!(state.offset, 6);
        state.handle(&AppEvent::ScrollUp);
        assert_eq!(state.cursor, 0);
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn set_rows_resets_selection() {
        let mut state = ResultListState::new(rows(20));
        state.handle(&AppEvent::ScrollDown);
        state.set_rows(rows(2));
        assert_eq!(state.cursor, 0);
        assert_eq!(state.offset, 0);
        assert_eq!(state.selected().map(|r| r.display_text.as_str()), Some("row 0"));
    }
}
