//! Scrollable wallet list.
//!
//! [`WalletListState`] remembers the selection by [`RowKey`], so the cursor
//! stays on the same balance when the list is re-sorted or re-filtered. If
//! the selected balance disappears, the cursor falls back to the position it
//! last occupied.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::scrollbar,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget},
};

use crate::domain::{DisplayRow, RowKey};
use crate::theme::MUTED_COLOR;
use crate::widgets::row::render_rows;

// ============================================================================
// WalletListState
// ============================================================================

/// Selection and scroll state for [`WalletListWidget`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WalletListState {
    selected: Option<RowKey>,
    last_index: usize,
    offset: usize,
}

impl WalletListState {
    /// Creates a state with no selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected: None,
            last_index: 0,
            offset: 0,
        }
    }

    /// The selected key, if any.
    #[must_use]
    pub const fn selected_key(&self) -> Option<&RowKey> {
        self.selected.as_ref()
    }

    /// Index of the selected row within `rows`.
    #[must_use]
    pub fn selected_index(&self, rows: &[DisplayRow]) -> Option<usize> {
        let key = self.selected_key()?;
        rows.iter().position(|row| &row.key == key)
    }

    /// First visible row.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Re-resolves the selection against a new row list.
    ///
    /// Keeps the selected key when it is still present; otherwise selects
    /// the row now at the previously selected position, clamped to the end.
    pub fn sync(&mut self, rows: &[DisplayRow]) {
        if rows.is_empty() {
            self.selected = None;
            self.last_index = 0;
            self.offset = 0;
            return;
        }
        let index = self
            .selected_index(rows)
            .unwrap_or_else(|| self.last_index.min(rows.len() - 1));
        self.select_index(rows, index);
    }

    /// Moves the selection down one row.
    pub fn select_next(&mut self, rows: &[DisplayRow]) {
        if rows.is_empty() {
            return;
        }
        let next = match self.selected_index(rows) {
            Some(i) => (i + 1).min(rows.len() - 1),
            None => 0,
        };
        self.select_index(rows, next);
    }

    /// Moves the selection up one row.
    pub fn select_previous(&mut self, rows: &[DisplayRow]) {
        if rows.is_empty() {
            return;
        }
        let previous = self.selected_index(rows).map_or(0, |i| i.saturating_sub(1));
        self.select_index(rows, previous);
    }

    fn select_index(&mut self, rows: &[DisplayRow], index: usize) {
        self.selected = rows.get(index).map(|row| row.key.clone());
        self.last_index = index;
    }

    /// Adjusts the offset so the selected row is inside a viewport of
    /// `height` rows.
    fn scroll_to_selection(&mut self, rows: &[DisplayRow], height: usize) {
        let max_offset = rows.len().saturating_sub(height);
        if let Some(index) = self.selected_index(rows) {
            if index < self.offset {
                self.offset = index;
            } else if height > 0 && index >= self.offset + height {
                self.offset = index + 1 - height;
            }
        }
        self.offset = self.offset.min(max_offset);
    }
}

// ============================================================================
// WalletListWidget
// ============================================================================

/// A list of [`WalletRow`](crate::widgets::row::WalletRow)s with keyed
/// selection and a scrollbar.
///
/// The highlighted row is the one whose key matches the state, not the one
/// at the previously selected position.
///
/// # Usage
///
/// ```ignore
/// let mut state = WalletListState::new();
/// state.sync(&rows);
/// frame.render_stateful_widget(WalletListWidget::new(&rows), area, &mut state);
/// ```
#[derive(Debug)]
pub struct WalletListWidget<'a> {
    rows: &'a [DisplayRow],
}

impl<'a> WalletListWidget<'a> {
    /// Message shown when no balance passes the filter.
    pub const EMPTY_MESSAGE: &'static str = "No balances to display";

    /// Creates a list widget over the given rows.
    #[must_use]
    pub const fn new(rows: &'a [DisplayRow]) -> Self {
        Self { rows }
    }
}

impl StatefulWidget for WalletListWidget<'_> {
    type State = WalletListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        if self.rows.is_empty() {
            let msg = Self::EMPTY_MESSAGE;
            let x = area.x + (area.width.saturating_sub(msg.len() as u16)) / 2;
            let y = area.y + area.height / 2;
            buf.set_string(x, y, msg, Style::default().fg(MUTED_COLOR));
            return;
        }

        let height = area.height as usize;
        state.scroll_to_selection(self.rows, height);
        let offset = state.offset();

        let visible = render_rows(self.rows).into_iter().skip(offset).take(height);
        for (line, row) in visible.enumerate() {
            let row_area = Rect::new(area.x, area.y + line as u16, area.width, 1);
            let selected = state.selected_key() == Some(row.key());
            row.selected(selected).render(row_area, buf);
        }

        if self.rows.len() > height {
            render_list_scrollbar(area, buf, self.rows.len(), height, offset);
        }
    }
}

/// Renders a vertical scrollbar on the right edge of `area`.
fn render_list_scrollbar(
    area: Rect,
    buf: &mut Buffer,
    total_items: usize,
    items_per_page: usize,
    position: usize,
) {
    let scrollbar = Scrollbar::default()
        .orientation(ScrollbarOrientation::VerticalRight)
        .symbols(scrollbar::VERTICAL)
        .track_symbol(None)
        .begin_symbol(None)
        .end_symbol(None)
        .style(Style::default().fg(Color::Gray))
        .track_style(Style::default().fg(Color::DarkGray));

    let mut scrollbar_state = ScrollbarState::default()
        .content_length(total_items)
        .viewport_content_length(items_per_page)
        .position(position);

    scrollbar.render(area, buf, &mut scrollbar_state);
}

// ============================================================================
// Tests
// ============================================================================
