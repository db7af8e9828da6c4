//! Block builders shared by the page layout.

use ratatui::{
    style::Style,
    symbols::border,
    widgets::{Block, Borders},
};

use crate::theme::{FOCUSED_BORDER_STYLE, STALE_BORDER_STYLE, TITLE_STYLE, WARNING_COLOR};

/// The outer page container.
///
/// A `stale` page, one whose last refresh failed and which is still showing
/// the previous snapshot, gets a yellow rounded border and a marker in the
/// title instead of the usual double cyan frame.
#[must_use]
pub fn page_block(title: &str, stale: bool) -> Block<'static> {
    let mut label = if title.is_empty() {
        String::new()
    } else {
        format!(" ● {title} ")
    };

    let (border_set, border_style, title_style) = if stale {
        if !label.is_empty() {
            label.push_str("(stale) ");
        }
        (
            border::ROUNDED,
            STALE_BORDER_STYLE,
            Style::new().fg(WARNING_COLOR),
        )
    } else {
        (border::DOUBLE, FOCUSED_BORDER_STYLE, TITLE_STYLE)
    };

    Block::default()
        .borders(Borders::ALL)
        .title(label)
        .title_style(title_style)
        .border_set(border_set)
        .border_style(border_style)
}
