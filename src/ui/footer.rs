//! Footer bar with keyboard shortcuts, or the last source error.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Paragraph, Wrap},
};

use crate::state::App;
use crate::theme::{ERROR_COLOR, MUTED_COLOR};

/// Keyboard shortcuts shown when nothing went wrong.
pub const SHORTCUTS: &str = "q:Quit  r:Reload  j/k:Move";

/// Renders the footer bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let footer = match app.data.last_error() {
        Some(err) => Paragraph::new(format!("! {err}")).style(Style::default().fg(ERROR_COLOR)),
        None => Paragraph::new(SHORTCUTS).style(Style::default().fg(MUTED_COLOR)),
    };
    frame.render_widget(
        footer
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}
