//! Header line: row counts, portfolio total and last refresh time.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::App;
use crate::theme::{HEADING_STYLE, MUTED_COLOR, SUCCESS_COLOR};
use crate::widgets::format_usd;
use crate::widgets::row::{AMOUNT_WIDTH, ASSET_WIDTH, MARKER_WIDTH, USD_WIDTH};

/// Build the summary line.
#[must_use]
pub fn summary_line(app: &App) -> Line<'static> {
    let shown = app.data.rows().len();
    let total = app.data.balance_count();
    let updated = app
        .data
        .refreshed_at()
        .map_or_else(|| "never".to_string(), |t| t.format("%H:%M:%S").to_string());

    Line::from(vec![
        Span::raw(format!("{shown} of {total} balances  ")),
        Span::styled("Total ", Style::default().fg(MUTED_COLOR)),
        Span::styled(
            format_usd(app.data.total_usd()),
            Style::default().fg(SUCCESS_COLOR),
        ),
        Span::styled(format!("  Updated {updated}"), Style::default().fg(MUTED_COLOR)),
    ])
}

/// Column headings aligned with the row widget.
#[must_use]
pub fn column_headings() -> Line<'static> {
    Line::styled(
        format!(
            "{:MARKER_WIDTH$}{:<ASSET_WIDTH$}{:>AMOUNT_WIDTH$}{:>USD_WIDTH$}",
            "", "Asset", "Amount", "USD"
        ),
        HEADING_STYLE,
    )
}

/// Render the header into a two-row area: summary, then column headings.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    if area.height == 0 {
        return;
    }
    let header = Paragraph::new(vec![summary_line(app), column_headings()]);
    frame.render_widget(header, area);
}
