//! Wallet row widget.
//!
//! Renders one [`DisplayRow`] as a single line: currency and chain on the
//! left, the formatted amount and its USD value right-aligned in columns.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::domain::{DisplayRow, RowKey};
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR, SELECTED_STYLE, SUCCESS_COLOR, WARNING_COLOR};
use crate::widgets::helpers::format_usd;

// ============================================================================
// Column Layout
// ============================================================================

/// Width of the selection marker column.
pub const MARKER_WIDTH: usize = 2;

/// Width of the asset column (currency and blockchain).
pub const ASSET_WIDTH: usize = 24;

/// Width of the formatted amount column.
pub const AMOUNT_WIDTH: usize = 14;

/// Width of the USD value column.
pub const USD_WIDTH: usize = 18;

// ============================================================================
// WalletRow Widget
// ============================================================================

/// One rendered balance row.
///
/// # Example
///
/// ```text
/// ▶ ATOM  Osmosis                       -13           -$90.47
///   BLUR  Ethereum                     -250               $ ?
/// ```
#[derive(Debug, Clone)]
pub struct WalletRow<'a> {
    row: &'a DisplayRow,
    selected: bool,
}

impl<'a> WalletRow<'a> {
    /// Creates a row widget for a display row.
    #[must_use]
    pub const fn new(row: &'a DisplayRow) -> Self {
        Self {
            row,
            selected: false,
        }
    }

    /// Marks the row as selected.
    #[must_use]
    pub const fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Stable identity of the rendered record.
    #[must_use]
    pub fn key(&self) -> &RowKey {
        &self.row.key
    }

    /// Generate the display line.
    #[must_use]
    pub fn to_line(&self) -> Line<'static> {
        let row = self.row;
        let marker = if self.selected { "▶ " } else { "  " };

        let chain_width = ASSET_WIDTH.saturating_sub(row.currency.chars().count() + 2);
        let usd = format_usd(row.usd_value);
        let usd_style = if row.has_usd_value() {
            Style::default().fg(SUCCESS_COLOR)
        } else {
            Style::default().fg(WARNING_COLOR)
        };

        let line = Line::from(vec![
            Span::raw(marker),
            Span::styled(
                row.currency.clone(),
                Style::default()
                    .fg(PRIMARY_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{:<chain_width$}", row.blockchain),
                Style::default().fg(MUTED_COLOR),
            ),
            Span::raw(format!("{:>AMOUNT_WIDTH$}", row.formatted_amount)),
            Span::styled(format!("{usd:>USD_WIDTH$}"), usd_style),
        ]);

        if self.selected {
            line.style(SELECTED_STYLE)
        } else {
            line
        }
    }

    /// Plain-text form used outside the terminal UI.
    #[must_use]
    pub fn to_plain(&self) -> String {
        format!(
            "{}  {}  {}",
            self.row.key,
            self.row.formatted_amount,
            format_usd(self.row.usd_value)
        )
    }
}

impl Widget for WalletRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let line = self.to_line();
        if self.selected {
            buf.set_style(Rect::new(area.x, area.y, area.width, 1), SELECTED_STYLE);
        }
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

// ============================================================================
// Row Projection
// ============================================================================

/// Project display rows into row widgets, one per row, in order.
#[must_use]
pub fn render_rows(rows: &[DisplayRow]) -> Vec<WalletRow<'_>> {
    rows.iter().map(WalletRow::new).collect()
}

/// Plain-text projection of the rows, one line per row.
#[must_use]
pub fn format_rows_plain(rows: &[DisplayRow]) -> String {
    render_rows(rows)
        .iter()
        .map(WalletRow::to_plain)
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WalletBalance;
    use crate::pipeline::build;
    use crate::test_utils::{PriceMother, RowMother, buffer_to_string};

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn test_render_rows_preserves_order_and_keys() {
        let rows = RowMother::worked_example();
        let widgets = render_rows(&rows);

        assert_eq!(widgets.len(), rows.len());
        let keys: Vec<&str> = widgets.iter().map(|w| w.key().as_str()).collect();
        assert_eq!(keys, ["ATOM@Osmosis", "BTC@Ethereum"]);
    }

    #[test]
    fn test_plain_projection() {
        let rows = RowMother::worked_example();
        insta::assert_snapshot!(format_rows_plain(&rows), @r"
        ATOM@Osmosis  -2  -$4.00
        BTC@Ethereum  -5  -$5.00
        ");
    }

    #[test]
    fn test_missing_price_shows_unknown_marker() {
        let rows = build(
            &[WalletBalance::new("DOGE", -3.0, "Neo")],
            &PriceMother::btc_atom(),
        );
        let text = line_text(&WalletRow::new(&rows[0]).to_line());
        assert!(text.contains("DOGE"));
        assert!(text.contains("$ ?"), "got: {text}");
    }

    #[test]
    fn test_selected_row_has_marker() {
        let rows = RowMother::worked_example();
        let selected = line_text(&WalletRow::new(&rows[0]).selected(true).to_line());
        let plain = line_text(&WalletRow::new(&rows[0]).to_line());
        assert!(selected.starts_with("▶ "));
        assert!(plain.starts_with("  "));
    }

    #[test]
    fn test_row_renders_into_buffer() {
        let rows = RowMother::worked_example();
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);

        WalletRow::new(&rows[0]).render(area, &mut buf);
        let content = buffer_to_string(&buf);

        assert!(content.contains("ATOM"));
        assert!(content.contains("Osmosis"));
        assert!(content.contains("-$4.00"));
    }

    #[test]
    fn test_row_render_zero_area_is_noop() {
        let rows = RowMother::worked_example();
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 1));
        WalletRow::new(&rows[0]).render(Rect::new(0, 0, 0, 0), &mut buf);
        assert_eq!(buffer_to_string(&buf).trim(), "");
    }
}
