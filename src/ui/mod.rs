//! UI rendering for the walletview TUI.
//!
//! The page is a single bordered container. Its title and style come from
//! [`PageProps`] untouched; inside it sit the header, the balance list, the
//! optional nested content and the footer.
//!
//! - `header` - Summary line and column headings
//! - `footer` - Key hints or the last source error
//! - `helpers` - Shared block builders

pub mod footer;
pub mod header;
pub mod helpers;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::Text,
    widgets::{Paragraph, Wrap},
};

use crate::constants::{DEFAULT_TITLE, FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::state::{App, AppConfig};
use crate::widgets::WalletListWidget;

use helpers::page_block;

// ============================================================================
// PageProps
// ============================================================================

/// Attributes forwarded to the root container, plus an optional nested
/// content slot rendered below the list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageProps {
    /// Container title. [`DEFAULT_TITLE`] when unset.
    pub title: Option<String>,
    /// Style applied to the whole container.
    pub style: Style,
    /// Nested content.
    pub children: Option<Text<'static>>,
}

impl PageProps {
    /// Builds props from the configured title and note.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            title: config.title.clone(),
            style: Style::default(),
            children: config.note.clone().map(Text::from),
        }
    }

    fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    /// Lines needed by the nested content, saturating at `u16::MAX`.
    fn children_height(&self) -> u16 {
        self.children
            .as_ref()
            .map_or(0, |text| u16::try_from(text.height()).unwrap_or(u16::MAX))
    }
}

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Renders the wallet page.
///
/// Takes `&mut App` because the list widget scrolls its state to keep the
/// selection visible.
pub fn render(app: &mut App, frame: &mut Frame) {
    let stale = app.data.last_error().is_some();
    let container = page_block(app.props.title(), stale).style(app.props.style);
    let inner = container.inner(frame.area());
    frame.render_widget(container, frame.area());

    let children_height = app.props.children_height();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(children_height),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(inner);

    header::render(frame, chunks[0], app);

    let list = WalletListWidget::new(app.data.rows());
    frame.render_stateful_widget(list, chunks[1], &mut app.list);

    if let Some(children) = &app.props.children {
        let nested = Paragraph::new(children.clone()).wrap(Wrap { trim: false });
        frame.render_widget(nested, chunks[2]);
    }

    footer::render(frame, chunks[3], app);
}

// ============================================================================
// Tests
// ============================================================================
