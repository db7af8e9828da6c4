//! Theme and styling constants for the walletview TUI.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Color Constants
// ============================================================================

/// Primary accent color - focused elements and currency symbols.
pub const PRIMARY_COLOR: Color = Color::Cyan;

/// Known USD values.
pub const SUCCESS_COLOR: Color = Color::Green;

/// Unknown USD values and stale data.
pub const WARNING_COLOR: Color = Color::Yellow;

/// Source errors.
pub const ERROR_COLOR: Color = Color::Red;

/// Muted text color.
pub const MUTED_COLOR: Color = Color::Gray;

// ============================================================================
// Style Constants
// ============================================================================

/// Page border while the last refresh failed.
pub const STALE_BORDER_STYLE: Style = Style::new().fg(WARNING_COLOR);

/// Page border when the data is current.
pub const FOCUSED_BORDER_STYLE: Style = Style::new().fg(PRIMARY_COLOR);

/// Title style for the page header.
pub const TITLE_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

/// Style for the selected row.
pub const SELECTED_STYLE: Style = Style::new().bg(Color::DarkGray);

/// Style for column headings.
pub const HEADING_STYLE: Style = Style::new().fg(MUTED_COLOR).add_modifier(Modifier::BOLD);
