//! Application constants for the walletview TUI.

use std::time::Duration;

// ============================================================================
// Timing
// ============================================================================

/// How often the event loop wakes up when no input arrives.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Default interval between source reads, in milliseconds.
pub const DEFAULT_REFRESH_MS: u64 = 1_000;

// ============================================================================
// UI Dimensions
// ============================================================================

/// Height of the header area: summary line plus column headings.
pub const HEADER_HEIGHT: u16 = 2;

/// Height of the footer bar.
pub const FOOTER_HEIGHT: u16 = 1;

/// Container title when none is configured.
pub const DEFAULT_TITLE: &str = "Wallet";
