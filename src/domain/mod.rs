//! Domain types for walletview.
//!
//! # Module Organization
//!
//! - [`balance`] - Wallet balances, price tables and display rows
//! - [`priority`] - Blockchain display priority lookup
//! - [`error`] - Errors raised while loading wallet data

// ============================================================================
// Module Declarations
// ============================================================================

pub mod balance;
pub mod error;
pub mod priority;

// ============================================================================
// Re-exports
// ============================================================================

pub use balance::{DisplayRow, FormattedBalance, PriceTable, RowKey, WalletBalance};
pub use error::WalletError;
pub use priority::{UNKNOWN_PRIORITY, priority};
