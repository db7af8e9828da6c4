//! Widget components for the walletview TUI.
//!
//! # Module Structure
//!
//! - [`helpers`]: USD and thousands-separator formatting
//! - [`row`]: The per-balance row widget and the row projection
//! - [`list`]: Scrollable list of rows with keyed selection

pub mod helpers;
pub mod list;
pub mod row;

pub use helpers::{format_usd, total_usd};
pub use list::{WalletListState, WalletListWidget};
pub use row::format_rows_plain;
