//! Balance and price sources.
//!
//! The pipeline only reads snapshots. A source hands out an `Arc` so the
//! pipeline can tell by identity whether anything changed since its last
//! build; an implementation should return the same `Arc` for as long as its
//! data stays the same.
//!
//! - [`StaticSource`] - a fixed in-memory snapshot (demo data, tests)
//! - [`JsonFileSource`] - a JSON file re-read on every call

mod file;
mod fixed;

use std::sync::Arc;

use crate::domain::{PriceTable, WalletBalance, WalletError};

pub use file::JsonFileSource;
pub use fixed::{StaticSource, demo_balances, demo_prices};

/// Supplies the current wallet balances.
pub trait BalanceSource {
    /// Read the current balance snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be loaded.
    fn balances(&mut self) -> Result<Arc<[WalletBalance]>, WalletError>;
}

/// Supplies the current unit USD prices.
pub trait PriceSource {
    /// Read the current price snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be loaded.
    fn prices(&mut self) -> Result<Arc<PriceTable>, WalletError>;
}
