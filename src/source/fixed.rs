//! In-memory snapshot sources and the built-in demo wallet.

use std::sync::Arc;

use crate::domain::{PriceTable, WalletBalance, WalletError};

use super::{BalanceSource, PriceSource};

/// A source that always returns the same snapshot.
#[derive(Debug, Clone)]
pub struct StaticSource<T: ?Sized> {
    snapshot: Arc<T>,
}

impl<T: ?Sized> StaticSource<T> {
    /// Wraps a snapshot.
    #[must_use]
    pub fn new(snapshot: impl Into<Arc<T>>) -> Self {
        Self {
            snapshot: snapshot.into(),
        }
    }
}

impl BalanceSource for StaticSource<[WalletBalance]> {
    fn balances(&mut self) -> Result<Arc<[WalletBalance]>, WalletError> {
        Ok(Arc::clone(&self.snapshot))
    }
}

impl PriceSource for StaticSource<PriceTable> {
    fn prices(&mut self) -> Result<Arc<PriceTable>, WalletError> {
        Ok(Arc::clone(&self.snapshot))
    }
}

// ============================================================================
// Demo Data
// ============================================================================

/// Balances shown when no balances file is configured.
#[must_use]
pub fn demo_balances() -> Vec<WalletBalance> {
    vec![
        WalletBalance::new("ETH", -0.73, "Ethereum"),
        WalletBalance::new("ATOM", -12.6, "Osmosis"),
        WalletBalance::new("USDC", -1520.0, "Ethereum"),
        WalletBalance::new("ETH", 4.2, "Ethereum"),
        WalletBalance::new("ARB", -88.9, "Arbitrum"),
        WalletBalance::new("SOL", -9.0, "Solana"),
        WalletBalance::new("ZIL", -15000.0, "Zilliqa"),
        WalletBalance::new("OSMO", -340.2, "Osmosis"),
        WalletBalance::new("NEO", -3.4, "Neo"),
        WalletBalance::new("BLUR", -250.0, "Ethereum"),
        WalletBalance::new("GAS", -11.0, "Neo"),
    ]
}

/// Prices shown when no prices file is configured.
#[must_use]
pub fn demo_prices() -> PriceTable {
    [
        ("ATOM", 7.18),
        ("OSMO", 0.38),
        ("ETH", 1645.93),
        ("USDC", 1.0),
        ("ARB", 1.12),
        ("ZIL", 0.0197),
        ("NEO", 8.69),
        ("GAS", 2.72),
        ("SOL", 21.4),
    ]
    .into_iter()
    .collect()
}
