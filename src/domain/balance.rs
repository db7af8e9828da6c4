//! Balance, price and display row types.
//!
//! Raw [`WalletBalance`] records arrive from a balance source, [`PriceTable`]
//! snapshots from a price source. The pipeline joins them into
//! [`DisplayRow`]s, each carrying a [`RowKey`] that identifies the record
//! independently of its position in the list.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// WalletBalance
// ============================================================================

/// A single per-currency balance held on one blockchain.
///
/// The amount is signed and may be zero or negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletBalance {
    /// Currency symbol (e.g., "ETH", "ATOM").
    pub currency: String,
    /// Signed amount in whole currency units.
    pub amount: f64,
    /// Blockchain the balance lives on (e.g., "Ethereum").
    pub blockchain: String,
}

impl WalletBalance {
    /// Create a new balance record.
    ///
    /// # Arguments
    ///
    /// * `currency` - Currency symbol
    /// * `amount` - Signed amount
    /// * `blockchain` - Blockchain identifier
    ///
    /// # Returns
    ///
    /// A new `WalletBalance`.
    #[must_use]
    pub fn new(currency: impl Into<String>, amount: f64, blockchain: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            amount,
            blockchain: blockchain.into(),
        }
    }

    /// Stable identity of this record for list rendering.
    #[must_use]
    pub fn key(&self) -> RowKey {
        RowKey::new(&self.currency, &self.blockchain)
    }
}

// ============================================================================
// PriceTable
// ============================================================================

/// Unit USD prices keyed by currency symbol.
///
/// Serialized as a flat JSON object: `{"ETH": 1645.93, "ATOM": 7.18}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTable {
    prices: HashMap<String, f64>,
}

impl PriceTable {
    /// Creates an empty price table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the unit USD price for a currency, if known.
    #[must_use]
    pub fn get(&self, currency: &str) -> Option<f64> {
        self.prices.get(currency).copied()
    }

    /// Number of priced currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Returns true if no prices are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

#[cfg(test)]
impl PriceTable {
    /// Sets the unit price for a currency, returning self for chaining.
    #[must_use]
    pub fn with_price(mut self, currency: impl Into<String>, usd: f64) -> Self {
        self.prices.insert(currency.into(), usd);
        self
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for PriceTable {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            prices: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

// ============================================================================
// FormattedBalance
// ============================================================================

/// A balance paired with its human-readable amount.
///
/// Borrows the underlying record; the formatted string depends only on
/// that record's own amount.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedBalance<'a> {
    /// The source record.
    pub balance: &'a WalletBalance,
    /// Amount rendered with zero fractional digits.
    pub formatted: String,
}

// ============================================================================
// RowKey
// ============================================================================

/// Stable identifier for a rendered row.
///
/// Built from currency and blockchain so that a record keeps its identity
/// when the list is re-sorted or re-filtered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey(String);

impl RowKey {
    /// Creates a key from a currency and blockchain pair.
    #[must_use]
    pub fn new(currency: &str, blockchain: &str) -> Self {
        Self(format!("{currency}@{blockchain}"))
    }

    /// The key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// DisplayRow
// ============================================================================

/// Renderer-ready representation of one balance.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    /// Stable row identity.
    pub key: RowKey,
    /// Currency symbol.
    pub currency: String,
    /// Blockchain identifier.
    pub blockchain: String,
    /// Amount with zero fractional digits.
    pub formatted_amount: String,
    /// Raw signed amount.
    pub amount: f64,
    /// Amount multiplied by the unit price.
    ///
    /// `None` when the currency has no price or the product is not finite.
    pub usd_value: Option<f64>,
}

impl DisplayRow {
    /// Returns true when the row carries a usable USD value.
    #[must_use]
    pub fn has_usd_value(&self) -> bool {
        self.usd_value.is_some()
    }
}

// ============================================================================
// Tests
// ============================================================================
