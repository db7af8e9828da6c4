//! Balance pipeline: filter, rank, format and price wallet balances.
//!
//! [`build`] turns a balance snapshot and a price snapshot into the ordered
//! list of [`DisplayRow`]s the list widget renders:
//!
//! 1. keep balances on a known chain whose amount is zero or negative
//! 2. stable-sort by chain priority, highest first
//! 3. format, price and project each survivor in a single pass
//!
//! [`BalancePipeline`] memoizes the result on the identity of *both* inputs,
//! so a new price snapshot always produces fresh rows even when the balance
//! snapshot is unchanged.

use std::cmp::Reverse;
use std::sync::Arc;

use tracing::debug;

use crate::domain::{
    DisplayRow, FormattedBalance, PriceTable, UNKNOWN_PRIORITY, WalletBalance, priority,
};

// ============================================================================
// Stages
// ============================================================================

/// Returns true if a balance belongs on the list.
///
/// Only balances on a ranked chain with `amount <= 0` pass. NaN amounts fail
/// the comparison and are dropped.
#[must_use]
pub fn is_eligible(balance: &WalletBalance) -> bool {
    priority(&balance.blockchain) > UNKNOWN_PRIORITY && balance.amount <= 0.0
}

/// Magnitude from which amounts are printed in exponent form.
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Format an amount with zero fractional digits.
///
/// Rounds half away from zero. Negative values that round to zero keep
/// their sign (`-0.4` → `"-0"`), while `-0.0` itself prints as `"0"`.
/// Non-finite values print as `NaN`, `Infinity` and `-Infinity`.
/// Magnitudes of `1e21` and above switch to shortest exponent form
/// (`-1e+21`, `1.5e+21`), the same text JavaScript produces for them.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_amount(2.5), "3");
/// assert_eq!(format_amount(-2.5), "-3");
/// assert_eq!(format_amount(f64::NAN), "NaN");
/// ```
#[must_use]
pub fn format_amount(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{sign}Infinity");
    }
    if amount.abs() >= EXPONENT_THRESHOLD {
        let exponent = format!("{:e}", amount.abs());
        return format!("{sign}{}", exponent.replacen('e', "e+", 1));
    }
    let magnitude = amount.abs().round();
    format!("{sign}{magnitude:.0}")
}

/// Attach the formatted amount to a balance.
#[must_use]
pub fn format_balance(balance: &WalletBalance) -> FormattedBalance<'_> {
    FormattedBalance {
        balance,
        formatted: format_amount(balance.amount),
    }
}

/// USD value of a balance, or `None` if it cannot be priced.
#[must_use]
pub fn usd_value(balance: &WalletBalance, prices: &PriceTable) -> Option<f64> {
    let Some(unit_price) = prices.get(&balance.currency) else {
        debug!(currency = %balance.currency, "no price for currency");
        return None;
    };
    Some(unit_price * balance.amount).filter(|value| value.is_finite())
}

fn project(formatted: FormattedBalance<'_>, prices: &PriceTable) -> DisplayRow {
    let balance = formatted.balance;
    DisplayRow {
        key: balance.key(),
        currency: balance.currency.clone(),
        blockchain: balance.blockchain.clone(),
        formatted_amount: formatted.formatted,
        amount: balance.amount,
        usd_value: usd_value(balance, prices),
    }
}

// ============================================================================
// Build
// ============================================================================

/// Build display rows from a balance snapshot and a price snapshot.
///
/// Pure and deterministic: equal inputs give equal outputs.
#[must_use]
pub fn build(balances: &[WalletBalance], prices: &PriceTable) -> Vec<DisplayRow> {
    let mut eligible: Vec<&WalletBalance> = balances.iter().filter(|b| is_eligible(b)).collect();

    // sort_by_key is stable: equal-priority balances keep their input order
    eligible.sort_by_key(|b| Reverse(priority(&b.blockchain)));

    eligible
        .into_iter()
        .map(|balance| project(format_balance(balance), prices))
        .collect()
}

// ============================================================================
// BalancePipeline
// ============================================================================

#[derive(Debug)]
struct Memo {
    balances: Arc<[WalletBalance]>,
    prices: Arc<PriceTable>,
    rows: Arc<[DisplayRow]>,
}

/// Memoizing wrapper around [`build`].
///
/// The cache key is the pointer identity of both snapshots. Holding the
/// keyed `Arc`s keeps their allocations alive, so an address can not be
/// reused by a different snapshot while it is cached.
///
/// # Example
///
/// ```ignore
/// let mut pipeline = BalancePipeline::new();
/// let rows = pipeline.rows(&balances, &prices);
/// let again = pipeline.rows(&balances, &prices);
/// assert!(Arc::ptr_eq(&rows, &again));
/// ```
#[derive(Debug, Default)]
pub struct BalancePipeline {
    memo: Option<Memo>,
    recomputations: u64,
}

impl BalancePipeline {
    /// Creates a pipeline with an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns rows for the given snapshots, recomputing only when either
    /// snapshot differs from the previous call.
    pub fn rows(
        &mut self,
        balances: &Arc<[WalletBalance]>,
        prices: &Arc<PriceTable>,
    ) -> Arc<[DisplayRow]> {
        if let Some(memo) = &self.memo
            && Arc::ptr_eq(&memo.balances, balances)
            && Arc::ptr_eq(&memo.prices, prices)
        {
            return Arc::clone(&memo.rows);
        }

        let rows: Arc<[DisplayRow]> = build(balances, prices).into();
        self.recomputations += 1;
        debug!(
            balances = balances.len(),
            prices = prices.len(),
            rows = rows.len(),
            recomputations = self.recomputations,
            "rebuilt balance rows"
        );

        self.memo = Some(Memo {
            balances: Arc::clone(balances),
            prices: Arc::clone(prices),
            rows: Arc::clone(&rows),
        });
        rows
    }

    /// Number of times rows have been rebuilt.
    #[must_use]
    pub const fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// Drops the cached rows so the next call rebuilds.
    pub fn invalidate(&mut self) {
        self.memo = None;
    }
}

// ============================================================================
// Tests
// ============================================================================
