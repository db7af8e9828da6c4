//! Wallet data state.
//!
//! Owns the balance and price sources, the last good snapshot from each, and
//! the memoizing pipeline that turns them into display rows. A failing
//! source keeps its previous snapshot; the error is kept for the status line.

use std::sync::Arc;

use chrono::{DateTime, Local};
use tracing::{debug, warn};

use crate::domain::{DisplayRow, PriceTable, WalletBalance, WalletError};
use crate::pipeline::BalancePipeline;
use crate::source::{
    BalanceSource, JsonFileSource, PriceSource, StaticSource, demo_balances, demo_prices,
};
use crate::state::AppConfig;
use crate::widgets::total_usd;

/// Sources, snapshots and derived rows.
pub struct WalletData {
    balance_source: Box<dyn BalanceSource>,
    price_source: Box<dyn PriceSource>,
    balances: Arc<[WalletBalance]>,
    prices: Arc<PriceTable>,
    pipeline: BalancePipeline,
    rows: Arc<[DisplayRow]>,
    last_error: Option<String>,
    refreshed_at: Option<DateTime<Local>>,
}

impl WalletData {
    /// Creates a data state with empty snapshots. Call [`Self::refresh`] to load.
    #[must_use]
    pub fn new(balance_source: Box<dyn BalanceSource>, price_source: Box<dyn PriceSource>) -> Self {
        Self {
            balance_source,
            price_source,
            balances: Arc::from(Vec::new()),
            prices: Arc::new(PriceTable::new()),
            pipeline: BalancePipeline::new(),
            rows: Arc::from(Vec::new()),
            last_error: None,
            refreshed_at: None,
        }
    }

    /// Builds sources from the configuration: JSON files where configured,
    /// the demo wallet otherwise.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let balance_source: Box<dyn BalanceSource> = match &config.balances_file {
            Some(path) => Box::new(JsonFileSource::for_balances(path)),
            None => Box::new(StaticSource::<[WalletBalance]>::new(demo_balances())),
        };
        let price_source: Box<dyn PriceSource> = match &config.prices_file {
            Some(path) => Box::new(JsonFileSource::for_prices(path)),
            None => Box::new(StaticSource::<PriceTable>::new(demo_prices())),
        };
        Self::new(balance_source, price_source)
    }

    /// Re-reads both sources and rebuilds the rows, failing on the first
    /// source error.
    ///
    /// # Errors
    ///
    /// Returns the source error; snapshots are left untouched in that case.
    pub fn try_refresh(&mut self) -> Result<Arc<[DisplayRow]>, WalletError> {
        let balances = self.balance_source.balances()?;
        let prices = self.price_source.prices()?;
        self.balances = balances;
        self.prices = prices;
        self.last_error = None;
        self.rebuild();
        Ok(Arc::clone(&self.rows))
    }

    /// Re-reads both sources, keeping the previous snapshot of any source
    /// that fails. Returns true if the rows changed.
    pub fn refresh(&mut self) -> bool {
        let before = Arc::clone(&self.rows);
        let mut errors = Vec::new();

        match self.balance_source.balances() {
            Ok(balances) => self.balances = balances,
            Err(err) => {
                warn!("balance source failed: {err}");
                errors.push(err.to_string());
            }
        }
        match self.price_source.prices() {
            Ok(prices) => {
                if prices.is_empty() {
                    debug!("price source returned no prices");
                }
                self.prices = prices;
            }
            Err(err) => {
                warn!("price source failed: {err}");
                errors.push(err.to_string());
            }
        }

        self.last_error = (!errors.is_empty()).then(|| errors.join("; "));
        self.rebuild();
        !Arc::ptr_eq(&before, &self.rows)
    }

    /// Drops the cached rows so the next refresh rebuilds them even when
    /// neither source changed.
    pub fn invalidate(&mut self) {
        self.pipeline.invalidate();
    }

    fn rebuild(&mut self) {
        self.rows = self.pipeline.rows(&self.balances, &self.prices);
        self.refreshed_at = Some(Local::now());
    }

    /// Current display rows.
    #[must_use]
    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    /// Number of balances in the current snapshot, before filtering.
    #[must_use]
    pub fn balance_count(&self) -> usize {
        self.balances.len()
    }

    /// Sum of the known USD values of all rows.
    #[must_use]
    pub fn total_usd(&self) -> Option<f64> {
        total_usd(self.rows.iter().map(|row| row.usd_value))
    }

    /// The most recent source error, if the last refresh had one.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// When the rows were last rebuilt or re-validated.
    #[must_use]
    pub const fn refreshed_at(&self) -> Option<DateTime<Local>> {
        self.refreshed_at
    }

    /// How many times the pipeline actually recomputed.
    #[must_use]
    pub const fn recomputations(&self) -> u64 {
        self.pipeline.recomputations()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{BalanceMother, PriceMother, temp_file};
    use std::fs;

    fn worked_example_data() -> WalletData {
        WalletData::new(
            Box::new(StaticSource::<[WalletBalance]>::new(BalanceMother::worked_example())),
            Box::new(StaticSource::<PriceTable>::new(PriceMother::btc_atom())),
        )
    }

    #[test]
    fn test_refresh_loads_rows() {
        let mut data = worked_example_data();
        assert!(data.rows().is_empty());

        assert!(data.refresh(), "first refresh changes rows");
        assert_eq!(data.rows().len(), 2);
        assert_eq!(data.balance_count(), 3);
        assert_eq!(data.total_usd(), Some(-9.0));
        assert!(data.refreshed_at().is_some());
    }

    #[test]
    fn test_unchanged_sources_do_not_recompute() {
        let mut data = worked_example_data();
        data.refresh();
        assert!(!data.refresh());
        assert!(!data.refresh());
        assert_eq!(data.recomputations(), 1);
    }

    #[test]
    fn test_invalidate_forces_recompute_on_next_refresh() {
        let mut data = worked_example_data();
        data.refresh();
        data.invalidate();

        assert!(data.refresh(), "rebuilt rows are a new snapshot");
        assert_eq!(data.recomputations(), 2);
        assert_eq!(data.rows().len(), 2);
    }

    #[test]
    fn test_price_file_change_recomputes_with_same_balances() {
        let prices_path = temp_file("data-prices", r#"{"BTC": 1, "ATOM": 2}"#);
        let mut data = WalletData::new(
            Box::new(StaticSource::<[WalletBalance]>::new(BalanceMother::worked_example())),
            Box::new(JsonFileSource::for_prices(&prices_path)),
        );

        data.refresh();
        assert_eq!(data.rows()[0].usd_value, Some(-4.0));

        fs::write(&prices_path, r#"{"BTC": 1, "ATOM": 3}"#).unwrap();
        assert!(data.refresh());
        assert_eq!(data.rows()[0].usd_value, Some(-6.0));
        assert_eq!(data.recomputations(), 2);

        let _ = fs::remove_file(prices_path);
    }

    #[test]
    fn test_failing_source_keeps_last_snapshot() {
        let prices_path = temp_file("data-flaky", r#"{"BTC": 1, "ATOM": 2}"#);
        let mut data = WalletData::new(
            Box::new(StaticSource::<[WalletBalance]>::new(BalanceMother::worked_example())),
            Box::new(JsonFileSource::for_prices(&prices_path)),
        );
        data.refresh();

        fs::write(&prices_path, "not json").unwrap();
        assert!(!data.refresh(), "rows stay as they were");
        assert_eq!(data.rows()[0].usd_value, Some(-4.0));
        assert!(data.last_error().is_some_and(|e| e.contains("prices")));

        assert!(data.try_refresh().is_err());

        fs::write(&prices_path, r#"{"BTC": 1, "ATOM": 2}"#).unwrap();
        data.refresh();
        assert!(data.last_error().is_none());

        let _ = fs::remove_file(prices_path);
    }

    #[test]
    fn test_from_config_defaults_to_demo_wallet() {
        let mut data = WalletData::from_config(&AppConfig::default());
        let rows = data.try_refresh().unwrap();
        assert!(!rows.is_empty());
        assert_eq!(rows[0].blockchain, "Osmosis");
    }
}
