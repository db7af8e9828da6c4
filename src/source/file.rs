//! JSON file snapshot source.
//!
//! The file is re-read on every call. When the parsed content equals the
//! previous snapshot the previous `Arc` is returned, so the pipeline keeps
//! its cached rows until the file actually changes.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{PriceTable, WalletBalance, WalletError};

use super::{BalanceSource, PriceSource};

/// A snapshot backed by a JSON file on disk.
///
/// Balances files hold an array of `{currency, amount, blockchain}` objects,
/// prices files a flat `{"SYMBOL": price}` object.
#[derive(Debug)]
pub struct JsonFileSource<T: ?Sized> {
    path: PathBuf,
    what: &'static str,
    current: Option<Arc<T>>,
}

impl JsonFileSource<[WalletBalance]> {
    /// Creates a balance source reading from `path`.
    #[must_use]
    pub fn for_balances(path: impl Into<PathBuf>) -> Self {
        Self::new(path, "balances")
    }
}

impl JsonFileSource<PriceTable> {
    /// Creates a price source reading from `path`.
    #[must_use]
    pub fn for_prices(path: impl Into<PathBuf>) -> Self {
        Self::new(path, "prices")
    }
}

impl<T: ?Sized + PartialEq> JsonFileSource<T> {
    fn new(path: impl Into<PathBuf>, what: &'static str) -> Self {
        Self {
            path: path.into(),
            what,
            current: None,
        }
    }

    fn refresh<P>(&mut self) -> Result<Arc<T>, WalletError>
    where
        P: DeserializeOwned + Into<Arc<T>>,
    {
        let content =
            fs::read_to_string(&self.path).map_err(|e| WalletError::io(&self.path, e))?;
        let parsed: Arc<T> = serde_json::from_str::<P>(&content)
            .map_err(|e| WalletError::parse(self.what, e.to_string()))?
            .into();

        if let Some(current) = &self.current
            && **current == *parsed
        {
            return Ok(Arc::clone(current));
        }

        debug!(path = %self.path.display(), what = self.what, "snapshot changed");
        self.current = Some(Arc::clone(&parsed));
        Ok(parsed)
    }
}

impl BalanceSource for JsonFileSource<[WalletBalance]> {
    fn balances(&mut self) -> Result<Arc<[WalletBalance]>, WalletError> {
        self.refresh::<Vec<WalletBalance>>()
    }
}

impl PriceSource for JsonFileSource<PriceTable> {
    fn prices(&mut self) -> Result<Arc<PriceTable>, WalletError> {
        self.refresh::<PriceTable>()
    }
}

// ============================================================================
// Tests
// ============================================================================
