//! Application configuration.
//!
//! The configuration file is read from `<config dir>/walletview/config.json`
//! (see [`AppPaths`]). Command line flags override whatever it contains.
//!
//! # Example
//!
//! ```ignore
//! let config = AppConfig::load().with_overrides(None, Some("prices.json".into()), None);
//! let interval = config.refresh_interval()?;
//! ```

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::DEFAULT_REFRESH_MS;
use crate::domain::WalletError;
use crate::state::paths::AppPaths;

// ============================================================================
// AppConfig
// ============================================================================

/// Settings read from the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON file with the wallet balances. Demo data when unset.
    #[serde(default)]
    pub balances_file: Option<PathBuf>,
    /// JSON file with unit USD prices. Demo prices when unset.
    #[serde(default)]
    pub prices_file: Option<PathBuf>,
    /// How often the sources are re-read, in milliseconds.
    #[serde(default = "default_refresh_ms")]
    pub refresh_ms: u64,
    /// Title of the page container.
    #[serde(default)]
    pub title: Option<String>,
    /// Free text shown under the balance list.
    #[serde(default)]
    pub note: Option<String>,
}

const fn default_refresh_ms() -> u64 {
    DEFAULT_REFRESH_MS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            balances_file: None,
            prices_file: None,
            refresh_ms: DEFAULT_REFRESH_MS,
            title: None,
            note: None,
        }
    }
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        AppPaths::new().config_file()
    }

    /// Loads the configuration from disk.
    ///
    /// If the configuration file doesn't exist or cannot be parsed,
    /// returns the default configuration.
    #[must_use]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                tracing::info!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration path cannot be determined
    /// - The file cannot be read
    /// - The JSON content cannot be parsed
    pub fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        let content = fs::read_to_string(&path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Applies command line overrides. `None` keeps the configured value.
    #[must_use]
    pub fn with_overrides(
        mut self,
        balances_file: Option<PathBuf>,
        prices_file: Option<PathBuf>,
        refresh_ms: Option<u64>,
    ) -> Self {
        if balances_file.is_some() {
            self.balances_file = balances_file;
        }
        if prices_file.is_some() {
            self.prices_file = prices_file;
        }
        if let Some(ms) = refresh_ms {
            self.refresh_ms = ms;
        }
        self
    }

    /// The source polling interval.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::InvalidInput`] when the interval is zero.
    pub fn refresh_interval(&self) -> std::result::Result<Duration, WalletError> {
        if self.refresh_ms == 0 {
            return Err(WalletError::invalid_input(
                "refresh interval must be at least 1 ms",
            ));
        }
        Ok(Duration::from_millis(self.refresh_ms))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.balances_file.is_none());
        assert!(config.prices_file.is_none());
        assert_eq!(config.refresh_ms, DEFAULT_REFRESH_MS);
    }

    #[test]
    fn test_serialization_round_trip() {
        let config = AppConfig {
            balances_file: Some(PathBuf::from("/data/balances.json")),
            prices_file: Some(PathBuf::from("/data/prices.json")),
            refresh_ms: 250,
            title: Some("Main wallet".to_string()),
            note: None,
        };

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"title":"Savings"}"#).unwrap();
        assert_eq!(config.title.as_deref(), Some("Savings"));
        assert_eq!(config.refresh_ms, DEFAULT_REFRESH_MS);
        assert!(config.balances_file.is_none());
    }

    #[rstest]
    #[case::no_overrides(None, None, None, Some("cfg-b.json"), Some("cfg-p.json"), 500)]
    #[case::balances_only(Some("cli-b.json"), None, None, Some("cli-b.json"), Some("cfg-p.json"), 500)]
    #[case::all(Some("cli-b.json"), Some("cli-p.json"), Some(20), Some("cli-b.json"), Some("cli-p.json"), 20)]
    fn test_with_overrides(
        #[case] balances: Option<&str>,
        #[case] prices: Option<&str>,
        #[case] refresh: Option<u64>,
        #[case] expected_balances: Option<&str>,
        #[case] expected_prices: Option<&str>,
        #[case] expected_refresh: u64,
    ) {
        let base = AppConfig {
            balances_file: Some("cfg-b.json".into()),
            prices_file: Some("cfg-p.json".into()),
            refresh_ms: 500,
            ..AppConfig::default()
        };

        let config = base.with_overrides(balances.map(PathBuf::from), prices.map(PathBuf::from), refresh);

        assert_eq!(config.balances_file, expected_balances.map(PathBuf::from));
        assert_eq!(config.prices_file, expected_prices.map(PathBuf::from));
        assert_eq!(config.refresh_ms, expected_refresh);
    }

    #[test]
    fn test_refresh_interval_rejects_zero() {
        let config = AppConfig {
            refresh_ms: 0,
            ..AppConfig::default()
        };
        assert!(matches!(
            config.refresh_interval(),
            Err(WalletError::InvalidInput(_))
        ));
        assert_eq!(
            AppConfig::default().refresh_interval().unwrap(),
            Duration::from_millis(DEFAULT_REFRESH_MS)
        );
    }

    #[test]
    fn test_config_path_has_json_extension() {
        if let Ok(path) = AppConfig::config_path() {
            let extension = path.extension().and_then(|e| e.to_str());
            assert_eq!(extension, Some("json"));
        }
    }
}
