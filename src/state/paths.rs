//! Where walletview keeps its config and log files.
//!
//! | Platform | Config | Log |
//! |----------|--------|-----|
//! | Linux | `~/.config/walletview` | `~/.local/share/walletview` |
//! | macOS | `~/Library/Application Support/walletview` | same |
//! | Windows | `%APPDATA%\walletview` | `%LOCALAPPDATA%\walletview` |

use color_eyre::{Result, eyre::eyre};
use std::fs;
use std::path::PathBuf;

/// Directory name under the platform config and data roots.
pub const APP_NAME: &str = "walletview";

/// Settings file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Log file inside the data directory.
pub const LOG_FILE_NAME: &str = "walletview.log";

/// Resolves walletview's files, creating their directories on first use.
#[derive(Debug, Clone, Default)]
pub struct AppPaths;

impl AppPaths {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// `<config root>/walletview`, created if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform has no config root or the directory
    /// cannot be created.
    pub fn config_dir(&self) -> Result<PathBuf> {
        ensure_app_dir(dirs::config_dir(), "config")
    }

    /// `<data root>/walletview`, created if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform has no data root or the directory
    /// cannot be created.
    pub fn data_dir(&self) -> Result<PathBuf> {
        ensure_app_dir(dirs::data_dir(), "data")
    }

    /// Path of the settings file.
    ///
    /// # Errors
    ///
    /// See [`AppPaths::config_dir`].
    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Path of the tracing log file.
    ///
    /// # Errors
    ///
    /// See [`AppPaths::data_dir`].
    pub fn log_file(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(LOG_FILE_NAME))
    }
}

fn ensure_app_dir(root: Option<PathBuf>, kind: &str) -> Result<PathBuf> {
    let dir = root
        .ok_or_else(|| eyre!("no {kind} directory on this platform"))?
        .join(APP_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}
