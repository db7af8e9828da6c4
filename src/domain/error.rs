//! Error types for balance and price sources.
//!
//! The pipeline itself never fails. These errors come from reading the
//! snapshots it consumes (files on disk, malformed JSON, bad CLI input).

use std::path::{Path, PathBuf};

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Error raised while loading wallet data.
#[derive(Debug, Error)]
pub enum WalletError {
    /// Reading a snapshot file failed.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A snapshot file did not contain the expected JSON shape.
    #[error("Parse error in {what}: {message}")]
    Parse {
        /// What was being parsed (e.g., "balances", "prices").
        what: &'static str,
        /// Description of what failed to parse.
        message: String,
    },

    /// Invalid user input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl WalletError {
    /// Create an I/O error for the given path.
    #[must_use]
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a parse error.
    ///
    /// # Arguments
    ///
    /// * `what` - The kind of snapshot that failed to parse
    /// * `message` - Description of the failure
    ///
    /// # Returns
    ///
    /// A new `WalletError::Parse` variant.
    #[must_use]
    pub fn parse(what: &'static str, message: impl Into<String>) -> Self {
        Self::Parse {
            what,
            message: message.into(),
        }
    }

    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_error_display() {
        let parse_err = WalletError::parse("prices", "expected a map");
        assert_eq!(
            parse_err.to_string(),
            "Parse error in prices: expected a map"
        );

        let invalid_err = WalletError::invalid_input("refresh interval must be positive");
        assert_eq!(
            invalid_err.to_string(),
            "Invalid input: refresh interval must be positive"
        );

        let io_err = WalletError::io(
            Path::new("/nowhere/balances.json"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(
            io_err.to_string(),
            "Failed to read /nowhere/balances.json: missing"
        );
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = WalletError::io(
            Path::new("prices.json"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let source = std::error::Error::source(&err).expect("io source");
        assert_eq!(source.to_string(), "denied");
    }
}
