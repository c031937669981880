//! Path management for the ledger
//!
//! All files live in a single data directory.
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` flag or `LEDGER_DATA_DIR` environment variable (if set)
//! 2. The current working directory

use std::path::PathBuf;

use crate::error::LedgerError;

/// File name of the binary transaction snapshot
pub const SNAPSHOT_FILE_NAME: &str = "ecommerce_finance.dat";

/// Manages all paths used by the ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    /// Directory holding the snapshot, settings and audit log
    base_dir: PathBuf,
}

impl LedgerPaths {
    /// Resolve paths from an optional explicit directory
    ///
    /// # Errors
    ///
    /// Returns an error if no directory is given and the current directory
    /// cannot be determined.
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self, LedgerError> {
        let base_dir = match data_dir {
            Some(dir) => dir,
            None => std::env::current_dir().map_err(|e| {
                LedgerError::Config(format!("Could not determine current directory: {}", e))
            })?,
        };

        Ok(Self { base_dir })
    }

    /// Create LedgerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the transaction snapshot
    pub fn snapshot_file(&self) -> PathBuf {
        self.base_dir.join(SNAPSHOT_FILE_NAME)
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("ledger-config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("ledger-audit.log")
    }

    /// Ensure the data directory exists
    pub fn ensure_directories(&self) -> Result<(), LedgerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LedgerError::Io(format!("Failed to create data directory: {}", e)))
    }
}
