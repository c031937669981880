//! Custom error types for the ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The ledger already holds the maximum number of transactions
    #[error("Transaction limit reached ({capacity}). Cannot add more.")]
    CapacityExceeded { capacity: usize },

    /// Kind selector was neither Income nor Expense
    #[error("Invalid transaction type '{0}'. Please enter 'I' or 'E'.")]
    InvalidKind(String),

    /// Unrecognized menu or search-mode selector
    #[error("Invalid choice '{0}'. Please try again.")]
    InvalidChoice(String),

    /// No transaction with the requested id
    #[error("Transaction with ID {id} not found.")]
    NotFound { id: u32 },

    /// The snapshot could not be written
    #[error("Error saving data: {0}")]
    Persistence(String),

    /// The snapshot exists but could not be read as whole records
    #[error("Error loading data: {0}")]
    Load(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LedgerError {
    /// Create a "not found" error for a transaction id
    pub fn not_found(id: u32) -> Self {
        Self::NotFound { id }
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
