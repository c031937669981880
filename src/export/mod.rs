//! Ledger export
//!
//! Writes the ledger out in other formats:
//! - CSV: transactions only (spreadsheet-compatible)
//! - JSON: transactions plus summary, machine-readable
//! - YAML: same document as JSON, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_transactions_csv;
pub use json::{export_json, ExportDocument, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;
