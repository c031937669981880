//! JSON Export functionality
//!
//! Exports the whole ledger, with its summary, as a versioned JSON document.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Ledger, Transaction};
use crate::reports::FinancialSummary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDocument {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All transactions in ledger order
    pub transactions: Vec<Transaction>,

    /// Totals at the time of export
    pub summary: FinancialSummary,
}

impl ExportDocument {
    /// Build an export from the in-memory ledger
    pub fn from_ledger(ledger: &Ledger) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions: ledger.transactions().to_vec(),
            summary: FinancialSummary::generate(ledger),
        }
    }
}

/// Export the ledger to JSON
pub fn export_json<W: Write>(ledger: &Ledger, writer: &mut W, pretty: bool) -> LedgerResult<()> {
    let export = ExportDocument::from_ledger(ledger);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| LedgerError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new(10);
        ledger
            .add("2024-06-01", "Widget sale", 150.0, TransactionKind::Income)
            .unwrap();
        ledger
            .add("2024-06-02", "Ad spend", 40.0, TransactionKind::Expense)
            .unwrap();
        ledger
    }

    #[test]
    fn test_export_document() {
        let export = ExportDocument::from_ledger(&sample_ledger());

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.transactions.len(), 2);
        assert_eq!(export.summary.profit, 110.0);
    }

    #[test]
    fn test_export_json_parses_back() {
        let mut output = Vec::new();
        export_json(&sample_ledger(), &mut output, true).unwrap();

        let parsed: ExportDocument = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.transactions[0].description, "Widget sale");
        assert_eq!(parsed.transactions[1].kind, TransactionKind::Expense);
        assert_eq!(parsed.summary.total_expense, 40.0);
    }

    #[test]
    fn test_export_json_compact() {
        let mut output = Vec::new();
        export_json(&Ledger::new(10), &mut output, false).unwrap();

        let json = String::from_utf8(output).unwrap();
        assert_eq!(json.lines().count(), 1);
        assert!(json.contains("\"transactions\":[]"));
        assert!(!json.contains("expense_ratio"));
    }
}
