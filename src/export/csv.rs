//! CSV Export functionality
//!
//! Exports transactions to CSV, one row per transaction in ledger order.

use crate::error::{LedgerError, LedgerResult};
use crate::models::Ledger;
use std::io::Write;

/// Column names of the CSV export
pub const CSV_HEADER: [&str; 5] = ["id", "date", "description", "amount", "kind"];

/// Export all transactions to CSV
pub fn export_transactions_csv<W: Write>(ledger: &Ledger, writer: W) -> LedgerResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer
        .write_record(CSV_HEADER)
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    for txn in ledger {
        csv_writer
            .write_record([
                txn.id.to_string(),
                txn.date.clone(),
                txn.description.clone(),
                format!("{:.2}", txn.amount),
                txn.kind.label().to_string(),
            ])
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}
