//! YAML Export functionality
//!
//! Exports the ledger to YAML for a human-readable copy.

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::ExportDocument;
use crate::models::Ledger;
use std::io::Write;

/// Export the ledger to YAML format
pub fn export_yaml<W: Write>(ledger: &Ledger, writer: &mut W) -> LedgerResult<()> {
    let export = ExportDocument::from_ledger(ledger);

    let header = format!(
        "# E-Commerce Ledger Export\n# Generated: {}\n# App Version: {}\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}
