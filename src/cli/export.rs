//! CLI command for data export
//!
//! Writes the ledger to stdout or a file in the chosen format.

use crate::error::{LedgerError, LedgerResult};
use crate::export::{csv, json, yaml};
use crate::models::Ledger;
use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (transactions only)
    Csv,
    /// JSON format (transactions and summary)
    Json,
    /// YAML format (transactions and summary, human-readable)
    Yaml,
}

/// Write the ledger in `format` to `writer`
pub fn write_export<W: Write>(
    ledger: &Ledger,
    format: ExportFormat,
    writer: &mut W,
) -> LedgerResult<()> {
    match format {
        ExportFormat::Csv => csv::export_transactions_csv(ledger, &mut *writer),
        ExportFormat::Json => json::export_json(ledger, writer, true),
        ExportFormat::Yaml => yaml::export_yaml(ledger, writer),
    }
}

/// Handle the export command
pub fn handle_export_command(
    ledger: &Ledger,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> LedgerResult<()> {
    let Some(output) = output else {
        let stdout = std::io::stdout();
        let mut writer = stdout.lock();
        return write_export(ledger, format, &mut writer);
    };

    let file = File::create(&output).map_err(|e| {
        LedgerError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    write_export(ledger, format, &mut writer)?;
    writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    eprintln!(
        "Exported {} transactions to: {}",
        ledger.len(),
        output.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use tempfile::TempDir;

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new(10);
        ledger
            .add("2024-06-01", "Widget sale", 150.0, TransactionKind::Income)
            .unwrap();
        ledger
    }

    #[test]
    fn test_write_export_formats() {
        let ledger = sample_ledger();

        let mut output = Vec::new();
        write_export(&ledger, ExportFormat::Csv, &mut output).unwrap();
        assert!(String::from_utf8(output).unwrap().starts_with("id,date"));

        let mut output = Vec::new();
        write_export(&ledger, ExportFormat::Json, &mut output).unwrap();
        assert!(String::from_utf8(output).unwrap().contains("\"schema_version\""));

        let mut output = Vec::new();
        write_export(&ledger, ExportFormat::Yaml, &mut output).unwrap();
        assert!(String::from_utf8(output).unwrap().contains("schema_version:"));
    }

    #[test]
    fn test_export_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");

        handle_export_command(&sample_ledger(), ExportFormat::Csv, Some(path.clone())).unwrap();

        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.contains("Widget sale"));
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("ledger.csv");

        let err =
            handle_export_command(&sample_ledger(), ExportFormat::Json, Some(path)).unwrap_err();
        assert!(matches!(err, LedgerError::Export(_)));
    }
}
