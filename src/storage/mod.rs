//! Storage layer for the ledger
//!
//! Provides the binary snapshot with atomic writes, the audit log, and
//! automatic directory creation.

pub mod file_io;
pub mod snapshot;

pub use snapshot::SnapshotFile;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{paths::LedgerPaths, settings::Settings};
use crate::error::LedgerError;
use crate::models::Ledger;

/// Storage coordinator: the snapshot file plus the audit log
pub struct Storage {
    snapshot: SnapshotFile,
    audit: Option<AuditLogger>,
    capacity: usize,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: LedgerPaths, settings: &Settings) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self {
            snapshot: SnapshotFile::new(paths.snapshot_file()),
            audit,
            capacity: settings.capacity,
        })
    }

    /// Get the audit logger, if auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Load the ledger from the snapshot
    pub fn load_ledger(&self) -> Result<Ledger, LedgerError> {
        self.snapshot.load(self.capacity)
    }

    /// Persist the full ledger
    pub fn save_ledger(&self, ledger: &Ledger) -> Result<(), LedgerError> {
        self.snapshot.save(ledger)
    }

    /// Record an audit entry (no-op when auditing is disabled)
    pub fn log(&self, entry: &AuditEntry) -> Result<(), LedgerError> {
        match &self.audit {
            Some(logger) => logger.log(entry),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Transaction, TransactionKind};
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("books");
        let storage = Storage::new(LedgerPaths::with_base_dir(base.clone()), &Settings::default())
            .unwrap();

        assert!(base.exists());
        assert!(storage.audit().is_some());
        assert!(storage.load_ledger().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();

        let mut ledger = storage.load_ledger().unwrap();
        ledger
            .add("2024-06-01", "Widget sale", 150.0, TransactionKind::Income)
            .unwrap();
        storage.save_ledger(&ledger).unwrap();

        let reloaded = storage.load_ledger().unwrap();
        assert_eq!(reloaded.len(), 1);
    }

    #[test]
    fn test_audit_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            audit_enabled: false,
            ..Settings::default()
        };
        let storage = Storage::new(paths.clone(), &settings).unwrap();

        let txn = Transaction::new(1, "2024-06-01", "x", 1.0, TransactionKind::Income);
        storage.log(&AuditEntry::create(&txn)).unwrap();

        assert!(storage.audit().is_none());
        assert!(!paths.audit_log().exists());
    }
}
