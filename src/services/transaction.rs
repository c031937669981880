//! Transaction service
//!
//! Business logic for adding, editing and deleting transactions. Every
//! successful mutation rewrites the snapshot and is recorded in the audit
//! log. If the snapshot cannot be written the in-memory change is rolled
//! back, so the ledger always matches what is on disk.

use crate::audit::AuditEntry;
use crate::error::{LedgerError, LedgerResult};
use crate::models::transaction::{normalize_description, today};
use crate::models::{Ledger, Transaction, TransactionKind};
use crate::storage::Storage;

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    /// Defaults to today when not given
    pub date: Option<String>,
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
}

/// Input for editing a transaction
///
/// Description and amount are always overwritten; `kind: None` keeps the
/// current kind.
#[derive(Debug, Clone)]
pub struct UpdateTransactionInput {
    pub description: String,
    pub amount: f64,
    pub kind: Option<TransactionKind>,
}

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
    ledger: &'a mut Ledger,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage, ledger: &'a mut Ledger) -> Self {
        Self { storage, ledger }
    }

    /// Fail early with `CapacityExceeded` before collecting input for an add
    pub fn ensure_can_add(&self) -> LedgerResult<()> {
        self.ledger.ensure_capacity()
    }

    /// Create a new transaction
    pub fn create(&mut self, input: CreateTransactionInput) -> LedgerResult<Transaction> {
        let date = input.date.unwrap_or_else(today);
        let txn = self
            .ledger
            .add(date, &input.description, input.amount, input.kind)?
            .clone();

        if let Err(e) = self.storage.save_ledger(self.ledger) {
            self.ledger.undo_add();
            return Err(e);
        }

        self.audit(&AuditEntry::create(&txn));

        Ok(txn)
    }

    /// Update a transaction in place
    pub fn update(&mut self, id: u32, input: UpdateTransactionInput) -> LedgerResult<Transaction> {
        let before = self
            .ledger
            .get(id)
            .cloned()
            .ok_or_else(|| LedgerError::not_found(id))?;

        let mut txn = before.clone();
        txn.description = normalize_description(&input.description);
        txn.amount = input.amount;
        if let Some(kind) = input.kind {
            txn.kind = kind;
        }

        self.ledger.replace(txn.clone())?;

        if let Err(e) = self.storage.save_ledger(self.ledger) {
            self.ledger.replace(before)?;
            return Err(e);
        }

        self.audit(&AuditEntry::update(&before, &txn));

        Ok(txn)
    }

    /// Delete a transaction
    pub fn delete(&mut self, id: u32) -> LedgerResult<Transaction> {
        let (index, txn) = self.ledger.remove(id)?;

        if let Err(e) = self.storage.save_ledger(self.ledger) {
            self.ledger.restore(index, txn);
            return Err(e);
        }

        self.audit(&AuditEntry::delete(&txn));

        Ok(txn)
    }

    /// The snapshot is already written at this point, so a failing audit
    /// log must not turn the operation into an error.
    fn audit(&self, entry: &AuditEntry) {
        if let Err(e) = self.storage.log(entry) {
            eprintln!("Warning: audit log not updated: {}", e);
        }
    }
}
