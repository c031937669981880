//! In-memory ledger
//!
//! An ordered, capacity-bounded sequence of transactions. Order is insertion
//! order and is never changed by edits; removal keeps the relative order of
//! the remaining records.

use std::collections::HashSet;

use super::kind::TransactionKind;
use super::transaction::Transaction;
use crate::error::{LedgerError, LedgerResult};

/// The ordered collection of transactions
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    capacity: usize,
    /// Id handed to the next added transaction; only ever moves forward
    next_id: u32,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new(capacity: usize) -> Self {
        Self {
            transactions: Vec::new(),
            capacity,
            next_id: 1,
        }
    }

    /// Build a ledger from previously stored transactions
    ///
    /// Fails with a load error if the records break the ledger invariants
    /// (too many records, zero or duplicate ids).
    pub fn from_transactions(
        transactions: Vec<Transaction>,
        capacity: usize,
    ) -> LedgerResult<Self> {
        if transactions.len() > capacity {
            return Err(LedgerError::Load(format!(
                "{} transactions stored but capacity is {}",
                transactions.len(),
                capacity
            )));
        }

        let mut seen = HashSet::with_capacity(transactions.len());
        for txn in &transactions {
            if txn.id == 0 {
                return Err(LedgerError::Load("transaction with id 0".into()));
            }
            if !seen.insert(txn.id) {
                return Err(LedgerError::Load(format!("duplicate transaction id {}", txn.id)));
            }
        }

        let next_id = transactions
            .iter()
            .map(|t| t.id)
            .max()
            .map_or(1, |max| max.saturating_add(1));

        Ok(Self {
            transactions,
            capacity,
            next_id,
        })
    }

    /// Number of transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Check if the ledger holds no transactions
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Check if no more transactions can be added
    pub fn is_full(&self) -> bool {
        self.transactions.len() >= self.capacity
    }

    /// All transactions in ledger order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Iterate over transactions in ledger order
    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    /// Fail with `CapacityExceeded` if the ledger is full
    pub fn ensure_capacity(&self) -> LedgerResult<()> {
        if self.is_full() {
            return Err(LedgerError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    /// Append a new transaction, assigning it the next id
    pub fn add(
        &mut self,
        date: impl Into<String>,
        description: &str,
        amount: f64,
        kind: TransactionKind,
    ) -> LedgerResult<&Transaction> {
        self.ensure_capacity()?;

        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or_else(|| {
            LedgerError::CapacityExceeded {
                capacity: self.capacity,
            }
        })?;

        self.transactions
            .push(Transaction::new(id, date, description, amount, kind));
        Ok(&self.transactions[self.transactions.len() - 1])
    }

    /// Get a transaction by id
    pub fn get(&self, id: u32) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Position of a transaction in ledger order
    pub fn position(&self, id: u32) -> Option<usize> {
        self.transactions.iter().position(|t| t.id == id)
    }

    /// Replace the transaction with the same id, keeping its position
    ///
    /// Returns the previous version.
    pub fn replace(&mut self, txn: Transaction) -> LedgerResult<Transaction> {
        let index = self
            .position(txn.id)
            .ok_or_else(|| LedgerError::not_found(txn.id))?;
        Ok(std::mem::replace(&mut self.transactions[index], txn))
    }

    /// Remove a transaction by id
    ///
    /// Returns the position it occupied and the removed record.
    pub fn remove(&mut self, id: u32) -> LedgerResult<(usize, Transaction)> {
        let index = self.position(id).ok_or_else(|| LedgerError::not_found(id))?;
        Ok((index, self.transactions.remove(index)))
    }

    /// Undo the most recent `add`, giving its id back
    pub(crate) fn undo_add(&mut self) -> Option<Transaction> {
        let txn = self.transactions.pop()?;
        self.next_id = txn.id;
        Some(txn)
    }

    /// Put a removed transaction back where it was
    pub(crate) fn restore(&mut self, index: usize, txn: Transaction) {
        let index = index.min(self.transactions.len());
        self.transactions.insert(index, txn);
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
