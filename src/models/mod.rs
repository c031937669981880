//! Core data models for the ledger
//!
//! This module contains the data structures of the bookkeeping domain:
//! the transaction record, its kind, and the in-memory ledger.

pub mod kind;
pub mod ledger;
pub mod transaction;

pub use kind::TransactionKind;
pub use ledger::Ledger;
pub use transaction::Transaction;
