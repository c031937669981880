//! Audit logging for the ledger
//!
//! Records every add, edit and delete with before/after values in an
//! append-only audit log.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single entry with timestamp, operation, transaction id
//!   and optional before/after snapshots.
//! - `AuditLogger`: appends entries to the log file as JSON lines.
//! - `diff_transactions`: which fields of a transaction an edit changed.
//!
//! # Example
//!
//! ```rust,ignore
//! use ecommerce_ledger::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(&txn))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::diff_transactions;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
