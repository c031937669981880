//! Audit entry data structures
//!
//! Defines the operation types and the shape of a single audit log line.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Transaction;

use super::diff::diff_transactions;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Transaction was added
    Create,
    /// Transaction was edited
    Update,
    /// Transaction was deleted
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
///
/// Records one mutation of the ledger with the affected transaction before
/// and/or after the change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Id of the affected transaction
    pub transaction_id: u32,

    /// Description of the transaction at the time of the operation
    pub description: String,

    /// The transaction before the operation (updates/deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Transaction>,

    /// The transaction after the operation (creates/updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Transaction>,

    /// Human-readable diff summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    /// Create a new audit entry for an added transaction
    pub fn create(txn: &Transaction) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            transaction_id: txn.id,
            description: txn.description.clone(),
            before: None,
            after: Some(txn.clone()),
            diff_summary: None,
        }
    }

    /// Create a new audit entry for an edited transaction, with a summary
    /// of the changed fields
    pub fn update(before: &Transaction, after: &Transaction) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            transaction_id: after.id,
            description: after.description.clone(),
            before: Some(before.clone()),
            after: Some(after.clone()),
            diff_summary: diff_transactions(before, after),
        }
    }

    /// Create a new audit entry for a deleted transaction
    pub fn delete(txn: &Transaction) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            transaction_id: txn.id,
            description: txn.description.clone(),
            before: Some(txn.clone()),
            after: None,
            diff_summary: None,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} Transaction {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.transaction_id
        );

        if !self.description.is_empty() {
            output.push_str(&format!(" ({})", self.description));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;

    fn widget_sale() -> Transaction {
        Transaction::new(1, "2024-06-01", "Widget sale", 150.0, TransactionKind::Income)
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Update.to_string(), "UPDATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(&widget_sale());

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.transaction_id, 1);
        assert!(entry.before.is_none());
        assert_eq!(entry.after.as_ref().unwrap().kind, TransactionKind::Income);
    }

    #[test]
    fn test_update_entry() {
        let before = widget_sale();
        let mut after = before.clone();
        after.amount = 175.0;

        let entry = AuditEntry::update(&before, &after);

        assert_eq!(entry.operation, Operation::Update);
        assert_eq!(entry.before.as_ref().unwrap().amount, 150.0);
        assert_eq!(entry.after.as_ref().unwrap().amount, 175.0);
        assert_eq!(entry.diff_summary.as_deref(), Some("amount: 150.00 -> 175.00"));
    }

    #[test]
    fn test_delete_entry() {
        let entry = AuditEntry::delete(&widget_sale());

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::create(&widget_sale());

        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.operation, Operation::Create);
        assert_eq!(deserialized.transaction_id, 1);
        assert!(!json.contains("diff_summary"));
    }

    #[test]
    fn test_human_readable_format() {
        let formatted = AuditEntry::create(&widget_sale()).format_human_readable();
        assert!(formatted.contains("CREATE"));
        assert!(formatted.contains("Transaction 1"));
        assert!(formatted.contains("Widget sale"));
    }
}
