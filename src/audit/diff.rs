//! Change summary for edited transactions

use crate::models::Transaction;

/// Describe the editable fields that differ between two versions
///
/// Returns `None` if the edit changed nothing.
pub fn diff_transactions(before: &Transaction, after: &Transaction) -> Option<String> {
    let mut changes = Vec::new();

    if before.description != after.description {
        changes.push(format!(
            "description: {:?} -> {:?}",
            before.description, after.description
        ));
    }
    if before.amount != after.amount {
        changes.push(format!("amount: {:.2} -> {:.2}", before.amount, after.amount));
    }
    if before.kind != after.kind {
        changes.push(format!("kind: {} -> {}", before.kind, after.kind));
    }

    (!changes.is_empty()).then(|| changes.join(", "))
}
