//! Transaction model
//!
//! Represents a single income or expense record together with the input
//! normalization rules applied before a record enters the ledger.

use chrono::Local;
use serde::{Deserialize, Serialize};

use super::kind::TransactionKind;

/// Longest description kept, in bytes
pub const MAX_DESCRIPTION_LEN: usize = 99;

/// Longest date string kept, in bytes
pub const MAX_DATE_LEN: usize = 19;

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique, positive identifier
    pub id: u32,

    /// Date the record was created (YYYY-MM-DD)
    pub date: String,

    /// Free-text description
    pub description: String,

    /// Amount in currency units; sign is not checked
    pub amount: f64,

    /// Income or expense
    pub kind: TransactionKind,
}

impl Transaction {
    /// Create a new transaction, normalizing the text fields
    pub fn new(
        id: u32,
        date: impl Into<String>,
        description: &str,
        amount: f64,
        kind: TransactionKind,
    ) -> Self {
        Self {
            id,
            date: truncate_to_bytes(&date.into(), MAX_DATE_LEN).to_string(),
            description: normalize_description(description),
            amount,
            kind,
        }
    }

    /// Check if this is income
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }
}

/// Today's date in the local timezone, as stored on new transactions
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Cut a description at its first newline and bound its length
pub fn normalize_description(input: &str) -> String {
    let line = input.split(['\n', '\r']).next().unwrap_or_default();
    truncate_to_bytes(line, MAX_DESCRIPTION_LEN).to_string()
}

/// Parse an amount the way the prompts accept it
///
/// Anything that is not a finite decimal number becomes `0.0`.
pub fn parse_amount(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .unwrap_or(0.0)
}

/// Longest prefix of `s` that fits in `max` bytes without splitting a character
pub(crate) fn truncate_to_bytes(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }

    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(
            1,
            "2024-06-01",
            "Widget sale",
            150.0,
            TransactionKind::Income,
        );

        assert_eq!(txn.id, 1);
        assert_eq!(txn.date, "2024-06-01");
        assert_eq!(txn.description, "Widget sale");
        assert!(txn.is_income());
    }

    #[test]
    fn test_description_cut_at_newline() {
        assert_eq!(normalize_description("Ad spend\nignored"), "Ad spend");
        assert_eq!(normalize_description("Refund\r\n"), "Refund");
        assert_eq!(normalize_description(""), "");
    }

    #[test]
    fn test_description_bounded() {
        let long = "x".repeat(250);
        assert_eq!(normalize_description(&long).len(), MAX_DESCRIPTION_LEN);
    }

    #[test]
    fn test_description_truncation_respects_char_boundaries() {
        // 98 ASCII bytes followed by a two-byte character
        let input = format!("{}é", "a".repeat(98));
        let normalized = normalize_description(&input);
        assert_eq!(normalized.len(), 98);
        assert!(normalized.chars().all(|c| c == 'a'));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("150.00"), 150.0);
        assert_eq!(parse_amount("  -40.5\n"), -40.5);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
    }

    #[test]
    fn test_today_format() {
        let date = today();
        assert_eq!(date.len(), 10);
        assert!(chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_ok());
    }
}
