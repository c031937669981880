//! Transaction kind
//!
//! Every transaction is either income or an expense. On disk and at the
//! prompt the kind is a single character (`I` / `E`); everywhere else it is
//! this enum.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::LedgerError;

/// Income/Expense classification of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in (sales, refunds received)
    Income,
    /// Money going out (ad spend, stock, fees)
    Expense,
}

impl TransactionKind {
    /// Single-character code used on disk and at the prompt
    pub const fn code(&self) -> char {
        match self {
            Self::Income => 'I',
            Self::Expense => 'E',
        }
    }

    /// Look up a kind by its code, ignoring case
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'I' => Some(Self::Income),
            'E' => Some(Self::Expense),
            _ => None,
        }
    }

    /// Parse user input
    ///
    /// Only the first non-blank character counts, so `i`, `E` and `income`
    /// are all accepted.
    pub fn parse(input: &str) -> Result<Self, LedgerError> {
        input
            .trim()
            .chars()
            .next()
            .and_then(Self::from_code)
            .ok_or_else(|| LedgerError::InvalidKind(input.trim().to_string()))
    }

    /// Human-readable label shown in tables
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(TransactionKind::parse("i").unwrap(), TransactionKind::Income);
        assert_eq!(TransactionKind::parse("E").unwrap(), TransactionKind::Expense);
        assert_eq!(
            TransactionKind::parse("  expense\n").unwrap(),
            TransactionKind::Expense
        );
    }

    #[test]
    fn test_parse_rejects_other_input() {
        assert!(matches!(
            TransactionKind::parse("x"),
            Err(LedgerError::InvalidKind(_))
        ));
        assert!(matches!(
            TransactionKind::parse(""),
            Err(LedgerError::InvalidKind(_))
        ));
    }

    #[test]
    fn test_codes() {
        assert_eq!(TransactionKind::Income.code(), 'I');
        assert_eq!(TransactionKind::Expense.code(), 'E');
        assert_eq!(TransactionKind::from_code('e'), Some(TransactionKind::Expense));
        assert_eq!(TransactionKind::from_code('X'), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(TransactionKind::Income.to_string(), "Income");
        assert_eq!(TransactionKind::Expense.to_string(), "Expense");
    }
}
