//! Transaction search
//!
//! Every search is a linear scan over the ledger returning all matches in
//! ledger order.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Ledger, Transaction, TransactionKind};

/// Which field a search looks at, as offered in the search menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Description,
    Date,
    AmountRange,
    Kind,
}

impl SearchMode {
    /// All modes in menu order
    pub const ALL: [SearchMode; 4] = [
        SearchMode::Description,
        SearchMode::Date,
        SearchMode::AmountRange,
        SearchMode::Kind,
    ];

    /// Parse a search menu selection (1-4)
    pub fn from_choice(input: &str) -> LedgerResult<Self> {
        match input.trim() {
            "1" => Ok(Self::Description),
            "2" => Ok(Self::Date),
            "3" => Ok(Self::AmountRange),
            "4" => Ok(Self::Kind),
            other => Err(LedgerError::InvalidChoice(other.to_string())),
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Description => "Description",
            Self::Date => "Date",
            Self::AmountRange => "Amount Range",
            Self::Kind => "Type (Income/Expense)",
        }
    }
}

/// A complete search request
#[derive(Debug, Clone, PartialEq)]
pub enum SearchCriteria {
    /// Case-sensitive substring of the description
    Description(String),
    /// Exact date string
    Date(String),
    /// Inclusive amount range; an inverted range matches nothing
    AmountRange { min: f64, max: f64 },
    /// Income or expense
    Kind(TransactionKind),
}

impl SearchCriteria {
    /// Check if a transaction satisfies the criteria
    pub fn matches(&self, txn: &Transaction) -> bool {
        match self {
            Self::Description(query) => txn.description.contains(query.as_str()),
            Self::Date(date) => txn.date == *date,
            Self::AmountRange { min, max } => txn.amount >= *min && txn.amount <= *max,
            Self::Kind(kind) => txn.kind == *kind,
        }
    }
}

/// All transactions matching `criteria`, in ledger order
pub fn search<'a>(ledger: &'a Ledger, criteria: &SearchCriteria) -> Vec<&'a Transaction> {
    ledger.iter().filter(|txn| criteria.matches(txn)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new(100);
        let rows = [
            ("2024-06-01", "Widget sale", 150.0, TransactionKind::Income),
            ("2024-06-01", "Ad spend", 40.0, TransactionKind::Expense),
            ("2024-06-02", "widget refund", 15.0, TransactionKind::Expense),
            ("2024-06-03", "Bulk Widget sale", 400.0, TransactionKind::Income),
        ];
        for (date, description, amount, kind) in rows {
            ledger.add(date, description, amount, kind).unwrap();
        }
        ledger
    }

    fn ids(matches: &[&Transaction]) -> Vec<u32> {
        matches.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_description_is_case_sensitive_substring() {
        let ledger = sample_ledger();
        let matches = search(&ledger, &SearchCriteria::Description("Widget".into()));
        assert_eq!(ids(&matches), vec![1, 4]);

        let matches = search(&ledger, &SearchCriteria::Description("widget".into()));
        assert_eq!(ids(&matches), vec![3]);
    }

    #[test]
    fn test_empty_description_matches_everything() {
        let ledger = sample_ledger();
        let matches = search(&ledger, &SearchCriteria::Description(String::new()));
        assert_eq!(matches.len(), 4);
    }

    #[test]
    fn test_date_is_exact() {
        let ledger = sample_ledger();
        let matches = search(&ledger, &SearchCriteria::Date("2024-06-01".into()));
        assert_eq!(ids(&matches), vec![1, 2]);

        let matches = search(&ledger, &SearchCriteria::Date("2024-06".into()));
        assert!(matches.is_empty());
    }

    #[test]
    fn test_amount_range_is_inclusive() {
        let ledger = sample_ledger();
        let matches = search(
            &ledger,
            &SearchCriteria::AmountRange {
                min: 15.0,
                max: 150.0,
            },
        );
        assert_eq!(ids(&matches), vec![1, 2, 3]);
    }

    #[test]
    fn test_inverted_amount_range_matches_nothing() {
        let ledger = sample_ledger();
        let matches = search(
            &ledger,
            &SearchCriteria::AmountRange {
                min: 500.0,
                max: 10.0,
            },
        );
        assert!(matches.is_empty());
    }

    #[test]
    fn test_kind() {
        let ledger = sample_ledger();
        let matches = search(&ledger, &SearchCriteria::Kind(TransactionKind::Expense));
        assert_eq!(ids(&matches), vec![2, 3]);
    }

    #[test]
    fn test_mode_from_choice() {
        assert_eq!(SearchMode::from_choice("1").unwrap(), SearchMode::Description);
        assert_eq!(SearchMode::from_choice(" 4\n").unwrap(), SearchMode::Kind);
        assert!(matches!(
            SearchMode::from_choice("5"),
            Err(LedgerError::InvalidChoice(_))
        ));
    }
}
