//! Reports over the ledger

pub mod summary;

pub use summary::{format_money, FinancialSummary};
