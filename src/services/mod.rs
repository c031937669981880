//! Service layer for the ledger
//!
//! The service layer provides business logic on top of the storage layer:
//! mutations that persist and audit, and ledger queries.

pub mod search;
pub mod transaction;

pub use search::{search, SearchCriteria, SearchMode};
pub use transaction::{CreateTransactionInput, TransactionService, UpdateTransactionInput};
