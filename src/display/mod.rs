//! Display formatting for terminal output

pub mod transaction;

pub use transaction::{
    format_ledger, format_table_header, format_transaction_row, format_transaction_table,
    EMPTY_LEDGER_MESSAGE,
};
