//! Transaction display formatting
//!
//! Fixed-width table used by the view, search, delete and edit flows:
//! ID, Date, Description, Amount, Type.

use crate::config::Settings;
use crate::models::{Ledger, Transaction};

const ID_WIDTH: usize = 5;
const DATE_WIDTH: usize = 12;
const AMOUNT_WIDTH: usize = 10;
const TYPE_WIDTH: usize = 8;

/// Message shown instead of a table when the ledger is empty
pub const EMPTY_LEDGER_MESSAGE: &str = "No transactions recorded yet.";

/// Column header plus the rule beneath it
pub fn format_table_header(settings: &Settings) -> String {
    let header = format!(
        "{:<id$} {:<date$} {:<desc$} {:<amount$} {:<kind$}",
        "ID",
        "Date",
        "Description",
        "Amount",
        "Type",
        id = ID_WIDTH,
        date = DATE_WIDTH,
        desc = settings.description_width,
        amount = AMOUNT_WIDTH,
        kind = TYPE_WIDTH,
    );

    let rule_len = ID_WIDTH + DATE_WIDTH + settings.description_width + AMOUNT_WIDTH + TYPE_WIDTH;
    format!("{}\n{}\n", header.trim_end(), "-".repeat(rule_len))
}

/// Format a single transaction as a table row
pub fn format_transaction_row(txn: &Transaction, settings: &Settings) -> String {
    let amount = format!(
        "{}{:<width$.2}",
        settings.currency_symbol,
        txn.amount,
        width = AMOUNT_WIDTH - 1
    );

    let row = format!(
        "{:<id$} {:<date$} {} {} {:<kind$}",
        txn.id,
        txn.date,
        fit(&txn.description, settings.description_width),
        amount,
        txn.kind.label(),
        id = ID_WIDTH,
        date = DATE_WIDTH,
        kind = TYPE_WIDTH,
    );

    row.trim_end().to_string()
}

/// Format transactions as a table with header
pub fn format_transaction_table<'a, I>(transactions: I, settings: &Settings) -> String
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut output = String::from("\n");
    output.push_str(&format_table_header(settings));

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, settings));
        output.push('\n');
    }

    output
}

/// Format the whole ledger, or the empty-ledger message
pub fn format_ledger(ledger: &Ledger, settings: &Settings) -> String {
    if ledger.is_empty() {
        return format!("{}\n", EMPTY_LEDGER_MESSAGE);
    }

    format_transaction_table(ledger, settings)
}

/// Pad or truncate to exactly `width` characters
fn fit(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        format!("{:<width$}", s, width = width)
    } else {
        let head: String = s.chars().take(width - 3).collect();
        format!("{}...", head)
    }
}
