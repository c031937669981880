//! Binary snapshot of the ledger
//!
//! The snapshot is a headerless run of fixed-size records, rewritten in full
//! after every mutation. Layout per record (little-endian, no padding):
//!
//! | Offset | Size | Field                           |
//! |--------|------|---------------------------------|
//! | 0      | 4    | id (`u32`)                      |
//! | 4      | 20   | date, UTF-8, NUL padded         |
//! | 24     | 100  | description, UTF-8, NUL padded  |
//! | 124    | 8    | amount (`f64`)                  |
//! | 132    | 1    | kind code (`I` / `E`)           |
//!
//! The record count is the file length divided by [`RECORD_SIZE`]; a file
//! whose length is not a whole multiple is rejected.

use std::path::PathBuf;

use crate::error::{LedgerError, LedgerResult};
use crate::models::transaction::{truncate_to_bytes, MAX_DATE_LEN, MAX_DESCRIPTION_LEN};
use crate::models::{Ledger, Transaction, TransactionKind};

use super::file_io::{read_bytes, write_bytes_atomic};

const ID_SIZE: usize = 4;
const DATE_SIZE: usize = MAX_DATE_LEN + 1;
const DESCRIPTION_SIZE: usize = MAX_DESCRIPTION_LEN + 1;
const AMOUNT_SIZE: usize = 8;
const KIND_SIZE: usize = 1;

const DATE_OFFSET: usize = ID_SIZE;
const DESCRIPTION_OFFSET: usize = DATE_OFFSET + DATE_SIZE;
const AMOUNT_OFFSET: usize = DESCRIPTION_OFFSET + DESCRIPTION_SIZE;
const KIND_OFFSET: usize = AMOUNT_OFFSET + AMOUNT_SIZE;

/// Size of one stored transaction in bytes
pub const RECORD_SIZE: usize = KIND_OFFSET + KIND_SIZE;

/// Encode a single transaction into its fixed-size record
pub fn encode_record(txn: &Transaction) -> [u8; RECORD_SIZE] {
    let mut record = [0u8; RECORD_SIZE];

    record[..ID_SIZE].copy_from_slice(&txn.id.to_le_bytes());
    write_padded(
        &mut record[DATE_OFFSET..DESCRIPTION_OFFSET],
        truncate_to_bytes(&txn.date, MAX_DATE_LEN),
    );
    write_padded(
        &mut record[DESCRIPTION_OFFSET..AMOUNT_OFFSET],
        truncate_to_bytes(&txn.description, MAX_DESCRIPTION_LEN),
    );
    record[AMOUNT_OFFSET..KIND_OFFSET].copy_from_slice(&txn.amount.to_le_bytes());
    record[KIND_OFFSET] = txn.kind.code() as u8;

    record
}

/// Decode one record; `index` is only used in error messages
pub fn decode_record(record: &[u8], index: usize) -> LedgerResult<Transaction> {
    if record.len() != RECORD_SIZE {
        return Err(LedgerError::Load(format!(
            "record {} is {} bytes, expected {}",
            index,
            record.len(),
            RECORD_SIZE
        )));
    }

    let mut id_bytes = [0u8; ID_SIZE];
    id_bytes.copy_from_slice(&record[..ID_SIZE]);
    let id = u32::from_le_bytes(id_bytes);

    let date = read_padded(&record[DATE_OFFSET..DESCRIPTION_OFFSET], index, "date")?;
    let description = read_padded(
        &record[DESCRIPTION_OFFSET..AMOUNT_OFFSET],
        index,
        "description",
    )?;

    let mut amount_bytes = [0u8; AMOUNT_SIZE];
    amount_bytes.copy_from_slice(&record[AMOUNT_OFFSET..KIND_OFFSET]);
    let amount = f64::from_le_bytes(amount_bytes);

    let code = record[KIND_OFFSET];
    let kind = match code {
        b'I' => TransactionKind::Income,
        b'E' => TransactionKind::Expense,
        other => {
            return Err(LedgerError::Load(format!(
                "record {} has unknown kind byte 0x{:02x}",
                index, other
            )))
        }
    };

    Ok(Transaction {
        id,
        date,
        description,
        amount,
        kind,
    })
}

/// Encode a sequence of transactions in order
pub fn encode_all<'a, I>(transactions: I) -> Vec<u8>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .flat_map(encode_record)
        .collect()
}

/// Decode a whole snapshot
pub fn decode_all(bytes: &[u8]) -> LedgerResult<Vec<Transaction>> {
    if bytes.len() % RECORD_SIZE != 0 {
        return Err(LedgerError::Load(format!(
            "snapshot is {} bytes, not a whole number of {}-byte records",
            bytes.len(),
            RECORD_SIZE
        )));
    }

    bytes
        .chunks_exact(RECORD_SIZE)
        .enumerate()
        .map(|(index, record)| decode_record(record, index))
        .collect()
}

fn write_padded(field: &mut [u8], value: &str) {
    let bytes = value.as_bytes();
    field[..bytes.len()].copy_from_slice(bytes);
}

fn read_padded(field: &[u8], index: usize, name: &str) -> LedgerResult<String> {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    std::str::from_utf8(&field[..end])
        .map(str::to_string)
        .map_err(|_| {
            LedgerError::Load(format!("record {} has an invalid {} field", index, name))
        })
}

/// The on-disk snapshot file
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    /// Create a handle for the snapshot at `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the ledger
    ///
    /// A missing file is an empty ledger. A file that exists but can't be
    /// read as whole, valid records is a load error.
    pub fn load(&self, capacity: usize) -> LedgerResult<Ledger> {
        let bytes = match read_bytes(&self.path) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Ok(Ledger::new(capacity)),
            Err(e) => return Err(LedgerError::Load(e.to_string())),
        };

        let transactions = decode_all(&bytes)?;
        Ledger::from_transactions(transactions, capacity)
    }

    /// Atomically replace the snapshot with the full ledger
    pub fn save(&self, ledger: &Ledger) -> LedgerResult<()> {
        write_bytes_atomic(&self.path, &encode_all(ledger))
            .map_err(|e| LedgerError::Persistence(e.to_string()))
    }
}
