//! Whole-file reads and atomic replacement
//!
//! Every write goes to a sibling `.tmp` file that is synced and then renamed
//! over the target, so readers only ever see the old or the new contents.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{LedgerError, LedgerResult};

/// Read a whole file; `None` if it doesn't exist
pub fn read_bytes<P: AsRef<Path>>(path: P) -> LedgerResult<Option<Vec<u8>>> {
    let path = path.as_ref();
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(io_error("read", path, e)),
    }
}

/// Parse a JSON file; the type's default if it doesn't exist
pub fn read_json<T, P>(path: P) -> LedgerResult<T>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    match read_bytes(path)? {
        Some(bytes) => serde_json::from_slice(&bytes)
            .map_err(|e| LedgerError::Json(format!("{}: {}", path.display(), e))),
        None => Ok(T::default()),
    }
}

/// Atomically replace `path` with `bytes`
pub fn write_bytes_atomic<P: AsRef<Path>>(path: P, bytes: &[u8]) -> LedgerResult<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error("create", parent, e))?;
    }

    let temp_path = temp_path_for(path);
    let written = File::create(&temp_path).and_then(|mut file| {
        file.write_all(bytes)?;
        file.sync_all()
    });
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(io_error("write", &temp_path, e));
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        io_error("replace", path, e)
    })
}

/// Atomically replace `path` with pretty-printed JSON
pub fn write_json_atomic<T, P>(path: P, data: &T) -> LedgerResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let json = serde_json::to_vec_pretty(data)?;
    write_bytes_atomic(path, &json)
}

/// Sibling temp file used while replacing `path`
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn io_error(action: &str, path: &Path, e: io::Error) -> LedgerError {
    LedgerError::Io(format!("Failed to {} {}: {}", action, path.display(), e))
}
