//! CLI command for viewing the audit log

use crate::error::LedgerResult;
use crate::storage::Storage;

/// Render the most recent `limit` audit entries, oldest first
pub fn format_audit_log(storage: &Storage, limit: usize) -> LedgerResult<String> {
    let Some(logger) = storage.audit() else {
        return Ok("Audit logging is disabled.\n".to_string());
    };

    let entries = logger.read_recent(limit)?;
    if entries.is_empty() {
        return Ok("No audit entries recorded yet.\n".to_string());
    }

    let mut output = String::new();
    for entry in &entries {
        output.push_str(&entry.format_human_readable());
        output.push('\n');
    }
    Ok(output)
}

/// Handle the audit command
pub fn handle_audit_command(storage: &Storage, limit: usize) -> LedgerResult<()> {
    print!("{}", format_audit_log(storage, limit)?);
    Ok(())
}
