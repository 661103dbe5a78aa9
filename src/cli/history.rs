//! Audit history command

use crate::error::BookResult;
use crate::storage::Storage;

/// Format the most recent `limit` audit entries, newest last
pub fn handle_history_command(storage: &Storage, limit: usize) -> BookResult<String> {
    let entries = storage.audit().read_recent(limit)?;
    if entries.is_empty() {
        return Ok("No history recorded yet.".to_string());
    }

    let lines: Vec<String> = entries.iter().map(|e| e.format_human_readable()).collect();
    Ok(lines.join("\n"))
}
