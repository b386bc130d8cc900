use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::Utc;
use rusqlite::{Connection, params};

/// Append one audit row (`operation`, `target`, `message`) to the `log` table.
pub fn cmlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message) VALUES (?1, ?2, ?3, ?4)",
        params![Utc::now().to_rfc3339(), operation, target, message],
    )?;
    Ok(())
}

/// Audit write for paths where the main action already succeeded.
pub fn cmlog_quiet(conn: &Connection, operation: &str, target: &str, message: &str) {
    if let Err(e) = cmlog(conn, operation, target, message) {
        warning(format!("Audit log not written ({operation} {target}): {e}"));
    }
}
