use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use ansi_term::Colour;
use regex::Regex;

const MAX_OP_WIDTH: usize = 48;

fn strip_ansi(re: &Regex, s: &str) -> String {
    re.replace_all(s, "").into_owned()
}

/// ANSI colour for an audit operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "import" => Colour::Cyan,
        "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Row selection for `log --print`.
#[derive(Debug, Default, Clone)]
pub struct LogFilter {
    pub operation: Option<String>,
    pub last: Option<usize>,
}

pub struct LogLogic;

impl LogLogic {
    /// Rows oldest first, narrowed by `filter`.
    pub fn load(pool: &DbPool, filter: &LogFilter) -> AppResult<Vec<LogEntry>> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log
             WHERE ?1 IS NULL OR operation = ?1
             ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([filter.operation.as_deref()], |row| {
            let raw_date: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok(LogEntry {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                message: row.get(4)?,
            })
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }

        if let Some(n) = filter.last {
            let skip = entries.len().saturating_sub(n);
            entries.drain(..skip);
        }
        Ok(entries)
    }

    pub fn print_log(pool: &DbPool, filter: &LogFilter) -> AppResult<()> {
        let entries = Self::load(pool, filter)?;

        if entries.is_empty() {
            println!("📜 No audit rows match.");
            return Ok(());
        }

        let ansi = Regex::new(r"\x1B\[[0-9;]*[mK]")
            .map_err(|e| AppError::Other(e.to_string()))?;

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for e in &entries {
            let color = color_for_operation(&e.operation);

            let mut colored = color.paint(e.operation.as_str()).to_string();
            if !e.target.is_empty() {
                colored.push_str(&format!(" ({})", e.target));
            }

            let visible_len = strip_ansi(&ansi, &colored).chars().count();
            let padding = " ".repeat(MAX_OP_WIDTH.saturating_sub(visible_len));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                e.date,
                colored,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
