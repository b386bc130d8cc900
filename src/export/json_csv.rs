// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::{ReminderExport, notify_export_success};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Rows as a pretty-printed JSON array.
pub(crate) fn export_json(rows: &[ReminderExport], path: &Path) -> AppResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, rows)?;
    out.write_all(b"\n")?;
    out.flush()?;

    notify_export_success("JSON", rows.len(), path);
    Ok(())
}

/// Rows as CSV; the header comes from the `ReminderExport` field names.
pub(crate) fn export_csv(rows: &[ReminderExport], path: &Path) -> AppResult<()> {
    let csv_err = |e: csv::Error| AppError::Export(format!("CSV: {e}"));

    let mut wtr = csv::Writer::from_writer(BufWriter::new(File::create(path)?));
    for row in rows {
        wtr.serialize(row).map_err(csv_err)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", rows.len(), path);
    Ok(())
}
