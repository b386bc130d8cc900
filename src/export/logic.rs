// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::to_rows;
use crate::models::reminder::ReminderItem;
use crate::ui::messages::warning;
use crate::utils::path::{expand_tilde, is_absolute};

/// High level export of an already aggregated reminder list.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `items` to `file` (absolute path required).
    ///
    /// Returns the number of rows written; an empty list writes nothing.
    pub fn export(
        items: &[ReminderItem],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        if !is_absolute(file) {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let path = expand_tilde(file);

        if items.is_empty() {
            warning("No reminders to export for the selected scope.");
            return Ok(0);
        }

        ensure_writable(&path, force)?;

        let rows = to_rows(items);
        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        Ok(rows.len())
    }
}
