// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Ok when `path` is free, `force` is set, or the user agrees to overwrite.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    warning(format!("{} already exists.", path.display()));
    if confirm("Overwrite it? [y/N]: ")? {
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "{} left untouched (use --force to overwrite)",
            path.display()
        )))
    }
}

fn confirm(prompt: &str) -> AppResult<bool> {
    let mut out = io::stdout();
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
