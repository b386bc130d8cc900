//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::pad_right;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            columns: headers
                .iter()
                .map(|h| Column {
                    header: h.to_string(),
                    width: UnicodeWidthStr::width(*h),
                })
                .collect(),
            rows: Vec::new(),
        }
    }

    /// Add a row of plain cells; widths grow to fit.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(row.iter()) {
            col.width = col.width.max(UnicodeWidthStr::width(cell.as_str()));
        }
        self.rows.push(row);
    }

    /// Render with `separator` repeated under the header.
    /// `decorate` may wrap a padded cell in ANSI codes (row index, column index, cell).
    pub fn render_with<F>(&self, separator: &str, decorate: F) -> String
    where
        F: Fn(usize, usize, String) -> String,
    {
        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .columns
            .iter()
            .map(|c| pad_right(&c.header, c.width))
            .collect();
        out.push_str(header.join("  ").trim_end());
        out.push('\n');

        let total: usize =
            self.columns.iter().map(|c| c.width).sum::<usize>() + 2 * self.columns.len().saturating_sub(1);
        let sep = if separator.is_empty() { "-" } else { separator };
        out.push_str(&sep.repeat(total));
        out.push('\n');

        // Rows
        for (r, row) in self.rows.iter().enumerate() {
            let cells: Vec<String> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, col)| {
                    let raw = row.get(i).map(String::as_str).unwrap_or("");
                    decorate(r, i, pad_right(raw, col.width))
                })
                .collect();
            out.push_str(cells.join("  ").trim_end());
            out.push('\n');
        }

        out
    }

    pub fn render(&self, separator: &str) -> String {
        self.render_with(separator, |_, _, cell| cell)
    }
}
