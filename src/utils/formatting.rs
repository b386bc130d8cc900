//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

/// Pad to a display width (not byte length), so accented names line up.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// Human readable day delta:
/// 0 → "today", 1 → "in 1 day", -3 → "3 days overdue", None → "invalid date".
pub fn describe_days(days: Option<i64>) -> String {
    match days {
        None => "invalid date".to_string(),
        Some(0) => "today".to_string(),
        Some(1) => "in 1 day".to_string(),
        Some(-1) => "1 day overdue".to_string(),
        Some(d) if d > 0 => format!("in {} days", d),
        Some(d) => format!("{} days overdue", d.abs()),
    }
}

/// Keep only the date part of an ISO string for display.
pub fn short_date(iso: &str) -> String {
    let t = iso.trim();
    match t.get(..10) {
        Some(head) if crate::utils::date::parse_date(head).is_some() => head.to_string(),
        _ => t.to_string(),
    }
}
