//! Date helpers: parsing the ISO-8601 strings stored on records and the
//! `--now` override.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Naive date-time layouts accepted besides RFC 3339. Read as UTC.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Parse an ISO-8601 date or date-time into a UTC instant.
///
/// A bare `YYYY-MM-DD` is midnight UTC. Returns `None` for anything else.
pub fn parse_iso_instant(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(ndt.and_utc());
        }
    }

    parse_date(s)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| ndt.and_utc())
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Normalise an optional CLI date: empty → None, otherwise trimmed text.
///
/// Text is kept as typed so a malformed value is flagged by the classifier
/// instead of disappearing.
pub fn normalize_optional(input: Option<&String>) -> Option<String> {
    input
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
