//! Expiry classification of a single dated field.
//!
//! Pure: the reference instant is always passed in, never read from the clock.

use crate::models::reminder::ReminderStatus;
use crate::utils::date::parse_iso_instant;
use chrono::{DateTime, Utc};

/// Upper bound (inclusive) of the expiring-soon window, in days.
pub const EXPIRING_SOON_DAYS: i64 = 30;

const MILLIS_PER_DAY: i64 = 86_400_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub status: ReminderStatus,
    /// `None` when the date string could not be parsed.
    pub days_until_expiry: Option<i64>,
}

impl Classification {
    pub fn is_invalid_date(&self) -> bool {
        self.days_until_expiry.is_none()
    }
}

/// Classify `expiry_date` against `now`.
///
/// Unparsable dates come back as expired with no day delta so they are never
/// mistaken for a valid record.
pub fn classify(expiry_date: &str, now: DateTime<Utc>) -> Classification {
    match parse_iso_instant(expiry_date) {
        Some(expiry) => {
            let days = days_until(expiry, now);
            Classification {
                status: status_for_days(days),
                days_until_expiry: Some(days),
            }
        }
        None => Classification {
            status: ReminderStatus::Expired,
            days_until_expiry: None,
        },
    }
}

/// Whole days from `now` to `expiry`, floored on the millisecond difference.
///
/// 23h before expiry is 0, 1ms after expiry is -1.
pub fn days_until(expiry: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (expiry - now).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

pub fn status_for_days(days: i64) -> ReminderStatus {
    if days < 0 {
        ReminderStatus::Expired
    } else if days <= EXPIRING_SOON_DAYS {
        ReminderStatus::ExpiringSoon
    } else {
        ReminderStatus::Valid
    }
}
