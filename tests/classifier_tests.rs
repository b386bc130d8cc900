mod common;
use checkmate::core::classifier::{EXPIRING_SOON_DAYS, classify, days_until, status_for_days};
use checkmate::models::reminder::ReminderStatus;
use chrono::{Duration, TimeZone, Utc};
use common::{fixed_now, in_days};

#[test]
fn test_boundaries_are_inclusive() {
    let now = fixed_now();
    let expected = [
        (-1, ReminderStatus::Expired),
        (0, ReminderStatus::ExpiringSoon),
        (1, ReminderStatus::ExpiringSoon),
        (29, ReminderStatus::ExpiringSoon),
        (30, ReminderStatus::ExpiringSoon),
        (31, ReminderStatus::Valid),
    ];

    for (days, status) in expected {
        let c = classify(&in_days(now, days), now);
        assert_eq!(c.days_until_expiry, Some(days), "delta for {days}");
        assert_eq!(c.status, status, "status for {days}");
    }
}

#[test]
fn test_partial_days_floor_on_milliseconds() {
    let now = fixed_now();

    // 23 hours ahead is still day 0
    let expiry = now + Duration::hours(23);
    assert_eq!(days_until(expiry, now), 0);

    // one millisecond past expiry is already overdue
    let expiry = now - Duration::milliseconds(1);
    assert_eq!(days_until(expiry, now), -1);

    // 47h59m ahead is day 1, not 2
    let expiry = now + Duration::hours(47) + Duration::minutes(59);
    assert_eq!(days_until(expiry, now), 1);

    // exactly equal instants
    assert_eq!(days_until(now, now), 0);
}

#[test]
fn test_date_only_is_midnight_utc() {
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap();

    // 2025-06-11T00:00Z is 9 days and 14.5 hours away
    let c = classify("2025-06-11", now);
    assert_eq!(c.days_until_expiry, Some(9));
    assert_eq!(c.status, ReminderStatus::ExpiringSoon);

    // earlier the same day → already overdue
    let c = classify("2025-06-01", now);
    assert_eq!(c.days_until_expiry, Some(-1));
    assert_eq!(c.status, ReminderStatus::Expired);
}

#[test]
fn test_accepts_common_iso_layouts() {
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();

    for raw in [
        "2025-06-11T00:00:00Z",
        "2025-06-11T00:00:00.000Z",
        "2025-06-11T02:00:00+02:00",
        "2025-06-11T00:00:00",
        "2025-06-11T00:00",
        "2025-06-11 00:00:00",
        "  2025-06-11  ",
    ] {
        let c = classify(raw, now);
        assert_eq!(c.days_until_expiry, Some(10), "layout {raw:?}");
        assert!(!c.is_invalid_date());
    }
}

#[test]
fn test_malformed_date_is_expired_and_flagged() {
    let now = fixed_now();

    for raw in ["not a date", "2025-13-45", "31/12/2025", ""] {
        let c = classify(raw, now);
        assert_eq!(c.status, ReminderStatus::Expired, "input {raw:?}");
        assert!(c.is_invalid_date(), "input {raw:?}");
        assert_eq!(c.days_until_expiry, None);
    }
}

#[test]
fn test_status_for_days_window() {
    assert_eq!(EXPIRING_SOON_DAYS, 30);
    assert_eq!(status_for_days(-365), ReminderStatus::Expired);
    assert_eq!(status_for_days(EXPIRING_SOON_DAYS), ReminderStatus::ExpiringSoon);
    assert_eq!(status_for_days(EXPIRING_SOON_DAYS + 1), ReminderStatus::Valid);
}

#[test]
fn test_classify_is_deterministic() {
    let now = fixed_now();
    let date = in_days(now, 12);
    assert_eq!(classify(&date, now), classify(&date, now));
}
