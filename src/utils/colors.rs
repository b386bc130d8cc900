/// ANSI color helper utilities for terminal output.
use crate::models::reminder::ReminderStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// expired → red, expiring-soon → yellow, valid → green
pub fn color_for_status(status: ReminderStatus) -> &'static str {
    match status {
        ReminderStatus::Expired => RED,
        ReminderStatus::ExpiringSoon => YELLOW,
        ReminderStatus::Valid => GREEN,
    }
}

/// Day delta color: overdue red, missing grey, otherwise reset.
pub fn color_for_days(days: Option<i64>) -> &'static str {
    match days {
        None => GREY,
        Some(d) if d < 0 => RED,
        _ => RESET,
    }
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
