use super::reminder::ReminderThresholds;
use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

/// Employee-held certificate, licence or training record.
///
/// Reminder flags default to enabled: a ticket is tracked unless muted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    #[serde(default)]
    pub id: i64,
    pub employee_id: i64,
    #[serde(rename = "type")]
    pub ticket_type: String,
    pub title: String,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default = "default_enabled", rename = "has7DayReminder")]
    pub has_7_day_reminder: bool,
    #[serde(default = "default_enabled", rename = "has30DayReminder")]
    pub has_30_day_reminder: bool,
}

impl Ticket {
    pub fn new(employee_id: i64, ticket_type: &str, title: &str, expiry_date: Option<String>) -> Self {
        Self {
            id: 0,
            employee_id,
            ticket_type: ticket_type.to_string(),
            title: title.to_string(),
            expiry_date,
            has_7_day_reminder: true,
            has_30_day_reminder: true,
        }
    }

    pub fn thresholds(&self) -> ReminderThresholds {
        ReminderThresholds::new(self.has_7_day_reminder, self.has_30_day_reminder)
    }
}
