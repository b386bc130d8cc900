use super::reminder::ReminderThresholds;
use serde::{Deserialize, Serialize};

/// A dated certificate attached to an asset in the equipment registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub asset_id: i64,
    pub name: String,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default, rename = "has7DayReminder")]
    pub has_7_day_reminder: bool,
    #[serde(default, rename = "has30DayReminder")]
    pub has_30_day_reminder: bool,
}

impl Certificate {
    pub fn thresholds(&self) -> ReminderThresholds {
        ReminderThresholds::new(self.has_7_day_reminder, self.has_30_day_reminder)
    }
}

/// Registry entry (distinct from company equipment) owning its certificates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentItem {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub company_id: i64,
    pub name: String,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
}
