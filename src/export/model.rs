// src/export/model.rs

use crate::models::reminder::ReminderItem;
use serde::Serialize;

/// Flat reminder row for CSV / JSON.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ReminderExport {
    pub id: i64,
    pub category: String,
    pub kind: String,
    pub label: String,
    pub expiry_date: String,
    pub days_until_expiry: Option<i64>,
    pub status: String,
    pub has_7_day_reminder: bool,
    pub has_30_day_reminder: bool,
    pub invalid_date: bool,
}

impl From<&ReminderItem> for ReminderExport {
    fn from(item: &ReminderItem) -> Self {
        Self {
            id: item.id,
            category: item.category.as_str().to_string(),
            kind: item.kind.as_str().to_string(),
            label: item.label.clone(),
            expiry_date: item.expiry_date.clone(),
            days_until_expiry: item.days_until_expiry,
            status: item.status.as_str().to_string(),
            has_7_day_reminder: item.has_7_day_reminder,
            has_30_day_reminder: item.has_30_day_reminder,
            invalid_date: item.invalid_date,
        }
    }
}

pub(crate) fn to_rows(items: &[ReminderItem]) -> Vec<ReminderExport> {
    items.iter().map(ReminderExport::from).collect()
}
