use clap::ValueEnum;
use serde::Serialize;

/// Expiry state of a dated field, ordered by urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReminderStatus {
    Expired,
    ExpiringSoon,
    Valid,
}

impl ReminderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReminderStatus::Expired => "expired",
            ReminderStatus::ExpiringSoon => "expiring-soon",
            ReminderStatus::Valid => "valid",
        }
    }

    pub fn is_actionable(&self) -> bool {
        !matches!(self, ReminderStatus::Valid)
    }
}

/// Tab a reminder is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ReminderCategory {
    #[value(name = "plant", alias = "vehicles")]
    PlantAndVehicles,
    #[value(name = "certificates")]
    EquipmentCertificates,
    #[value(name = "tickets")]
    Tickets,
}

impl ReminderCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReminderCategory::PlantAndVehicles => "plant & vehicles",
            ReminderCategory::EquipmentCertificates => "certificates",
            ReminderCategory::Tickets => "tickets",
        }
    }
}

/// Entity kind a reminder was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    PlantEquipment,
    VehicleEquipment,
    Certificate,
    Ticket,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::PlantEquipment => "plant",
            SourceKind::VehicleEquipment => "vehicle",
            SourceKind::Certificate => "certificate",
            SourceKind::Ticket => "ticket",
        }
    }

    pub fn category(&self) -> ReminderCategory {
        match self {
            SourceKind::PlantEquipment | SourceKind::VehicleEquipment => {
                ReminderCategory::PlantAndVehicles
            }
            SourceKind::Certificate => ReminderCategory::EquipmentCertificates,
            SourceKind::Ticket => ReminderCategory::Tickets,
        }
    }
}

/// 7-day / 30-day opt-in flags attached to a dated field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ReminderThresholds {
    pub seven_day: bool,
    pub thirty_day: bool,
}

impl ReminderThresholds {
    pub fn new(seven_day: bool, thirty_day: bool) -> Self {
        Self {
            seven_day,
            thirty_day,
        }
    }

    pub fn any(&self) -> bool {
        self.seven_day || self.thirty_day
    }

    /// Short badge text, e.g. `7d/30d`.
    pub fn label(&self) -> String {
        match (self.seven_day, self.thirty_day) {
            (true, true) => "7d/30d".to_string(),
            (true, false) => "7d".to_string(),
            (false, true) => "30d".to_string(),
            (false, false) => "-".to_string(),
        }
    }
}

/// One actionable reminder. Recomputed on every aggregation, never stored.
///
/// `days_until_expiry` is `None` only when the source date could not be
/// parsed; such items are reported as expired with `invalid_date` set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReminderItem {
    pub id: i64,
    pub owner_id: i64,
    pub label: String,
    pub category: ReminderCategory,
    pub kind: SourceKind,
    pub expiry_date: String,
    pub days_until_expiry: Option<i64>,
    pub status: ReminderStatus,
    pub has_7_day_reminder: bool,
    pub has_30_day_reminder: bool,
    pub invalid_date: bool,
}

impl ReminderItem {
    pub fn thresholds(&self) -> ReminderThresholds {
        ReminderThresholds::new(self.has_7_day_reminder, self.has_30_day_reminder)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReminderCounts {
    pub expired: usize,
    pub expiring_soon: usize,
    pub invalid_date: usize,
}

impl ReminderCounts {
    pub fn total(&self) -> usize {
        self.expired + self.expiring_soon
    }
}

/// Sorted reminder list plus counters for badges.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ReminderReport {
    pub items: Vec<ReminderItem>,
    pub counts: ReminderCounts,
}
