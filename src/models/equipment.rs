use super::reminder::ReminderThresholds;
use serde::{Deserialize, Serialize};

/// Kind of company equipment.
/// Only `Plant` (thorough examination) and `Vehicles` (MOT) carry reminder dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EquipmentType {
    Plant,
    Vehicles,
    Lifting,
    Electrical,
    CatGenny,
    Other,
}

impl EquipmentType {
    pub fn code(&self) -> &'static str {
        match self {
            EquipmentType::Plant => "plant",
            EquipmentType::Vehicles => "vehicles",
            EquipmentType::Lifting => "lifting",
            EquipmentType::Electrical => "electrical",
            EquipmentType::CatGenny => "cat-genny",
            EquipmentType::Other => "other",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.code()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "plant" => Some(EquipmentType::Plant),
            "vehicles" => Some(EquipmentType::Vehicles),
            "lifting" => Some(EquipmentType::Lifting),
            "electrical" => Some(EquipmentType::Electrical),
            "cat-genny" => Some(EquipmentType::CatGenny),
            "other" => Some(EquipmentType::Other),
            _ => None,
        }
    }

    /// Helper: convert CLI input (any case, `vehicle` accepted as alias)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "vehicle" => Some(EquipmentType::Vehicles),
            "cat_genny" | "catgenny" => Some(EquipmentType::CatGenny),
            other => EquipmentType::from_db_str(other),
        }
    }
}

/// A piece of equipment owned by a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub company_id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EquipmentType,
    #[serde(default)]
    pub serial_number: Option<String>,

    #[serde(default)]
    pub thorough_examination_date: Option<String>,
    #[serde(default, rename = "has7DayReminder")]
    pub has_7_day_reminder: bool,
    #[serde(default, rename = "has30DayReminder")]
    pub has_30_day_reminder: bool,

    #[serde(default)]
    pub mot_date: Option<String>,
    #[serde(default, rename = "hasMot7DayReminder")]
    pub has_mot_7_day_reminder: bool,
    #[serde(default, rename = "hasMot30DayReminder")]
    pub has_mot_30_day_reminder: bool,
}

impl Equipment {
    pub fn new(company_id: i64, name: &str, kind: EquipmentType) -> Self {
        Self {
            id: 0,
            company_id,
            name: name.to_string(),
            kind,
            serial_number: None,
            thorough_examination_date: None,
            has_7_day_reminder: false,
            has_30_day_reminder: false,
            mot_date: None,
            has_mot_7_day_reminder: false,
            has_mot_30_day_reminder: false,
        }
    }

    pub fn examination_thresholds(&self) -> ReminderThresholds {
        ReminderThresholds::new(self.has_7_day_reminder, self.has_30_day_reminder)
    }

    pub fn mot_thresholds(&self) -> ReminderThresholds {
        ReminderThresholds::new(self.has_mot_7_day_reminder, self.has_mot_30_day_reminder)
    }
}
