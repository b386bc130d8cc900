use super::certificate::EquipmentItem;
use super::company::Company;
use super::role::Role;
use super::ticket::Ticket;
use chrono::{DateTime, Utc};

/// Who is looking at the reminders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewer {
    pub role: Role,
    pub company_id: Option<i64>,
    pub employee_id: Option<i64>,
}

impl Viewer {
    pub fn company(role: Role, company_id: i64) -> Self {
        Self {
            role,
            company_id: Some(company_id),
            employee_id: None,
        }
    }

    pub fn employee(employee_id: i64) -> Self {
        Self {
            role: Role::Employee,
            company_id: None,
            employee_id: Some(employee_id),
        }
    }

    pub fn has_target(&self) -> bool {
        self.company_id.is_some() || self.employee_id.is_some()
    }
}

/// Everything the aggregator needs besides the records: the viewer and `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scope {
    pub viewer: Viewer,
    pub now: DateTime<Utc>,
}

impl Scope {
    pub fn new(viewer: Viewer, now: DateTime<Utc>) -> Self {
        Self { viewer, now }
    }
}

/// Materialised records handed to the engine by the store or an import.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReminderInputs {
    pub companies: Vec<Company>,
    pub assets: Vec<EquipmentItem>,
    pub tickets: Vec<Ticket>,
}
