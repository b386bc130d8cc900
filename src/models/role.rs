use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Company,
    Administrator,
    Management,
    Mechanic,
    Supervisor,
    Employee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Company => "company",
            Role::Administrator => "administrator",
            Role::Management => "management",
            Role::Mechanic => "mechanic",
            Role::Supervisor => "supervisor",
            Role::Employee => "employee",
        }
    }

    /// Parse a role name (case-insensitive, `admin` accepted).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "company" => Some(Role::Company),
            "administrator" | "admin" => Some(Role::Administrator),
            "management" | "manager" => Some(Role::Management),
            "mechanic" => Some(Role::Mechanic),
            "supervisor" => Some(Role::Supervisor),
            "employee" => Some(Role::Employee),
            _ => None,
        }
    }
}
