//! Which roles may see which reminder categories.

use crate::models::reminder::ReminderCategory;
use crate::models::role::Role;

/// Roles allowed to see equipment-certificate reminders.
pub const CERTIFICATE_VIEWERS: [Role; 4] = [
    Role::Company,
    Role::Administrator,
    Role::Management,
    Role::Mechanic,
];

pub fn can_view(role: Role, category: ReminderCategory) -> bool {
    match category {
        ReminderCategory::PlantAndVehicles | ReminderCategory::Tickets => true,
        ReminderCategory::EquipmentCertificates => CERTIFICATE_VIEWERS.contains(&role),
    }
}
