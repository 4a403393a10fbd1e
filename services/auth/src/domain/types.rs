use uuid::Uuid;

use hotelier_domain::role::Role;

/// A `profiles` row as seen at login.
#[derive(Debug, Clone)]
pub struct ProfileRecord {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
}

/// An `employees` row as seen at login.
#[derive(Debug, Clone)]
pub struct EmployeeRecord {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

impl EmployeeRecord {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_owned()
    }
}
