use serde::{Deserialize, Serialize};

/// Staff role attached to a profile. Drives sidebar display only; access
/// control is enforced by the backend's row-level security.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Manager,
    Driver,
    #[serde(other)]
    Unknown,
}

impl UserRole {
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Manager => "Manager",
            UserRole::Driver => "Driver",
            UserRole::Unknown => "Staff",
        }
    }
}
