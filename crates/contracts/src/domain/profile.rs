use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::UserRole;

/// Staff profile row, keyed by the auth user id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub full_name: String,
    pub role: UserRole,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: String,
}

impl Profile {
    /// First letter of the name, for the sidebar avatar circle.
    pub fn initial(&self) -> String {
        self.full_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_is_uppercased_first_char() {
        let p: Profile = serde_json::from_value(serde_json::json!({
            "id": "a1a2a3a4-b1b2-c1c2-d1d2-e1e2e3e4e5e6",
            "full_name": "maria lopez",
            "role": "manager",
            "phone": null,
            "avatar_url": null,
            "created_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(p.initial(), "M");
        assert_eq!(p.role, UserRole::Manager);
    }
}
