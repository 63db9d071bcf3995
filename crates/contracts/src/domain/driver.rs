use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::DriverStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    pub id: Uuid,
    pub user_id: Uuid,
    pub license_number: String,
    pub license_expiry: String,
    pub availability_status: DriverStatus,
    pub rating: f64,
    pub total_deliveries: i64,
    pub created_at: String,
}

impl Driver {
    /// Short display handle; drivers have no name of their own, the
    /// profile row does.
    pub fn short_id(&self) -> String {
        let s = self.id.to_string();
        s[..8].to_string()
    }
}
