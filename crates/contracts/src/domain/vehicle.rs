use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::VehicleStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: Uuid,
    pub license_plate: String,
    pub model: String,
    pub capacity_kg: f64,
    pub fuel_consumption_per_km: f64,
    pub status: VehicleStatus,
    pub last_maintenance: Option<String>,
    pub created_at: String,
}
