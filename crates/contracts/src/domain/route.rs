use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::RouteStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub id: Uuid,
    pub name: String,
    pub vehicle_id: Option<Uuid>,
    pub driver_id: Option<Uuid>,
    pub status: RouteStatus,
    pub total_distance_km: f64,
    pub estimated_duration_minutes: i64,
    pub estimated_fuel_cost: f64,
    pub actual_fuel_cost: Option<f64>,
    pub planned_start: Option<String>,
    pub actual_start: Option<String>,
    pub actual_end: Option<String>,
    pub created_by: Option<Uuid>,
    pub created_at: String,
}
