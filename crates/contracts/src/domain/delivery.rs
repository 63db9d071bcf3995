use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::{DeliveryKind, DeliveryStatus};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Delivery {
    pub id: Uuid,
    pub route_id: Option<Uuid>,
    pub client_id: Option<Uuid>,
    #[serde(rename = "type")]
    pub kind: DeliveryKind,
    pub status: DeliveryStatus,
    pub priority: i32,
    pub sequence_order: Option<i32>,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub weight_kg: Option<f64>,
    pub scheduled_time: Option<String>,
    pub actual_time: Option<String>,
    pub notes: Option<String>,
    pub created_at: String,
}

impl Delivery {
    /// Short reference shown on cards, e.g. `Delivery #1f2e3d4c`.
    pub fn short_id(&self) -> String {
        let s = self.id.to_string();
        s[..8].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_deserializes_from_type_column() {
        let d: Delivery = serde_json::from_value(serde_json::json!({
            "id": "a1a2a3a4-b1b2-c1c2-d1d2-e1e2e3e4e5e6",
            "route_id": null,
            "client_id": null,
            "type": "pickup",
            "status": "pending",
            "priority": 3,
            "sequence_order": null,
            "address": "12 Dock Rd",
            "latitude": null,
            "longitude": null,
            "weight_kg": null,
            "scheduled_time": null,
            "actual_time": null,
            "notes": null,
            "created_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(d.kind, DeliveryKind::Pickup);
        assert_eq!(d.short_id(), "a1a2a3a4");
    }
}
