use serde::{Deserialize, Serialize};

use super::StatusTone;

/// Vehicle lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    Available,
    InUse,
    Maintenance,
    /// Any wire value outside the known set.
    #[serde(other)]
    Unknown,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "available",
            VehicleStatus::InUse => "in_use",
            VehicleStatus::Maintenance => "maintenance",
            VehicleStatus::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "Available",
            VehicleStatus::InUse => "In use",
            VehicleStatus::Maintenance => "Maintenance",
            VehicleStatus::Unknown => "Unknown",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            VehicleStatus::Available => StatusTone::Success,
            VehicleStatus::InUse => StatusTone::Info,
            VehicleStatus::Maintenance => StatusTone::Warning,
            VehicleStatus::Unknown => StatusTone::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_known_values() {
        let s: VehicleStatus = serde_json::from_str("\"in_use\"").unwrap();
        assert_eq!(s, VehicleStatus::InUse);
        assert_eq!(s.tone(), StatusTone::Info);
    }

    #[test]
    fn unknown_value_falls_back_to_neutral() {
        let s: VehicleStatus = serde_json::from_str("\"decommissioned\"").unwrap();
        assert_eq!(s, VehicleStatus::Unknown);
        assert_eq!(s.tone(), StatusTone::Neutral);
    }
}
