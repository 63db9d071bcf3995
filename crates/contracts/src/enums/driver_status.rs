use serde::{Deserialize, Serialize};

use super::StatusTone;

/// Driver availability status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriverStatus {
    Available,
    OnRoute,
    OffDuty,
    #[serde(other)]
    Unknown,
}

impl DriverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriverStatus::Available => "available",
            DriverStatus::OnRoute => "on_route",
            DriverStatus::OffDuty => "off_duty",
            DriverStatus::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DriverStatus::Available => "Available",
            DriverStatus::OnRoute => "On route",
            DriverStatus::OffDuty => "Off duty",
            DriverStatus::Unknown => "Unknown",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            DriverStatus::Available => StatusTone::Success,
            DriverStatus::OnRoute => StatusTone::Info,
            DriverStatus::OffDuty => StatusTone::Neutral,
            DriverStatus::Unknown => StatusTone::Neutral,
        }
    }
}
