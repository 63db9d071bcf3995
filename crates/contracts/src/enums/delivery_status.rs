use serde::{Deserialize, Serialize};

use super::StatusTone;

/// Delivery lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Pending,
    InTransit,
    Delivered,
    Delayed,
    Failed,
    #[serde(other)]
    Unknown,
}

impl DeliveryStatus {
    /// The fixed set the Deliveries view offers as a status filter.
    /// `Unknown` is deliberately absent: it is a rendering fallback,
    /// not a queryable state.
    pub const FILTERABLE: [DeliveryStatus; 5] = [
        DeliveryStatus::Pending,
        DeliveryStatus::InTransit,
        DeliveryStatus::Delivered,
        DeliveryStatus::Delayed,
        DeliveryStatus::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "pending",
            DeliveryStatus::InTransit => "in_transit",
            DeliveryStatus::Delivered => "delivered",
            DeliveryStatus::Delayed => "delayed",
            DeliveryStatus::Failed => "failed",
            DeliveryStatus::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "Pending",
            DeliveryStatus::InTransit => "In transit",
            DeliveryStatus::Delivered => "Delivered",
            DeliveryStatus::Delayed => "Delayed",
            DeliveryStatus::Failed => "Failed",
            DeliveryStatus::Unknown => "Unknown",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            DeliveryStatus::Pending => StatusTone::Neutral,
            DeliveryStatus::InTransit => StatusTone::Info,
            DeliveryStatus::Delivered => StatusTone::Success,
            DeliveryStatus::Delayed => StatusTone::Warning,
            DeliveryStatus::Failed => StatusTone::Danger,
            DeliveryStatus::Unknown => StatusTone::Neutral,
        }
    }
}

/// Whether a stop is a drop-off or a pickup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryKind {
    Delivery,
    Pickup,
    #[serde(other)]
    Unknown,
}

impl DeliveryKind {
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryKind::Delivery => "Delivery",
            DeliveryKind::Pickup => "Pickup",
            DeliveryKind::Unknown => "Stop",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filterable_set_excludes_unknown() {
        assert!(!DeliveryStatus::FILTERABLE.contains(&DeliveryStatus::Unknown));
        assert_eq!(DeliveryStatus::FILTERABLE.len(), 5);
    }

    #[test]
    fn unrecognized_status_gets_neutral_tone() {
        let s: DeliveryStatus = serde_json::from_str("\"teleported\"").unwrap();
        assert_eq!(s, DeliveryStatus::Unknown);
        assert_eq!(s.tone(), StatusTone::Neutral);
    }

    #[test]
    fn wire_strings_round_trip() {
        for s in DeliveryStatus::FILTERABLE {
            let json = format!("\"{}\"", s.as_str());
            let parsed: DeliveryStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, s);
        }
    }
}
