use serde::{Deserialize, Serialize};

use super::StatusTone;

/// Route lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    Planned,
    InProgress,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl RouteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteStatus::Planned => "planned",
            RouteStatus::InProgress => "in_progress",
            RouteStatus::Completed => "completed",
            RouteStatus::Cancelled => "cancelled",
            RouteStatus::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RouteStatus::Planned => "Planned",
            RouteStatus::InProgress => "In progress",
            RouteStatus::Completed => "Completed",
            RouteStatus::Cancelled => "Cancelled",
            RouteStatus::Unknown => "Unknown",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            RouteStatus::Planned => StatusTone::Info,
            RouteStatus::InProgress => StatusTone::Warning,
            RouteStatus::Completed => StatusTone::Success,
            RouteStatus::Cancelled => StatusTone::Danger,
            RouteStatus::Unknown => StatusTone::Neutral,
        }
    }
}
