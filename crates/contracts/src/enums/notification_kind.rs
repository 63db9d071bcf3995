use serde::{Deserialize, Serialize};

use super::StatusTone;

/// Notification category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Delay,
    Deviation,
    Maintenance,
    General,
    #[serde(other)]
    Unknown,
}

impl NotificationKind {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationKind::Delay => "Delay",
            NotificationKind::Deviation => "Deviation",
            NotificationKind::Maintenance => "Maintenance",
            NotificationKind::General => "General",
            NotificationKind::Unknown => "Notice",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            NotificationKind::Delay => StatusTone::Warning,
            NotificationKind::Deviation => StatusTone::Danger,
            NotificationKind::Maintenance => StatusTone::Info,
            NotificationKind::General => StatusTone::Neutral,
            NotificationKind::Unknown => StatusTone::Neutral,
        }
    }

    /// Icon name understood by the frontend icon lookup.
    pub fn icon_name(&self) -> &'static str {
        match self {
            NotificationKind::Delay => "alert-circle",
            NotificationKind::Deviation => "alert-circle",
            NotificationKind::Maintenance => "wrench",
            NotificationKind::General => "info",
            NotificationKind::Unknown => "bell",
        }
    }
}
