use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::NotificationKind;

/// User-scoped alert. The only entity the application ever writes back:
/// a single-field `is_read` update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub related_entity_type: Option<String>,
    pub related_entity_id: Option<Uuid>,
    pub created_at: String,
}
