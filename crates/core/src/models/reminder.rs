use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    pub id: Uuid,
    pub medication_id: Uuid,
    pub remind_time: DateTime<Utc>,
    pub taken: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReminderRequest {
    pub medication_id: Uuid,
    pub remind_time: DateTime<Utc>,
    #[serde(default)]
    pub taken: bool,
}

/// Patch semantics: only supplied fields are applied. Unknown keys are
/// rejected rather than silently ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateReminderRequest {
    pub remind_time: Option<DateTime<Utc>>,
    pub taken: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderResponse {
    pub id: Uuid,
    pub medication_id: Uuid,
    pub remind_time: DateTime<Utc>,
    pub taken: bool,
}
