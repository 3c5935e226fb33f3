use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub platform_user_id: String,
    pub name: Option<String>,
    pub timezone: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub platform_user_id: String,
    pub name: Option<String>,
    pub timezone: Option<String>,
}

/// Patch semantics: only supplied fields are applied. Unknown keys are
/// rejected rather than silently ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub platform_user_id: String,
    pub name: Option<String>,
    pub timezone: Option<String>,
    pub created_at: DateTime<Utc>,
}
