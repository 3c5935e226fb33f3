use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Lifecycle status of a medication record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MedicationStatus {
    #[default]
    #[serde(rename = "in progress")]
    InProgress,
    #[serde(rename = "stopped")]
    Stopped,
}

impl MedicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MedicationStatus::InProgress => "in progress",
            MedicationStatus::Stopped => "stopped",
        }
    }

    /// Parses a stored status value. Unknown values map to `InProgress`,
    /// matching the storage default.
    pub fn parse(value: &str) -> Self {
        match value {
            "stopped" => MedicationStatus::Stopped,
            _ => MedicationStatus::InProgress,
        }
    }
}

/// A daily recurrence slot for medication reminders. Hour and minute only;
/// no date, no timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemindTime {
    pub hour: u32,
    pub minute: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Medication {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub dose: String,
    pub frequency: String,
    pub effect: String,
    pub remind_times: Vec<RemindTime>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: MedicationStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMedicationRequest {
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub dose: String,
    #[serde(default)]
    pub frequency: String,
    #[serde(default)]
    pub effect: String,
    #[serde(default)]
    pub remind_times: Vec<RemindTime>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: MedicationStatus,
}

/// Patch semantics: only supplied fields are applied. Unknown keys are
/// rejected rather than silently ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateMedicationRequest {
    pub name: Option<String>,
    pub dose: Option<String>,
    pub frequency: Option<String>,
    pub effect: Option<String>,
    pub remind_times: Option<Vec<RemindTime>>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub end_date: Option<NaiveDate>,
    pub status: Option<MedicationStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicationResponse {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub dose: String,
    pub frequency: String,
    pub effect: String,
    pub remind_times: Vec<RemindTime>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: MedicationStatus,
}

/// Clients submit dates as ISO strings and use `""` for "not set".
/// Treat the empty string the same as an absent field.
fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<NaiveDate>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
