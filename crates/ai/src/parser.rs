//! Defensive extraction of structured data from raw AI responses.

use chrono::NaiveDate;
use meditrack_core::models::medication::{MedicationStatus, RemindTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::AiError;

/// One medication extracted from a prescription image, with every field
/// defaulted so downstream code never sees null/absent values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedMedication {
    pub name: String,
    pub effect: String,
    pub dose: String,
    pub frequency: String,
    pub remind_times: Vec<RemindTime>,
    /// ISO date string; defaults to today when the AI omits it
    pub start_date: String,
    /// ISO date string or "" when not inferable
    pub end_date: String,
    pub status: MedicationStatus,
}

/// Parses a recognition response into validated medication records.
///
/// Accepts both response shapes: the candidates envelope whose text part
/// holds JSON (optionally inside a ```json fence), and the direct JSON
/// object produced when the service honors `response_mime_type`.
/// Elements without a name are discarded; missing fields become empty
/// string/array and a missing start date becomes `today`.
pub fn parse_recognition_response(
    response: &Value,
    today: NaiveDate,
) -> Result<Vec<RecognizedMedication>, AiError> {
    let document = if response.get("candidates").is_some() {
        let text = candidate_text(response).ok_or_else(|| {
            AiError::MalformedResponse(
                "recognition response has no extractable text part".to_string(),
            )
        })?;
        let json_str = strip_code_fence(text);
        serde_json::from_str::<Value>(json_str).map_err(|e| {
            AiError::MalformedResponse(format!("recognition text is not valid JSON: {}", e))
        })?
    } else {
        response.clone()
    };

    let Some(medications) = document.get("medications").and_then(Value::as_array) else {
        warn!(
            "Recognition response lacks a 'medications' array: {}",
            document
        );
        return Ok(Vec::new());
    };

    let mut validated = Vec::with_capacity(medications.len());
    for med in medications {
        let name = string_field(med, "name");
        if name.is_empty() {
            warn!("Discarding recognized medication without a name: {}", med);
            continue;
        }

        let remind_times = med
            .get("remind_times")
            .cloned()
            .map(|v| serde_json::from_value::<Vec<RemindTime>>(v).unwrap_or_default())
            .unwrap_or_default();

        let start_date = match med.get("start_date").and_then(Value::as_str) {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => today.to_string(),
        };

        validated.push(RecognizedMedication {
            name,
            effect: string_field(med, "effect"),
            dose: string_field(med, "dose"),
            frequency: string_field(med, "frequency"),
            remind_times,
            start_date,
            end_date: string_field(med, "end_date"),
            status: MedicationStatus::InProgress,
        });
    }

    Ok(validated)
}

/// Extracts the analysis text from a text-completion response.
///
/// The expected shape is `candidates[0].content.parts[0].text`; anything
/// else is a malformed response, reported as such rather than defaulted.
pub fn extract_analysis_text(response: &Value) -> Result<String, AiError> {
    candidate_text(response)
        .map(|text| text.trim().to_string())
        .ok_or_else(|| {
            warn!("Could not extract analysis text from response: {}", response);
            AiError::MalformedResponse("could not extract analysis text".to_string())
        })
}

/// The first candidate's first text part, when present.
fn candidate_text(response: &Value) -> Option<&str> {
    response
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
}

fn string_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Unwraps a markdown code fence (with an optional `json` language tag)
/// around a payload; returns the input unchanged when there is no fence.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}
