use axum::{
    Json,
    extract::{Multipart, State},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use meditrack_ai::parser::{RecognizedMedication, parse_recognition_response};
use meditrack_core::{errors::MedError, timezone};

use crate::{ApiState, middleware::error_handling::AppError};

/// Timezone used when the client does not send one.
const DEFAULT_TIMEZONE: &str = "Asia/Taipei";

#[derive(Debug, Serialize)]
pub struct RecognitionResponse {
    pub medications: Vec<RecognizedMedication>,
}

/// Accepts a multipart prescription photo upload and returns the
/// structured medications the AI recognized in it.
///
/// Expected fields: `file` (the image), `user_id`, and an optional
/// `user_timezone` (defaults to Asia/Taipei).
#[axum::debug_handler]
pub async fn recognize_prescription(
    State(state): State<Arc<ApiState>>,
    mut multipart: Multipart,
) -> Result<Json<RecognitionResponse>, AppError> {
    let mut image_bytes: Option<Vec<u8>> = None;
    let mut content_type: Option<String> = None;
    let mut user_id: Option<String> = None;
    let mut user_timezone = DEFAULT_TIMEZONE.to_string();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| MedError::Validation(format!("Invalid multipart request: {}", e)))?
    {
        match field.name() {
            Some("file") => {
                content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(|e| {
                    MedError::Validation(format!("Failed to read uploaded file: {}", e))
                })?;
                image_bytes = Some(bytes.to_vec());
            }
            Some("user_id") => {
                let value = field.text().await.map_err(|e| {
                    MedError::Validation(format!("Failed to read user_id field: {}", e))
                })?;
                user_id = Some(value);
            }
            Some("user_timezone") => {
                let value = field.text().await.map_err(|e| {
                    MedError::Validation(format!("Failed to read user_timezone field: {}", e))
                })?;
                if !value.is_empty() {
                    user_timezone = value;
                }
            }
            _ => {}
        }
    }

    let image_bytes = image_bytes.ok_or_else(|| {
        MedError::Validation("An image file is required".to_string())
    })?;
    let user_id = user_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| MedError::Validation("The user_id form field is required".to_string()))?;
    let content_type = content_type.unwrap_or_default();
    if !content_type.starts_with("image/") {
        return Err(AppError(MedError::Validation(
            "The uploaded file must be an image".to_string(),
        )));
    }

    info!(
        "Recognition request from user_id={} with timezone {}",
        user_id, user_timezone
    );

    let today = timezone::current_date_in_timezone(&user_timezone);
    let response = state
        .ai
        .recognize_prescription(&image_bytes, &content_type, &user_timezone, today)
        .await?;

    let medications = parse_recognition_response(&response, today)?;

    info!(
        "Recognized {} medications for user_id={}",
        medications.len(),
        user_id
    );

    Ok(Json(RecognitionResponse { medications }))
}
