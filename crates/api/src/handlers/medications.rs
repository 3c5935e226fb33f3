use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use meditrack_core::{
    errors::MedError,
    models::medication::{
        CreateMedicationRequest, MedicationResponse, UpdateMedicationRequest,
    },
};
use meditrack_db::models::DbMedication;

use crate::{ApiState, middleware::error_handling::AppError};

/// Query parameters for listing medications by owner
#[derive(Debug, Deserialize)]
pub struct MedicationQuery {
    pub user_id: String,
}

pub(crate) fn medication_response(medication: DbMedication) -> MedicationResponse {
    let status = medication.status();
    MedicationResponse {
        id: medication.id,
        user_id: medication.user_id,
        name: medication.name,
        dose: medication.dose,
        frequency: medication.frequency,
        effect: medication.effect,
        remind_times: medication.remind_times.0,
        start_date: medication.start_date,
        end_date: medication.end_date,
        status,
    }
}

#[axum::debug_handler]
pub async fn list_medications(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<MedicationQuery>,
) -> Result<Json<Vec<MedicationResponse>>, AppError> {
    let medications = meditrack_db::repositories::medication::list_medications_by_user(
        &state.db_pool,
        &query.user_id,
    )
    .await
    .map_err(MedError::Database)?;

    Ok(Json(
        medications.into_iter().map(medication_response).collect(),
    ))
}

#[axum::debug_handler]
pub async fn get_medication(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<MedicationResponse>, AppError> {
    let medication =
        meditrack_db::repositories::medication::get_medication_by_id(&state.db_pool, id)
            .await
            .map_err(MedError::Database)?
            .ok_or_else(|| {
                MedError::NotFound(format!("Medication with ID {} not found", id))
            })?;

    Ok(Json(medication_response(medication)))
}

/// Batch create: the whole request is all-or-nothing. Any per-item
/// validation failure aborts the batch before a single row is written, and
/// any insert failure rolls back the transaction.
#[axum::debug_handler]
pub async fn create_medications_batch(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<Vec<CreateMedicationRequest>>,
) -> Result<(StatusCode, Json<Vec<MedicationResponse>>), AppError> {
    info!("Received medication batch with {} items", payload.len());

    for medication in &payload {
        // Audit log of every incoming item
        info!(
            "Batch item: user_id={}, name={}, dose={}, frequency={}",
            medication.user_id, medication.name, medication.dose, medication.frequency
        );

        if medication.user_id.is_empty() {
            return Err(AppError(MedError::Validation(
                "Every medication record must include a user_id".to_string(),
            )));
        }
        if medication.name.is_empty() {
            return Err(AppError(MedError::Validation(
                "Every medication record must include a name".to_string(),
            )));
        }
    }

    let created = meditrack_db::repositories::medication::create_medications_batch(
        &state.db_pool,
        &payload,
    )
    .await
    .map_err(MedError::Database)?;

    info!("Created {} medication records", created.len());

    Ok((
        StatusCode::CREATED,
        Json(created.into_iter().map(medication_response).collect()),
    ))
}

#[axum::debug_handler]
pub async fn update_medication(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateMedicationRequest>,
) -> Result<Json<MedicationResponse>, AppError> {
    let updated =
        meditrack_db::repositories::medication::update_medication(&state.db_pool, id, &payload)
            .await
            .map_err(MedError::Database)?
            .ok_or_else(|| {
                MedError::NotFound(format!("Medication with ID {} not found", id))
            })?;

    Ok(Json(medication_response(updated)))
}

#[axum::debug_handler]
pub async fn delete_medication(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let deleted = meditrack_db::repositories::medication::delete_medication(&state.db_pool, id)
        .await
        .map_err(MedError::Database)?;

    if !deleted {
        return Err(AppError(MedError::NotFound(format!(
            "Medication with ID {} not found",
            id
        ))));
    }

    Ok(Json(json!({ "ok": true })))
}
