use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use meditrack_core::{
    errors::MedError,
    models::reminder::{CreateReminderRequest, ReminderResponse, UpdateReminderRequest},
};
use meditrack_db::models::DbReminder;

use crate::{ApiState, middleware::error_handling::AppError, scheduler::reminder_job_key};

/// Query parameters for listing reminders by medication
#[derive(Debug, Deserialize)]
pub struct ReminderQuery {
    pub medication_id: Uuid,
}

fn reminder_response(reminder: DbReminder) -> ReminderResponse {
    ReminderResponse {
        id: reminder.id,
        medication_id: reminder.medication_id,
        remind_time: reminder.remind_time,
        taken: reminder.taken,
    }
}

/// Logs the due reminder when its job fires. Delivery to a messaging
/// channel happens outside this service.
async fn fire_reminder(reminder_id: Uuid, medication_id: Uuid) {
    info!(
        "Medication reminder due: reminder_id={}, medication_id={}",
        reminder_id, medication_id
    );
}

#[axum::debug_handler]
pub async fn list_reminders(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ReminderQuery>,
) -> Result<Json<Vec<ReminderResponse>>, AppError> {
    let reminders = meditrack_db::repositories::reminder::get_reminders_by_medication_id(
        &state.db_pool,
        query.medication_id,
    )
    .await
    .map_err(MedError::Database)?;

    Ok(Json(reminders.into_iter().map(reminder_response).collect()))
}

#[axum::debug_handler]
pub async fn create_reminder(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateReminderRequest>,
) -> Result<Json<ReminderResponse>, AppError> {
    let reminder = meditrack_db::repositories::reminder::create_reminder(
        &state.db_pool,
        payload.medication_id,
        payload.remind_time,
        payload.taken,
    )
    .await
    .map_err(MedError::Database)?;

    state.scheduler.schedule_at(
        &reminder_job_key(reminder.id),
        reminder.remind_time,
        fire_reminder(reminder.id, reminder.medication_id),
    );

    Ok(Json(reminder_response(reminder)))
}

#[axum::debug_handler]
pub async fn update_reminder(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateReminderRequest>,
) -> Result<Json<ReminderResponse>, AppError> {
    let updated = meditrack_db::repositories::reminder::update_reminder(
        &state.db_pool,
        id,
        payload.remind_time,
        payload.taken,
    )
    .await
    .map_err(MedError::Database)?
    .ok_or_else(|| MedError::NotFound(format!("Reminder with ID {} not found", id)))?;

    // Re-schedule when the fire time moved
    if payload.remind_time.is_some() {
        state.scheduler.schedule_at(
            &reminder_job_key(updated.id),
            updated.remind_time,
            fire_reminder(updated.id, updated.medication_id),
        );
    }

    Ok(Json(reminder_response(updated)))
}

#[axum::debug_handler]
pub async fn delete_reminder(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    // Cancelling is a no-op when no job is pending for this reminder
    state.scheduler.cancel(&reminder_job_key(id));

    let deleted = meditrack_db::repositories::reminder::delete_reminder(&state.db_pool, id)
        .await
        .map_err(MedError::Database)?;

    if !deleted {
        return Err(AppError(MedError::NotFound(format!(
            "Reminder with ID {} not found",
            id
        ))));
    }

    Ok(Json(json!({ "ok": true })))
}
