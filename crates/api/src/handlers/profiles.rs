use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::info;

use meditrack_core::{
    errors::MedError,
    models::profile::{UpdateUserProfileRequest, UserProfile},
};

use crate::{ApiState, middleware::error_handling::AppError};

/// Fetches the profile, creating an all-false default row on first read.
#[axum::debug_handler]
pub async fn get_profile(
    State(state): State<Arc<ApiState>>,
    Path(user_id): Path<String>,
) -> Result<Json<UserProfile>, AppError> {
    let profile =
        meditrack_db::repositories::profile::get_or_create_profile(&state.db_pool, &user_id)
            .await
            .map_err(MedError::Database)?;

    Ok(Json(profile.into()))
}

#[axum::debug_handler]
pub async fn update_profile(
    State(state): State<Arc<ApiState>>,
    Path(user_id): Path<String>,
    Json(payload): Json<UpdateUserProfileRequest>,
) -> Result<Json<UserProfile>, AppError> {
    let profile = meditrack_db::repositories::profile::update_profile(
        &state.db_pool,
        &user_id,
        &payload,
    )
    .await
    .map_err(MedError::Database)?;

    info!("Updated profile for user {}", user_id);
    Ok(Json(profile.into()))
}

#[axum::debug_handler]
pub async fn delete_profile(
    State(state): State<Arc<ApiState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let deleted =
        meditrack_db::repositories::profile::delete_profile(&state.db_pool, &user_id)
            .await
            .map_err(MedError::Database)?;

    if !deleted {
        return Err(AppError(MedError::NotFound(format!(
            "Profile for user {} not found",
            user_id
        ))));
    }

    info!("Deleted profile for user {}", user_id);
    Ok(Json(json!({ "message": "Profile deleted" })))
}
