use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use meditrack_core::{
    errors::MedError,
    models::user::{CreateUserRequest, UpdateUserRequest, UserResponse},
};
use meditrack_db::models::DbUser;

use crate::{ApiState, middleware::error_handling::AppError};

/// Query parameters identifying a user by the external platform identifier
#[derive(Debug, Deserialize)]
pub struct UserQuery {
    pub platform_user_id: String,
}

fn user_response(user: DbUser) -> UserResponse {
    UserResponse {
        id: user.id,
        platform_user_id: user.platform_user_id,
        name: user.name,
        timezone: user.timezone,
        created_at: user.created_at,
    }
}

#[axum::debug_handler]
pub async fn get_user(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<UserQuery>,
) -> Result<Json<UserResponse>, AppError> {
    let db_user = meditrack_db::repositories::user::get_user_by_platform_id(
        &state.db_pool,
        &query.platform_user_id,
    )
    .await
    .map_err(MedError::Database)?
    .ok_or_else(|| {
        MedError::NotFound(format!("User {} not found", query.platform_user_id))
    })?;

    Ok(Json(user_response(db_user)))
}

#[axum::debug_handler]
pub async fn create_user(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    if payload.platform_user_id.is_empty() {
        return Err(AppError(MedError::Validation(
            "platform_user_id must not be empty".to_string(),
        )));
    }

    let db_user = meditrack_db::repositories::user::create_user(
        &state.db_pool,
        &payload.platform_user_id,
        payload.name.as_deref(),
        payload.timezone.as_deref(),
    )
    .await
    .map_err(MedError::Database)?;

    Ok(Json(user_response(db_user)))
}

#[axum::debug_handler]
pub async fn update_user(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<UserQuery>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let db_user = meditrack_db::repositories::user::update_user(
        &state.db_pool,
        &query.platform_user_id,
        payload.name.as_deref(),
        payload.timezone.as_deref(),
    )
    .await
    .map_err(MedError::Database)?
    .ok_or_else(|| {
        MedError::NotFound(format!("User {} not found", query.platform_user_id))
    })?;

    Ok(Json(user_response(db_user)))
}
