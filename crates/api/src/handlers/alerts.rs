use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

use meditrack_ai::{parser::extract_analysis_text, prompt::build_analysis_prompt};
use meditrack_core::{
    errors::MedError,
    interactions::check_known_interactions,
    models::{
        alert::{AlertResponse, AnalyzeRequest, AnalyzeResponse},
        profile::UserProfile,
    },
};

use crate::{
    ApiState, handlers::medications::medication_response,
    middleware::error_handling::AppError,
};

/// Fixed informational reply when the user has no active medications.
/// This is a distinct result, not an error, and no AI call is made.
pub const NO_ACTIVE_MEDICATIONS_MESSAGE: &str =
    "There are no in-progress medication records, so interaction analysis cannot run. \
     Add your medications first.";

/// Query parameters for listing alert history by owner
#[derive(Debug, Deserialize)]
pub struct AlertQuery {
    pub user_id: String,
}

/// Runs a full interaction analysis for one user: active medications plus
/// health profile go into the AI prompt, the extracted analysis text and
/// the programmatic known-pair check are stored as an append-only alert.
#[axum::debug_handler]
pub async fn analyze_interactions(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let user_id = payload.user_id;
    info!("Starting interaction analysis for user {}", user_id);

    // 1. The user's active medication list
    let medications = meditrack_db::repositories::medication::list_active_medications_by_user(
        &state.db_pool,
        &user_id,
    )
    .await
    .map_err(MedError::Database)?;

    // Guard clause: nothing to analyze, no AI call
    if medications.is_empty() {
        return Ok(Json(AnalyzeResponse {
            analysis_result: NO_ACTIVE_MEDICATIONS_MESSAGE.to_string(),
            has_interactions: false,
            medication_count: 0,
        }));
    }

    // 2. The user's health profile, when one exists
    let profile: Option<UserProfile> =
        meditrack_db::repositories::profile::get_profile_by_user_id(&state.db_pool, &user_id)
            .await
            .map_err(MedError::Database)?
            .map(Into::into);

    // 3. Build the analysis prompt
    let medications: Vec<_> = medications.into_iter().map(medication_response).collect();
    let prompt = build_analysis_prompt(&medications, profile.as_ref());
    debug!("Analysis prompt is {} characters", prompt.len());

    // 4. Call the AI service and extract the analysis text
    let response = state.ai.generate_text(&prompt).await?;
    let analysis_text = extract_analysis_text(&response)?;

    // 5. Programmatic check against the known-pair list
    let names: Vec<String> = medications.iter().map(|m| m.name.clone()).collect();
    let known = check_known_interactions(&names);

    // 6. Append the analysis record
    let result = json!({
        "analysis": &analysis_text,
        "medication_count": medications.len(),
        "has_profile": profile.is_some(),
        "known_interactions": &known,
    });
    meditrack_db::repositories::alert::create_alert(&state.db_pool, &user_id, result)
        .await
        .map_err(MedError::Database)?;

    info!("Completed interaction analysis for user {}", user_id);

    Ok(Json(AnalyzeResponse {
        analysis_result: analysis_text,
        has_interactions: known.interaction,
        medication_count: medications.len(),
    }))
}

#[axum::debug_handler]
pub async fn list_alerts(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<AlertQuery>,
) -> Result<Json<Vec<AlertResponse>>, AppError> {
    let alerts =
        meditrack_db::repositories::alert::get_alerts_by_user_id(&state.db_pool, &query.user_id)
            .await
            .map_err(MedError::Database)?;

    Ok(Json(
        alerts
            .into_iter()
            .map(|alert| AlertResponse {
                id: alert.id,
                user_id: alert.user_id,
                alert_time: alert.alert_time,
                result: alert.result,
            })
            .collect(),
    ))
}
