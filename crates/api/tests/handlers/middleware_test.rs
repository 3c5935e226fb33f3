use axum::{http::StatusCode, response::IntoResponse};
use pretty_assertions::assert_eq;

use meditrack_ai::AiError;
use meditrack_api::middleware::error_handling::AppError;
use meditrack_core::errors::MedError;

#[test]
fn test_not_found_maps_to_404() {
    let response = AppError(MedError::NotFound("missing".to_string())).into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_validation_maps_to_400() {
    let response = AppError(MedError::Validation("bad input".to_string())).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_ai_unavailable_maps_to_503() {
    let response = AppError(MedError::AiUnavailable("timeout".to_string())).into_response();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[test]
fn test_ai_response_maps_to_502() {
    let response = AppError(MedError::AiResponse("bad shape".to_string())).into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[test]
fn test_database_maps_to_500() {
    let response = AppError(MedError::Database(eyre::eyre!("boom"))).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_ai_network_error_converts_to_unavailable() {
    let app_error: AppError = AiError::Network("connection refused".to_string()).into();
    assert!(matches!(app_error.0, MedError::AiUnavailable(_)));
}

#[test]
fn test_ai_api_error_converts_to_unavailable() {
    let app_error: AppError = AiError::Api {
        status: 500,
        message: "server error".to_string(),
    }
    .into();
    assert!(matches!(app_error.0, MedError::AiUnavailable(_)));
}

#[test]
fn test_ai_malformed_response_converts_to_parsing_failure() {
    let app_error: AppError = AiError::MalformedResponse("no text part".to_string()).into();
    assert!(matches!(app_error.0, MedError::AiResponse(_)));
}

#[test]
fn test_eyre_report_converts_to_database_error() {
    let app_error: AppError = eyre::eyre!("pool exhausted").into();
    assert!(matches!(app_error.0, MedError::Database(_)));
}
