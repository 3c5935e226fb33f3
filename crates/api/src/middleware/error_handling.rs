//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the
//! MediTrack API. It maps domain-specific errors to appropriate HTTP
//! status codes and JSON error responses, ensuring a consistent error
//! handling experience across the entire API.
//!
//! The implementation is based on Axum's error handling mechanisms and
//! integrates with MediTrack's error taxonomy:
//!
//! - not-found and validation failures are client errors;
//! - AI transport failures surface as service-unavailable, AI shape
//!   failures as bad-gateway — never silently defaulted to success;
//! - database and unexpected internal failures are logged with context and
//!   reported generically.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use meditrack_ai::AiError;
use meditrack_core::errors::MedError;
use serde_json::json;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps domain-specific `MedError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub MedError);

/// Converts application errors to HTTP responses
///
/// Each error type maps to one HTTP status code; the message is rendered
/// into a `{"error": ...}` JSON body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            MedError::NotFound(_) => StatusCode::NOT_FOUND,
            MedError::Validation(_) => StatusCode::BAD_REQUEST,
            MedError::AiUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            MedError::AiResponse(_) => StatusCode::BAD_GATEWAY,
            MedError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            MedError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        }

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Automatic conversion from MedError to AppError
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, MedError>` in handler functions that return
/// `Result<T, AppError>`.
impl From<MedError> for AppError {
    fn from(err: MedError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError
///
/// Repository functions return `eyre::Result`; their failures are treated
/// as database errors at the HTTP boundary.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(MedError::Database(err))
    }
}

/// Automatic conversion from AI gateway errors to AppError
///
/// Transport and upstream-API failures map to the service-unavailable
/// variant; response-shape failures map to the parsing variant.
impl From<AiError> for AppError {
    fn from(err: AiError) -> Self {
        let med_error = match err {
            AiError::Network(msg) => MedError::AiUnavailable(msg),
            AiError::Api { status, message } => {
                MedError::AiUnavailable(format!("upstream status {}: {}", status, message))
            }
            AiError::MalformedResponse(msg) => MedError::AiResponse(msg),
            AiError::Configuration(msg) => MedError::Internal(msg.into()),
        };
        AppError(med_error)
    }
}
