use std::error::Error;

use meditrack_core::errors::{MedError, MedResult};

#[test]
fn test_med_error_display() {
    let not_found = MedError::NotFound("Medication not found".to_string());
    let validation = MedError::Validation("Missing user_id".to_string());
    let ai_unavailable = MedError::AiUnavailable("connection timed out".to_string());
    let ai_response = MedError::AiResponse("could not extract analysis text".to_string());
    let database = MedError::Database(eyre::eyre!("Database connection failed"));
    let internal = MedError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    assert_eq!(
        not_found.to_string(),
        "Resource not found: Medication not found"
    );
    assert_eq!(validation.to_string(), "Validation error: Missing user_id");
    assert_eq!(
        ai_unavailable.to_string(),
        "AI service unavailable: connection timed out"
    );
    assert_eq!(
        ai_response.to_string(),
        "AI response error: could not extract analysis text"
    );
    assert!(database.to_string().contains("Database error:"));
    assert!(internal.to_string().contains("Internal server error:"));
}

#[test]
fn test_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let med_error = MedError::Internal(Box::new(io_error));

    assert!(med_error.source().is_some());
}

#[test]
fn test_med_result() {
    let result: MedResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: MedResult<i32> = Err(MedError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_from_eyre_report() {
    let eyre_error = eyre::eyre!("Database error");
    let med_error: MedError = eyre_error.into();

    assert!(med_error.to_string().contains("Database error"));
}

#[test]
fn test_box_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let boxed_error: Box<dyn Error + Send + Sync> = Box::new(io_error);
    let med_error = MedError::Internal(boxed_error);

    assert!(med_error.to_string().contains("IO error"));
}
