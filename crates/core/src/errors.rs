use thiserror::Error;

#[derive(Error, Debug)]
pub enum MedError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("AI service unavailable: {0}")]
    AiUnavailable(String),

    #[error("AI response error: {0}")]
    AiResponse(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type MedResult<T> = Result<T, MedError>;
