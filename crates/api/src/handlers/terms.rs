use axum::Json;
use serde::Serialize;

/// Fixed disclaimer text returned by the terms endpoint.
const TERMS_TEXT: &str = "This system only provides medication records, reminders and reference \
                          information. Always consult a qualified medical professional before \
                          making any medication decision; all data is for reference only.";

#[derive(Debug, Serialize)]
pub struct TermsResponse {
    pub terms: String,
}

pub async fn get_terms() -> Json<TermsResponse> {
    Json(TermsResponse {
        terms: TERMS_TEXT.to_string(),
    })
}
