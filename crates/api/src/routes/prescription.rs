use axum::{Router, routing::post};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/api/prescription/recognize",
        post(handlers::prescription::recognize_prescription),
    )
}
