use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/alerts/analyze", post(handlers::alerts::analyze_interactions))
        .route("/api/alerts", get(handlers::alerts::list_alerts))
}
