use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/reminders", get(handlers::reminders::list_reminders))
        .route("/api/reminders", post(handlers::reminders::create_reminder))
        .route(
            "/api/reminders/:id",
            put(handlers::reminders::update_reminder),
        )
        .route(
            "/api/reminders/:id",
            delete(handlers::reminders::delete_reminder),
        )
}
