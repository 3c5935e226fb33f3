use axum::{
    Router,
    routing::{delete, get, put},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/profiles/:user_id", get(handlers::profiles::get_profile))
        .route(
            "/api/profiles/:user_id",
            put(handlers::profiles::update_profile),
        )
        .route(
            "/api/profiles/:user_id",
            delete(handlers::profiles::delete_profile),
        )
}
