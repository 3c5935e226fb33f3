use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/medications",
            get(handlers::medications::list_medications),
        )
        .route(
            "/api/medications",
            post(handlers::medications::create_medications_batch),
        )
        .route(
            "/api/medications/:id",
            get(handlers::medications::get_medication),
        )
        .route(
            "/api/medications/:id",
            put(handlers::medications::update_medication),
        )
        .route(
            "/api/medications/:id",
            delete(handlers::medications::delete_medication),
        )
}
