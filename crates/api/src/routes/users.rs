use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/users", get(handlers::users::get_user))
        .route("/api/users", post(handlers::users::create_user))
        .route("/api/users", put(handlers::users::update_user))
}
