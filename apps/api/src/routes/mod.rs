pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::jobs::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/jobs",
            post(handlers::handle_search_jobs).fallback(handlers::handle_method_not_allowed),
        )
        .with_state(state)
}
