pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/match/compare", post(handlers::handle_compare))
        .route("/api/v1/match/keywords", post(handlers::handle_keywords))
        .route("/api/v1/match/analyze", post(handlers::handle_analyze))
        .with_state(state)
}
