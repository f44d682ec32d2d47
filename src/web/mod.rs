pub mod health_handlers;
pub mod stats_handlers;

pub use health_handlers::*;
pub use stats_handlers::*;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(liveness_handler))
        .route("/ready", get(readiness_handler))
        .route("/api/leetcode", post(leetcode_stats_handler))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any).allow_methods(Any))
}
