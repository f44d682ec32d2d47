use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};
use tracing::error;

use crate::AppState;

pub async fn liveness_handler() -> Json<Value> {
    // if this handler runs, the service is alive
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn readiness_handler(
    State(app_state): State<AppState>,
) -> StatusCode {
    match app_state.store.health_check().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            error!("Store health check failed: {}", e);
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
