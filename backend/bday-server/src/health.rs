use crate::AppState;

use bday_core::RecordStore;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Health check with component status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let (status, database) = match state.service.store().ping().await {
        Ok(()) => (StatusCode::OK, "operational"),
        Err(e) => {
            log::error!("Health check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    let health = json!({
        "status": if status == StatusCode::OK { "healthy" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": database,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe (can the store serve requests?)
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    match state.service.store().ping().await {
        Ok(()) => (StatusCode::OK, "Ready").into_response(),
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "Not ready").into_response(),
    }
}
