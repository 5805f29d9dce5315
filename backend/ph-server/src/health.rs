use crate::AppState;

use ph_db::UserRepository;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Health check with component status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let database = match UserRepository::new(state.pool.clone()).ping().await {
        Ok(()) => "operational",
        Err(e) => {
            log::warn!("Health check: database unavailable: {}", e);
            "unavailable"
        }
    };

    let uploads = if state.image_store.is_available().await {
        "operational"
    } else {
        "missing"
    };

    let healthy = database == "operational" && uploads == "operational";
    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let health = json!({
        "status": if healthy { "healthy" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": database,
            "uploads": uploads,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe (can we reach the record store?)
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    match UserRepository::new(state.pool.clone()).ping().await {
        Ok(()) => (StatusCode::OK, "Ready").into_response(),
        Err(e) => {
            log::warn!("Readiness check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Not ready").into_response()
        }
    }
}
