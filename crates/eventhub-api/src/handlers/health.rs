//! Health check handler.

use axum::Json;
use axum::extract::State;

use eventhub_store::EntityStore;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let store_healthy = match state.store.health_check().await {
        Ok(healthy) => healthy,
        Err(e) => {
            tracing::warn!(error = %e, "Store health check failed");
            false
        }
    };

    Json(ApiResponse::ok(
        "Service is running.",
        HealthResponse {
            status: if store_healthy { "ok" } else { "degraded" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            store: state.store.name().to_string(),
            store_healthy,
        },
    ))
}
