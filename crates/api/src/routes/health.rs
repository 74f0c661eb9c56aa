use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::config::StoreBackend;
use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Overall service status.
    #[schema(value_type = String, example = "ok")]
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    #[schema(value_type = String)]
    pub version: &'static str,
    /// Configured store implementation.
    pub store_backend: StoreBackend,
    /// Whether the backing store answered its probe.
    pub store_healthy: bool,
}

/// GET /health -- returns service and store health.
#[utoipa::path(get, path = "/health", tag = "System",
    summary = "Service health",
    responses(
        (status = 200, description = "Service and store health", body = HealthResponse),
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_healthy = match state.store.health_check().await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Store health check failed");
            false
        }
    };

    let status = if store_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        store_backend: state.config.store_backend,
        store_healthy,
    })
}

/// Mount health check routes at the root.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
