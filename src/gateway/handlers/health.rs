//! Health check handlers

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use utoipa::ToSchema;

use super::super::state::AppState;
use super::super::types::ErrorResponse;

/// Build identifier embedded by `build.rs`
pub const VERSION: &str = env!("GIT_HASH");

/// Health check response data
#[derive(serde::Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    /// Short git hash of the running build
    #[schema(example = "a1b2c3d")]
    pub version: String,
}

/// Health check endpoint
///
/// Pings PostgreSQL. Does not expose the failure reason to the caller.
///
/// - Healthy: 200 OK + {status: "ok", version}
/// - Unhealthy: 503 Service Unavailable + {error: "unavailable"}
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse, content_type = "application/json"),
        (status = 503, description = "Database unreachable", body = ErrorResponse)
    ),
    tag = "System"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.db.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".to_string(),
                version: VERSION.to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("[HEALTH] PostgreSQL ping failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse {
                    error: "unavailable".to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Liveness probe on `/`
pub async fn root() -> &'static str {
    "Backend is alive"
}
