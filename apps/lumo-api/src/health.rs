//! Service health endpoints.
//!
//! `/livez` answers as soon as the process is up; `/health` also pings the
//! database so load balancers can tell "running" from "usable".

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Health report returned by `GET /health`.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Overall status: "healthy" or "degraded".
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Seconds since process start.
    pub uptime_seconds: u64,
    /// Whether the database answered `SELECT 1`.
    pub database: bool,
}

/// Handle `GET /health`.
///
/// Answers 200 with `status: "healthy"` when the database responds, 503
/// with `status: "degraded"` when it does not.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service and database healthy", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse),
    ),
    tag = "Health"
)]
pub async fn health_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let database = sqlx::query("SELECT 1").execute(&state.db).await.is_ok();

    let (status_code, status) = if database {
        (StatusCode::OK, "healthy")
    } else {
        tracing::warn!("Health check: database unreachable");
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    let response = HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        database,
    };

    (status_code, Json(response))
}

/// Handle `GET /livez`.
///
/// Pure liveness: answers as long as the process can serve requests.
#[utoipa::path(
    get,
    path = "/livez",
    responses((status = 200, description = "Process is alive")),
    tag = "Health"
)]
pub async fn livez_handler() -> &'static str {
    "ok"
}
