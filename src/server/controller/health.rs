use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, health::HealthDto},
    server::state::AppState,
};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Liveness probe.
///
/// Answers as long as the process is serving requests.
#[utoipa::path(
    get,
    path = "/api/health/liveness",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Process is alive", body = HealthDto)
    ),
)]
pub async fn liveness() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthDto::ok()))
}

/// Readiness probe.
///
/// Pings the database.
///
/// # Returns
/// - `200 OK` - Database reachable
/// - `503 Service Unavailable` - Database ping failed
#[utoipa::path(
    get,
    path = "/api/health/readiness",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Ready to serve traffic", body = HealthDto),
        (status = 503, description = "Database unavailable", body = ErrorDto)
    ),
)]
pub async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.ping().await {
        Ok(()) => (StatusCode::OK, Json(HealthDto::ok())).into_response(),
        Err(e) => {
            tracing::warn!("Readiness check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorDto::new("Database unavailable")),
            )
                .into_response()
        }
    }
}
