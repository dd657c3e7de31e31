use crate::services::metrics;
use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::{json, Value};
use service_core::error::AppError;

const SERVICE_NAME: &str = "promptgen-service";

/// Banner served at `/` when no frontend directory is configured.
pub async fn index() -> impl IntoResponse {
    Json(json!({
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "message": "Server is running"
    }))
}

/// Liveness probe. Does not touch the provider.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "provider": state.generator.provider().name()
    }))
}

/// Readiness probe: the text provider must answer its health check.
pub async fn readiness_check(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    state.generator.provider().health_check().await.map_err(|e| {
        tracing::warn!(error = %e, "Provider not ready");
        AppError::ServiceUnavailable
    })?;

    Ok(Json(json!({ "status": "ready" })))
}

pub async fn metrics() -> impl IntoResponse {
    metrics::get_metrics()
}
