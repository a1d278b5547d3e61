use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Always `healthy` while the process is serving requests.
    pub status: &'static str,
    /// Current server time, RFC 3339.
    pub time: String,
}

/// GET /health -- liveness probe. Does not touch the database.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        time: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    })
}
