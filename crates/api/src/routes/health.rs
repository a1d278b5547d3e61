use axum::{routing::get, Router};

use crate::handlers::health::health_check;
use crate::state::AppState;

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
