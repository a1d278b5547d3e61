use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::{ErrorBody, GENERIC_SERVER_ERROR};
use crate::state::AppState;

/// Replace the body of every 5xx response with a fixed message in production.
///
/// Sits outside panic recovery, so panics and handler errors are masked alike.
/// Outside production the response passes through untouched.
pub async fn mask_server_errors(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() && state.config.environment.is_production() {
        return ErrorBody::response(status, GENERIC_SERVER_ERROR);
    }
    response
}

/// Give the timeout layer's bare `408` the standard JSON error body.
pub async fn json_timeout_body(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        return ErrorBody::response(StatusCode::REQUEST_TIMEOUT, "Request Timeout");
    }
    response
}
