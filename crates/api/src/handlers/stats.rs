//! Handlers for the `/stats` reports.
//!
//! A failed report query is logged and answered with an empty `200 OK`
//! body instead of an error response.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use watchlist_db::repositories::MovieRepo;

use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/stats/genres
pub async fn genres(State(state): State<AppState>) -> Response {
    match MovieRepo::list_genres(&state.pool).await {
        Ok(genres) => Json(DataResponse { data: genres }).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Failed to fetch genres");
            StatusCode::OK.into_response()
        }
    }
}

/// GET /api/v1/stats/watch
pub async fn watch(State(state): State<AppState>) -> Response {
    match MovieRepo::count_by_watch_status(&state.pool).await {
        Ok(counts) => Json(DataResponse { data: counts }).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Failed to fetch watch statistics");
            StatusCode::OK.into_response()
        }
    }
}
