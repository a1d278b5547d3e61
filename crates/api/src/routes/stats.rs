//! Route definitions for the `/stats` reports.

use axum::routing::get;
use axum::Router;

use crate::handlers::stats;
use crate::state::AppState;

/// Routes mounted at `/stats`.
///
/// ```text
/// GET /genres  -> genres
/// GET /watch   -> watch
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/genres", get(stats::genres))
        .route("/watch", get(stats::watch))
}
