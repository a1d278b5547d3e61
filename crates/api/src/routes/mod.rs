pub mod health;
pub mod movies;
pub mod stats;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /movies             list, create
/// /movies/{id}        get, update, delete
/// /stats/genres       distinct genres
/// /stats/watch        counts per watch status
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/movies", movies::router())
        .nest("/stats", stats::router())
}
