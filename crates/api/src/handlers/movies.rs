//! Handlers for the `/movies` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use watchlist_core::error::CoreError;
use watchlist_db::models::movie::{CreateMovie, Movie, MovieFilter, UpdateMovie};
use watchlist_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::extract::{ApiQuery, EntityId, ValidatedJson};
use crate::response::{DataResponse, ListResponse, MessageResponse};
use crate::state::AppState;

const ENTITY: &str = "Movie";

/// GET /api/v1/movies?genre=&status=&media_type=
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<MovieFilter>,
) -> AppResult<Json<ListResponse<Movie>>> {
    let movies = MovieRepo::list(&state.pool, &filter)
        .await
        .map_err(AppError::storage("Failed to fetch movies"))?;
    Ok(Json(movies.into()))
}

/// GET /api/v1/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<DataResponse<Movie>>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await
        .map_err(AppError::storage("Failed to fetch movie"))?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    Ok(Json(DataResponse { data: movie }))
}

/// POST /api/v1/movies
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateMovie>,
) -> AppResult<(StatusCode, Json<DataResponse<Movie>>)> {
    let movie = MovieRepo::create(&state.pool, &input)
        .await
        .map_err(AppError::storage("Failed to create movie"))?;

    tracing::info!(
        movie_id = movie.id,
        title = %movie.title,
        media_type = %movie.media_type,
        "Movie created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: movie })))
}

/// PUT /api/v1/movies/{id}
///
/// Partial update: empty strings and zero numbers leave the stored value alone.
pub async fn update(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(input): ValidatedJson<UpdateMovie>,
) -> AppResult<Json<DataResponse<Movie>>> {
    let movie = MovieRepo::update(&state.pool, id, &input)
        .await
        .map_err(AppError::storage("Failed to update movie"))?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;

    tracing::info!(
        movie_id = movie.id,
        watch_status = %movie.watch_status,
        "Movie updated",
    );

    Ok(Json(DataResponse { data: movie }))
}

/// DELETE /api/v1/movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<MessageResponse>> {
    let deleted = MovieRepo::delete(&state.pool, id)
        .await
        .map_err(AppError::storage("Failed to delete movie"))?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: ENTITY, id }));
    }

    tracing::info!(movie_id = id, "Movie deleted");

    Ok(Json(MessageResponse {
        message: "Movie deleted successfully",
    }))
}
