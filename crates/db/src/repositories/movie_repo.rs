//! Repository for the `movies` table.

use sqlx::{FromRow, PgPool};
use watchlist_core::error::CoreError;
use watchlist_core::types::DbId;
use watchlist_core::watchlist::{non_empty, positive, WatchStatus};

use crate::models::movie::{CreateMovie, Movie, MovieFilter, UpdateMovie, WatchStatusCounts};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, genre, release_year, poster_url, media_type, \
    watch_status, rating, review, watched_at, created_at, updated_at";

/// An enum field outside its closed set, reported before any query runs.
fn unencodable(err: CoreError) -> sqlx::Error {
    sqlx::Error::Encode(Box::new(err))
}

/// One row of the per-status count query.
#[derive(FromRow)]
struct StatusCount {
    #[sqlx(try_from = "String")]
    watch_status: WatchStatus,
    count: i64,
}

/// Provides CRUD operations and reports for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row.
    ///
    /// `watch_status` takes its column default (`want_to_watch`). Both
    /// timestamps come from the same `NOW()`, so they are equal on insert.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let media_type = input.parsed_media_type().map_err(unencodable)?;
        let query = format!(
            "INSERT INTO movies (title, description, genre, release_year, poster_url, media_type)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(non_empty(input.description.as_deref()))
            .bind(non_empty(input.genre.as_deref()))
            .bind(positive(input.release_year))
            .bind(non_empty(input.poster_url.as_deref()))
            .bind(media_type.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find a movie by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List movies matching every non-empty filter, most recently created first.
    pub async fn list(pool: &PgPool, filter: &MovieFilter) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM movies
             WHERE ($1::TEXT IS NULL OR genre = $1)
               AND ($2::TEXT IS NULL OR watch_status = $2)
               AND ($3::TEXT IS NULL OR media_type = $3)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(non_empty(filter.genre.as_deref()))
            .bind(non_empty(filter.status.as_deref()))
            .bind(non_empty(filter.media_type.as_deref()))
            .fetch_all(pool)
            .await
    }

    /// Update a movie. Only non-empty strings and positive integers in
    /// `input` are applied.
    ///
    /// Setting `watch_status` to `completed` also stamps `watched_at`; moving
    /// to any other status leaves it as is. Returns `None` if no row with the
    /// given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let media_type = input.parsed_media_type().map_err(unencodable)?;
        let watch_status = input.parsed_watch_status().map_err(unencodable)?;
        let query = format!(
            "UPDATE movies SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                genre = COALESCE($4, genre),
                release_year = COALESCE($5, release_year),
                poster_url = COALESCE($6, poster_url),
                media_type = COALESCE($7, media_type),
                watch_status = COALESCE($8, watch_status),
                watched_at = CASE WHEN $11 THEN NOW() ELSE watched_at END,
                rating = COALESCE($9, rating),
                review = COALESCE($10, review),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(non_empty(input.title.as_deref()))
            .bind(non_empty(input.description.as_deref()))
            .bind(non_empty(input.genre.as_deref()))
            .bind(positive(input.release_year))
            .bind(non_empty(input.poster_url.as_deref()))
            .bind(media_type.map(|m| m.as_str()))
            .bind(watch_status.map(|w| w.as_str()))
            .bind(positive(input.rating))
            .bind(non_empty(input.review.as_deref()))
            .bind(watch_status == Some(WatchStatus::Completed))
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a movie by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Distinct genres in use, sorted. Movies without a genre show up as `""`.
    pub async fn list_genres(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT COALESCE(genre, '') FROM movies ORDER BY 1",
        )
        .fetch_all(pool)
        .await
    }

    /// Count movies per watch status. Statuses with no movies report 0.
    pub async fn count_by_watch_status(pool: &PgPool) -> Result<WatchStatusCounts, sqlx::Error> {
        let rows = sqlx::query_as::<_, StatusCount>(
            "SELECT watch_status, COUNT(*) AS count FROM movies GROUP BY watch_status",
        )
        .fetch_all(pool)
        .await?;

        let mut counts: WatchStatusCounts = WatchStatus::ALL.into_iter().map(|s| (s, 0)).collect();
        for row in rows {
            counts.insert(row.watch_status, row.count);
        }
        Ok(counts)
    }
}
