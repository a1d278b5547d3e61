//! HTTP-level integration tests for the `/movies` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create_movie, delete, expect_error, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_movie_returns_201_with_defaults(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/movies",
        json!({"title": "Inception", "media_type": "movie"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let data = &json["data"];
    assert!(data["id"].as_i64().unwrap() > 0);
    assert_eq!(data["title"], "Inception");
    assert_eq!(data["media_type"], "movie");
    assert_eq!(data["watch_status"], "want_to_watch");
    assert_eq!(data["created_at"], data["updated_at"]);
    assert!(data.get("watched_at").is_none());
    assert!(data.get("rating").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_optional_fields(pool: PgPool) {
    let data = create_movie(
        &pool,
        json!({
            "title": "Planet Earth",
            "media_type": "documentary",
            "description": "Nature series",
            "genre": "Nature",
            "release_year": 2006,
            "poster_url": "https://img.example/pe.jpg"
        }),
    )
    .await;

    assert_eq!(data["media_type"], "documentary");
    assert_eq!(data["genre"], "Nature");
    assert_eq!(data["release_year"], 2006);
    assert_eq!(data["poster_url"], "https://img.example/pe.jpg");
    assert_eq!(data["description"], "Nature series");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_invalid_media_type_returns_400_and_persists_nothing(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/movies",
        json!({"title": "Serial", "media_type": "podcast"}),
    )
    .await;
    let message = expect_error(response, StatusCode::BAD_REQUEST).await;
    assert!(message.starts_with("Invalid input: "), "got: {message}");
    assert!(message.contains("media_type"), "got: {message}");

    let app = build_test_app(pool);
    let json = body_json(get(app, "/api/v1/movies").await).await;
    assert_eq!(json["count"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_ignores_watch_status_in_body(pool: PgPool) {
    let data = create_movie(
        &pool,
        json!({"title": "Up", "media_type": "movie", "watch_status": "completed", "rating": 5}),
    )
    .await;
    assert_eq!(data["watch_status"], "want_to_watch");
    assert!(data.get("rating").is_none());
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_movie_by_id(pool: PgPool) {
    let created = create_movie(&pool, json!({"title": "Get Me", "media_type": "anime"})).await;
    let id = created["id"].as_i64().unwrap();

    let app = build_test_app(pool);
    let response = get(app, &format!("/api/v1/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Get Me");
    assert_eq!(json["data"]["media_type"], "anime");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_movie_returns_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/movies/999999").await;
    let message = expect_error(response, StatusCode::NOT_FOUND).await;
    assert_eq!(message, "Movie with id 999999 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_filters_by_status_newest_first(pool: PgPool) {
    let older = create_movie(&pool, json!({"title": "Older", "media_type": "movie"})).await;
    create_movie(&pool, json!({"title": "Untouched", "media_type": "movie"})).await;
    let newer = create_movie(&pool, json!({"title": "Newer", "media_type": "tv_series"})).await;

    for movie in [&older, &newer] {
        let id = movie["id"].as_i64().unwrap();
        let response = put_json(
            build_test_app(pool.clone()),
            &format!("/api/v1/movies/{id}"),
            json!({"watch_status": "watching"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let app = build_test_app(pool);
    let response = get(app, "/api/v1/movies?status=watching").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["count"], 2);
    let titles: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Newer", "Older"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_filters_by_genre_and_media_type(pool: PgPool) {
    create_movie(&pool, json!({"title": "Alien", "media_type": "movie", "genre": "Horror"})).await;
    create_movie(&pool, json!({"title": "Hannibal", "media_type": "tv_series", "genre": "Horror"})).await;
    create_movie(&pool, json!({"title": "Cars", "media_type": "movie", "genre": "Family"})).await;

    let app = build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/movies?genre=Horror&media_type=movie").await).await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["data"][0]["title"], "Alien");

    let app = build_test_app(pool);
    let json = body_json(get(app, "/api/v1/movies?genre=&status=&media_type=").await).await;
    assert_eq!(json["count"], 3);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_completed_sets_watched_at_and_dropped_keeps_it(pool: PgPool) {
    let created = create_movie(&pool, json!({"title": "Heat", "media_type": "movie"})).await;
    let uri = format!("/api/v1/movies/{}", created["id"]);

    let response = put_json(
        build_test_app(pool.clone()),
        &uri,
        json!({"watch_status": "completed"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let completed = body_json(response).await;
    let watched_at = completed["data"]["watched_at"].clone();
    assert!(watched_at.is_string(), "watched_at should be set");

    let response = put_json(
        build_test_app(pool),
        &uri,
        json!({"watch_status": "dropped"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let dropped = body_json(response).await;
    assert_eq!(dropped["data"]["watch_status"], "dropped");
    assert_eq!(dropped["data"]["watched_at"], watched_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_rating_six_is_rejected(pool: PgPool) {
    let created = create_movie(&pool, json!({"title": "Rated", "media_type": "movie"})).await;
    let uri = format!("/api/v1/movies/{}", created["id"]);

    let response = put_json(build_test_app(pool), &uri, json!({"rating": 6})).await;
    let message = expect_error(response, StatusCode::BAD_REQUEST).await;
    assert!(message.contains("rating"), "got: {message}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_rating_zero_is_ignored(pool: PgPool) {
    let created = create_movie(&pool, json!({"title": "Rated", "media_type": "movie"})).await;
    let uri = format!("/api/v1/movies/{}", created["id"]);

    let response = put_json(build_test_app(pool.clone()), &uri, json!({"rating": 4})).await;
    assert_eq!(body_json(response).await["data"]["rating"], 4);

    let response = put_json(build_test_app(pool), &uri, json!({"rating": 0})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["rating"], 4);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_empty_strings_do_not_clear(pool: PgPool) {
    let created = create_movie(
        &pool,
        json!({"title": "Keep", "media_type": "movie", "genre": "Drama"}),
    )
    .await;
    let uri = format!("/api/v1/movies/{}", created["id"]);

    let response = put_json(
        build_test_app(pool),
        &uri,
        json!({"title": "", "genre": "", "media_type": "", "review": "Great"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["title"], "Keep");
    assert_eq!(data["genre"], "Drama");
    assert_eq!(data["media_type"], "movie");
    assert_eq!(data["review"], "Great");
    assert_ne!(data["updated_at"], created["updated_at"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_invalid_watch_status_returns_400(pool: PgPool) {
    let created = create_movie(&pool, json!({"title": "Paused", "media_type": "movie"})).await;
    let uri = format!("/api/v1/movies/{}", created["id"]);

    let response = put_json(build_test_app(pool), &uri, json!({"watch_status": "paused"})).await;
    let message = expect_error(response, StatusCode::BAD_REQUEST).await;
    assert!(message.contains("watch_status"), "got: {message}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_nonexistent_movie_returns_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = put_json(app, "/api/v1/movies/999999", json!({"title": "Ghost"})).await;
    expect_error(response, StatusCode::NOT_FOUND).await;
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_twice_returns_200_then_404(pool: PgPool) {
    let created = create_movie(&pool, json!({"title": "Delete Me", "media_type": "movie"})).await;
    let uri = format!("/api/v1/movies/{}", created["id"]);

    let response = delete(build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Movie deleted successfully");

    let response = delete(build_test_app(pool.clone()), &uri).await;
    expect_error(response, StatusCode::NOT_FOUND).await;

    let response = get(build_test_app(pool), &uri).await;
    expect_error(response, StatusCode::NOT_FOUND).await;
}
