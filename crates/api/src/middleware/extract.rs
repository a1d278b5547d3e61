use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;
use watchlist_core::types::DbId;

use crate::error::AppError;

pub const INVALID_ID: &str = "Invalid ID";
pub const MALFORMED_BODY: &str = "Malformed request body";
pub const INVALID_QUERY: &str = "Invalid query parameters";

/// The `{id}` path segment of a single-resource route.
///
/// ```ignore
/// async fn get_by_id(EntityId(id): EntityId) -> AppResult<Json<()>> { ... }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EntityId(pub DbId);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest(INVALID_ID.into()))?;
        raw.parse::<DbId>()
            .map(EntityId)
            .map_err(|_| AppError::BadRequest(INVALID_ID.into()))
    }
}

/// A JSON request body that has passed its `validator` rules.
///
/// A body that cannot be parsed rejects with [`MALFORMED_BODY`]; a parsed
/// body that breaks a rule rejects with `"Invalid input: <details>"`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(%rejection, "Rejected request body");
                AppError::BadRequest(MALFORMED_BODY.into())
            })?;
        value
            .validate()
            .map_err(|errors| AppError::BadRequest(format!("Invalid input: {errors}")))?;
        Ok(ValidatedJson(value))
    }
}

/// Query-string parameters deserialized into `T`.
#[derive(Debug, Clone)]
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(%rejection, "Rejected query string");
                AppError::BadRequest(INVALID_QUERY.into())
            })?;
        Ok(ApiQuery(value))
    }
}
