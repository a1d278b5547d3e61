//! Movie (watchlist entry) model, request DTOs, and report shapes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use watchlist_core::error::CoreError;
use watchlist_core::types::{DbId, Timestamp};
use watchlist_core::watchlist::{
    non_empty, validate_media_type, validate_media_type_if_set, validate_rating_if_set,
    validate_watch_status_if_set, MediaType, WatchStatus,
};

/// A row from the `movies` table.
///
/// Optional columns are left out of the JSON output when unset.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    #[sqlx(try_from = "String")]
    pub media_type: MediaType,
    #[sqlx(try_from = "String")]
    pub watch_status: WatchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watched_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new movie.
///
/// `title` and `media_type` are required. The optional strings are only
/// stored when non-empty and `release_year` only when positive.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateMovie {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub release_year: Option<i32>,
    pub poster_url: Option<String>,
    #[validate(custom(function = "validate_media_type"))]
    pub media_type: String,
}

impl CreateMovie {
    /// The requested media type as its enum variant.
    pub fn parsed_media_type(&self) -> Result<MediaType, CoreError> {
        self.media_type.parse()
    }
}

/// DTO for updating an existing movie. All fields are optional.
///
/// Empty strings and zero integers count as "not provided", so a stored
/// value can be overwritten but never cleared through this DTO.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub release_year: Option<i32>,
    pub poster_url: Option<String>,
    #[validate(custom(function = "validate_media_type_if_set"))]
    pub media_type: Option<String>,
    #[validate(custom(function = "validate_watch_status_if_set"))]
    pub watch_status: Option<String>,
    #[validate(custom(function = "validate_rating_if_set"))]
    pub rating: Option<i32>,
    pub review: Option<String>,
}

impl UpdateMovie {
    /// The new media type, or `None` when absent or empty.
    pub fn parsed_media_type(&self) -> Result<Option<MediaType>, CoreError> {
        non_empty(self.media_type.as_deref())
            .map(str::parse::<MediaType>)
            .transpose()
    }

    /// The new watch status, or `None` when absent or empty.
    pub fn parsed_watch_status(&self) -> Result<Option<WatchStatus>, CoreError> {
        non_empty(self.watch_status.as_deref())
            .map(str::parse::<WatchStatus>)
            .transpose()
    }
}

/// Filters for listing movies (`?genre=&status=&media_type=`).
///
/// Empty values are ignored. Values are matched verbatim, so an unknown
/// status or media type yields an empty list rather than an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieFilter {
    pub genre: Option<String>,
    pub status: Option<String>,
    pub media_type: Option<String>,
}

/// Number of movies in each watch status. Always holds every status.
pub type WatchStatusCounts = BTreeMap<WatchStatus, i64>;
