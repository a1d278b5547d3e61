//! Watchlist entry constants, enums, validators, and partial-update rules.
//!
//! Media type and watch status are closed sets. Both are stored as TEXT in
//! the `movies` table and cross the wire as their snake_case names.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::ValidationError;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Media type constants
// ---------------------------------------------------------------------------

pub const MEDIA_TYPE_MOVIE: &str = "movie";
pub const MEDIA_TYPE_TV_SERIES: &str = "tv_series";
pub const MEDIA_TYPE_DOCUMENTARY: &str = "documentary";
pub const MEDIA_TYPE_ANIME: &str = "anime";

/// All valid media types.
pub const VALID_MEDIA_TYPES: &[&str] = &[
    MEDIA_TYPE_MOVIE,
    MEDIA_TYPE_TV_SERIES,
    MEDIA_TYPE_DOCUMENTARY,
    MEDIA_TYPE_ANIME,
];

// ---------------------------------------------------------------------------
// Watch status constants
// ---------------------------------------------------------------------------

pub const WATCH_STATUS_WANT_TO_WATCH: &str = "want_to_watch";
pub const WATCH_STATUS_WATCHING: &str = "watching";
pub const WATCH_STATUS_COMPLETED: &str = "completed";
pub const WATCH_STATUS_DROPPED: &str = "dropped";

/// All valid watch statuses.
pub const VALID_WATCH_STATUSES: &[&str] = &[
    WATCH_STATUS_WANT_TO_WATCH,
    WATCH_STATUS_WATCHING,
    WATCH_STATUS_COMPLETED,
    WATCH_STATUS_DROPPED,
];

// ---------------------------------------------------------------------------
// Rating bounds
// ---------------------------------------------------------------------------

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Kind of title being tracked.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    #[default]
    Movie,
    TvSeries,
    Documentary,
    Anime,
}

impl MediaType {
    pub const ALL: [Self; 4] = [Self::Movie, Self::TvSeries, Self::Documentary, Self::Anime];

    /// Return the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => MEDIA_TYPE_MOVIE,
            Self::TvSeries => MEDIA_TYPE_TV_SERIES,
            Self::Documentary => MEDIA_TYPE_DOCUMENTARY,
            Self::Anime => MEDIA_TYPE_ANIME,
        }
    }
}

impl FromStr for MediaType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            MEDIA_TYPE_MOVIE => Ok(Self::Movie),
            MEDIA_TYPE_TV_SERIES => Ok(Self::TvSeries),
            MEDIA_TYPE_DOCUMENTARY => Ok(Self::Documentary),
            MEDIA_TYPE_ANIME => Ok(Self::Anime),
            other => Err(CoreError::Validation(format!(
                "Unknown media type: '{other}'. Valid types: {}",
                VALID_MEDIA_TYPES.join(", ")
            ))),
        }
    }
}

impl TryFrom<String> for MediaType {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the user is with a title. Any status may move to any other.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum WatchStatus {
    #[default]
    WantToWatch,
    Watching,
    Completed,
    Dropped,
}

impl WatchStatus {
    pub const ALL: [Self; 4] = [
        Self::WantToWatch,
        Self::Watching,
        Self::Completed,
        Self::Dropped,
    ];

    /// Return the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WantToWatch => WATCH_STATUS_WANT_TO_WATCH,
            Self::Watching => WATCH_STATUS_WATCHING,
            Self::Completed => WATCH_STATUS_COMPLETED,
            Self::Dropped => WATCH_STATUS_DROPPED,
        }
    }
}

impl FromStr for WatchStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            WATCH_STATUS_WANT_TO_WATCH => Ok(Self::WantToWatch),
            WATCH_STATUS_WATCHING => Ok(Self::Watching),
            WATCH_STATUS_COMPLETED => Ok(Self::Completed),
            WATCH_STATUS_DROPPED => Ok(Self::Dropped),
            other => Err(CoreError::Validation(format!(
                "Unknown watch status: '{other}'. Valid statuses: {}",
                VALID_WATCH_STATUSES.join(", ")
            ))),
        }
    }
}

impl TryFrom<String> for WatchStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Field validators
// ---------------------------------------------------------------------------
//
// Signatures follow the `validator` crate's `custom` hook so request DTOs can
// reference them from `#[validate(custom(function = ...))]`.

fn invalid(code: &'static str, message: String) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Owned(message));
    err
}

/// Media type must be one of [`VALID_MEDIA_TYPES`].
pub fn validate_media_type(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<MediaType>()
        .map(|_| ())
        .map_err(|_| invalid("one_of", format!("must be one of: {}", VALID_MEDIA_TYPES.join(", "))))
}

/// Like [`validate_media_type`], but an empty string means "not provided".
pub fn validate_media_type_if_set(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    validate_media_type(value)
}

/// Watch status must be one of [`VALID_WATCH_STATUSES`]; empty means "not provided".
pub fn validate_watch_status_if_set(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    value.parse::<WatchStatus>().map(|_| ()).map_err(|_| {
        invalid(
            "one_of",
            format!("must be one of: {}", VALID_WATCH_STATUSES.join(", ")),
        )
    })
}

/// Rating must be within `MIN_RATING..=MAX_RATING`; zero means "not provided".
pub fn validate_rating_if_set(value: i32) -> Result<(), ValidationError> {
    if value == 0 || (MIN_RATING..=MAX_RATING).contains(&value) {
        return Ok(());
    }
    Err(invalid(
        "range",
        format!("must be between {MIN_RATING} and {MAX_RATING}, got {value}"),
    ))
}

// ---------------------------------------------------------------------------
// Partial-update rules
// ---------------------------------------------------------------------------
//
// A field in a create or update request only counts as provided when it is a
// non-empty string or a positive integer. Zero values cannot clear a stored
// value.

/// Keep a string only when it is non-empty.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Keep an integer only when it is strictly positive.
pub fn positive(value: Option<i32>) -> Option<i32> {
    value.filter(|v| *v > 0)
}
