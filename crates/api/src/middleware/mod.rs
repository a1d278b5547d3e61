//! Request extractors and response middleware.
//!
//! - [`extract::EntityId`] -- Parses the `{id}` path segment as a [`DbId`](watchlist_core::types::DbId).
//! - [`extract::ValidatedJson`] -- Deserializes and validates a JSON body.
//! - [`extract::ApiQuery`] -- Deserializes the query string.
//! - [`error_mask::mask_server_errors`] -- Hides 5xx details in production.
//!
//! Every extractor rejects with [`AppError::BadRequest`](crate::error::AppError::BadRequest)
//! so malformed input always produces the standard JSON error body.

pub mod error_mask;
pub mod extract;
