//! Domain types and validation rules for the watchlist service.
//!
//! Nothing in this crate touches the database or HTTP; the `db` and `api`
//! crates build on these types.

pub mod error;
pub mod types;
pub mod watchlist;
