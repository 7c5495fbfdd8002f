//! Request handlers for the movie resource.
//!
//! Handlers delegate to the catalog in `cinelist_store` and map domain
//! errors via [`crate::error::AppError`].

pub mod movies;
