//! Handlers for the `/movies` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use cinelist_core::error::CoreError;
use cinelist_core::movie::Movie;
use cinelist_core::types::MovieId;
use cinelist_core::validate;

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters accepted by the movie list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Case-insensitive genre name to filter the listing by.
    pub genre: Option<String>,
}

/// Parse a path segment as a movie ID.
///
/// A malformed ID cannot match any record, so callers treat it exactly like
/// a well-formed ID that is not in the catalog.
fn parse_movie_id(raw: &str) -> Option<MovieId> {
    Uuid::parse_str(raw).ok()
}

/// GET /movies
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<Vec<Movie>> {
    let movies = match params.genre.as_deref() {
        // An empty `?genre=` is treated as no filter at all.
        Some(genre) if !genre.is_empty() => state.catalog.list_by_genre(genre).await,
        _ => state.catalog.list().await,
    };
    tracing::debug!(count = movies.len(), "Listed movies");
    Json(movies)
}

/// GET /movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Movie>> {
    let movie = match parse_movie_id(&id) {
        Some(movie_id) => state.catalog.find(movie_id).await,
        None => None,
    };
    match movie {
        Some(movie) => Ok(Json(movie)),
        None => Err(CoreError::movie_not_found(id).into()),
    }
}

/// POST /movies
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    let new = validate::validate_new_movie(&body).map_err(CoreError::Validation)?;
    let movie = state.catalog.insert(new).await;
    tracing::info!(id = %movie.id, title = %movie.title, "Movie created");
    Ok((StatusCode::CREATED, Json(movie)))
}

/// PATCH /movies/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> AppResult<Json<Movie>> {
    // Body validation runs first: a bad body wins over an unknown ID.
    let patch = validate::validate_movie_patch(&body).map_err(CoreError::Validation)?;

    let updated = match parse_movie_id(&id) {
        Some(movie_id) => state.catalog.update(movie_id, patch).await,
        None => None,
    };
    match updated {
        Some(movie) => {
            tracing::info!(id = %movie.id, "Movie updated");
            Ok(Json(movie))
        }
        None => Err(CoreError::movie_not_found(id).into()),
    }
}

/// DELETE /movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let removed = match parse_movie_id(&id) {
        Some(movie_id) => state.catalog.remove(movie_id).await,
        None => false,
    };
    if removed {
        tracing::info!(id = %id, "Movie deleted");
        Ok(Json(json!({ "message": "Movie deleted" })))
    } else {
        Err(CoreError::movie_not_found(id).into())
    }
}

/// OPTIONS /movies/{id}
///
/// The CORS layer answers real preflights before they reach the router;
/// this route keeps plain OPTIONS requests from surfacing as 405.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
