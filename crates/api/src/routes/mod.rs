pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies          list (?genre=Name), create
/// /movies/{id}     get, patch, delete, options (preflight)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/movies", movies::router())
}
