//! Route definitions for the `/movies` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET     /        -> list (supports ?genre=Name)
/// POST    /        -> create
/// GET     /{id}    -> get_by_id
/// PATCH   /{id}    -> update
/// DELETE  /{id}    -> delete
/// OPTIONS /{id}    -> preflight
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::list).post(movies::create))
        .route(
            "/{id}",
            get(movies::get_by_id)
                .patch(movies::update)
                .delete(movies::delete)
                .options(movies::preflight),
        )
}
