use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Number of movies currently in the catalog.
    pub movies: usize,
}

/// GET /health -- returns service status and catalog size.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        movies: state.catalog.len().await,
    })
}

/// Mount health check routes (intended for root-level).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
