//! Shared helpers for HTTP-level integration tests.
//!
//! Requests are sent straight to the router via `tower::ServiceExt::oneshot`,
//! so no TCP listener is involved.

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

use cinelist_api::config::ServerConfig;
use cinelist_api::router::build_app_router;
use cinelist_api::state::AppState;
use cinelist_core::genre::Genre;
use cinelist_core::movie::Movie;
use cinelist_store::catalog::MovieCatalog;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:8080` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:8080".to_string()],
        movies_path: "data/movies.json".into(),
        request_timeout_secs: 30,
    }
}

/// Build the application router over an empty catalog.
pub fn build_test_app() -> Router {
    build_test_app_with(Vec::new())
}

/// Build the application router over a catalog seeded with `movies`.
///
/// Uses the production [`build_app_router`] so tests exercise the same
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery)
/// that the binary uses. The returned router is cheap to clone and all
/// clones share one catalog, so multi-request tests see each other's writes.
pub fn build_test_app_with(movies: Vec<Movie>) -> Router {
    let config = test_config();
    let state = AppState {
        catalog: Arc::new(MovieCatalog::with_movies(movies)),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Build a complete movie record for seeding test catalogs.
pub fn movie(id: &str, title: &str, year: i32, genre: Vec<Genre>) -> Movie {
    Movie {
        id: Uuid::parse_str(id).expect("test movie ID must be a valid UUID"),
        title: title.to_string(),
        year,
        director: "Test Director".to_string(),
        duration: 120,
        rating: 7.0,
        genre,
        poster: "https://example.com/poster.jpg".to_string(),
    }
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a PATCH request with a JSON body.
pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::PATCH)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a DELETE request.
pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Read a response body to completion and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
