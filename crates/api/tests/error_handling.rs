//! Tests for `AppError` -> HTTP response mapping.
//!
//! These tests verify that each error variant produces the correct HTTP
//! status code, error code, and body shape. They do NOT need an HTTP
//! server -- they call `IntoResponse` directly on `AppError` values.

use axum::response::IntoResponse;
use http_body_util::BodyExt;

use cinelist_api::error::AppError;
use cinelist_core::error::CoreError;
use cinelist_core::validate::FieldIssue;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (axum::http::StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404 with NOT_FOUND code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::movie_not_found(
        "dcdd0fbd-4ea9-439d-8dd2-98ea6e764b79",
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(
        json["error"],
        "Movie with id dcdd0fbd-4ea9-439d-8dd2-98ea6e764b79 not found"
    );
}

// ---------------------------------------------------------------------------
// Test: CoreError::Validation maps to 400 with VALIDATION_ERROR code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400_with_issue_list() {
    let err = AppError::Core(CoreError::Validation(vec![
        FieldIssue {
            field: "title".to_string(),
            message: "title is required".to_string(),
        },
        FieldIssue {
            field: "rating".to_string(),
            message: "rating must be between 0 and 10".to_string(),
        },
    ]));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Validation failed");

    let issues = json["issues"].as_array().unwrap();
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0]["field"], "title");
    assert_eq!(issues[0]["message"], "title is required");
    assert_eq!(issues[1]["field"], "rating");
}

// ---------------------------------------------------------------------------
// Test: every error body carries both "error" and "code" fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn error_bodies_always_carry_error_and_code() {
    let samples = vec![
        AppError::Core(CoreError::movie_not_found("x")),
        AppError::Core(CoreError::Validation(vec![FieldIssue {
            field: "body".to_string(),
            message: "Request body must be a JSON object".to_string(),
        }])),
    ];

    for err in samples {
        let (_, json) = error_to_response(err).await;
        assert!(json["error"].is_string(), "missing 'error' in {json}");
        assert!(json["code"].is_string(), "missing 'code' in {json}");
    }
}
