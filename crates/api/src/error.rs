use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cinelist_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and implements [`IntoResponse`] to
/// produce consistent JSON error responses. The wrapper exists because the
/// orphan rule forbids implementing `IntoResponse` on `CoreError` directly.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cinelist_core`.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    json!({
                        "error": format!("{entity} with id {id} not found"),
                        "code": "NOT_FOUND",
                    }),
                ),
                CoreError::Validation(issues) => (
                    StatusCode::BAD_REQUEST,
                    json!({
                        "error": "Validation failed",
                        "code": "VALIDATION_ERROR",
                        "issues": issues,
                    }),
                ),
            },
        };

        (status, axum::Json(body)).into_response()
    }
}
