//! Lookup-error-to-HTTP translation.
//!
//! This is the only place domain errors become status codes. Internal causes
//! are logged here and never serialized to clients.

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use storefront_core::LookupError;

pub fn lookup_error_to_response(err: LookupError) -> axum::response::Response {
    match err {
        LookupError::NotFound { kind, key } => {
            tracing::warn!(%kind, key, "resource not found");
            error_body(
                StatusCode::NOT_FOUND,
                "Resource not found",
                kind.not_found_message(&key),
            )
        }
        LookupError::BadRequest(msg) => {
            error_body(StatusCode::BAD_REQUEST, "Bad request", msg)
        }
        LookupError::Internal(cause) => {
            tracing::error!(cause = %cause, "unexpected error");
            error_body(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
                "An unexpected error occurred",
            )
        }
    }
}

pub fn error_body(
    status: StatusCode,
    error: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        Json(json!({
            "status": status.as_u16(),
            "error": error,
            "message": message.into(),
        })),
    )
        .into_response()
}
