use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use todo_core::error::CoreError;

/// Message sent for every 500, whatever the cause.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `todo_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message. Current handlers report
    /// bad input through `CoreError::Validation`; this is for checks that
    /// have no field to point at.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No route matches the request path.
    #[error("Not Found - {0}")]
    RouteNotFound(String),

    /// An internal error with a human-readable message (never sent to clients
    /// in production). No handler raises it today; panics take the same
    /// response path through `handle_panic`.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Internal error detail attached to 500 responses as an extension.
///
/// The `expose_error_detail` middleware copies it into the body outside
/// production.
#[derive(Debug, Clone)]
pub struct ErrorDetail(pub String);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, id = %id, "Entity not found");
                    (StatusCode::NOT_FOUND, "NOT_FOUND", core.to_string())
                }
                CoreError::Validation(fields) => {
                    let body = json!({
                        "message": "Validation failed",
                        "code": "VALIDATION_ERROR",
                        "errors": fields,
                    });
                    return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
                }
                CoreError::Conflict(msg) => (StatusCode::BAD_REQUEST, "CONFLICT", msg.clone()),
                CoreError::BusinessRule(msg) => {
                    (StatusCode::BAD_REQUEST, "BUSINESS_RULE", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    return internal_error_response(None, Some(msg.clone()));
                }
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::RouteNotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND", self.to_string()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                return internal_error_response(None, Some(msg.clone()));
            }
        };

        let body = json!({
            "message": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Build a 500 response.
///
/// `stack` is written into the body as-is (`null` when `None`); `detail`, if
/// given, is attached as an [`ErrorDetail`] extension for later exposure.
pub fn internal_error_response(stack: Option<&str>, detail: Option<String>) -> Response {
    let body = json!({
        "message": INTERNAL_ERROR_MESSAGE,
        "code": "INTERNAL_ERROR",
        "stack": stack,
    });
    let mut response = (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response();
    if let Some(detail) = detail {
        response.extensions_mut().insert(ErrorDetail(detail));
    }
    response
}
