//! Internal error detail exposure and panic recovery.
//!
//! 500 responses always carry `"stack": null`. Outside production the
//! [`expose_error_detail`] middleware rewrites them with the recorded
//! [`ErrorDetail`].

use std::any::Any;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::error::{internal_error_response, ErrorDetail};
use crate::state::AppState;

/// Fill in `stack` on 500 responses when not running in production.
pub async fn expose_error_detail(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;

    if state.config.environment.is_production() {
        return response;
    }
    let detail = response
        .extensions()
        .get::<ErrorDetail>()
        .map(|ErrorDetail(detail)| detail.clone());
    match detail {
        Some(detail) => internal_error_response(Some(&detail), None),
        None => response,
    }
}

/// Panic handler for `CatchPanicLayer`: a generic 500 with the panic
/// message recorded as error detail.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic payload".to_string()
    };

    tracing::error!(panic = %detail, "Handler panicked");
    internal_error_response(None, Some(detail))
}
