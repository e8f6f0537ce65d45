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
    /// Number of categories currently held.
    pub categories: usize,
    /// Number of todos currently held.
    pub todos: usize,
}

/// GET /health -- returns service status and store sizes.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let stats = state.store.stats().await;

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        categories: stats.categories,
        todos: stats.todos,
    })
}

/// Mount health check routes (root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .method_not_allowed_fallback(super::route_not_found)
}
