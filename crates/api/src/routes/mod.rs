pub mod categories;
pub mod health;
pub mod todos;

use axum::extract::OriginalUri;
use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /todos                      list (filter/sort), create
/// /todos/{id}                 get, update, delete
///
/// /categories                 list, create
/// /categories/{id}            get, rename, delete (refused while referenced)
/// /categories/{id}/todos      todos in the category
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/todos", todos::router())
        .nest("/categories", categories::router())
}

/// Fallback for unmatched paths: 404 `Not Found - <path>`.
pub async fn route_not_found(OriginalUri(uri): OriginalUri) -> AppError {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    AppError::RouteNotFound(path)
}
