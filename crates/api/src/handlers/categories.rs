//! Handlers for the category resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use todo_core::error::CoreError;
use todo_store::models::category::{CreateCategory, UpdateCategory};
use todo_store::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// GET /api/categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list(&state.store).await;

    Ok(Json(categories))
}

/// GET /api/categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryRepo::find_by_id(&state.store, &category_id)
        .await
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Category",
                id: category_id.clone(),
            })
        })?;

    Ok(Json(category))
}

/// GET /api/categories/{id}/todos
///
/// Todos filed under the category, in store order.
pub async fn list_category_todos(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let todos = CategoryRepo::list_todos(&state.store, &category_id).await?;

    Ok(Json(todos))
}

/// POST /api/categories
///
/// Create a category with a unique name.
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    let name = input.name.unwrap_or_default();
    let category = CategoryRepo::create(&state.store, &name).await?;

    tracing::info!(category_id = %category.id, name = %category.name, "Category created");

    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /api/categories/{id}
///
/// Rename a category.
pub async fn update_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateCategory>,
) -> AppResult<impl IntoResponse> {
    let name = input.name.unwrap_or_default();
    let category = CategoryRepo::rename(&state.store, &category_id, &name).await?;

    tracing::info!(category_id = %category.id, name = %category.name, "Category renamed");

    Ok(Json(category))
}

/// DELETE /api/categories/{id}
///
/// Delete a category no todo references, and return it.
pub async fn delete_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryRepo::delete(&state.store, &category_id).await?;

    tracing::info!(category_id = %category.id, name = %category.name, "Category deleted");

    Ok(Json(category))
}
