//! Handlers for the todo resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use todo_core::error::CoreError;
use todo_store::models::todo::{CreateTodo, NewTodo, TodoChanges, UpdateTodo};
use todo_store::repositories::TodoRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::query::TodoListParams;
use crate::state::AppState;

/// GET /api/todos
///
/// List todos, filtered by `status` and `categoryId` and sorted by `sort`.
pub async fn list_todos(
    State(state): State<AppState>,
    Query(params): Query<TodoListParams>,
) -> AppResult<impl IntoResponse> {
    let todos = TodoRepo::list(&state.store, &params.to_query()).await;

    Ok(Json(todos))
}

/// GET /api/todos/{id}
pub async fn get_todo(
    State(state): State<AppState>,
    Path(todo_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let todo = TodoRepo::find_by_id(&state.store, &todo_id)
        .await
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Todo",
                id: todo_id.clone(),
            })
        })?;

    Ok(Json(todo))
}

/// POST /api/todos
///
/// Create a todo. The referenced category must exist.
pub async fn create_todo(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateTodo>,
) -> AppResult<impl IntoResponse> {
    let todo = TodoRepo::create(&state.store, NewTodo::try_from(input)?).await?;

    tracing::info!(
        todo_id = %todo.id,
        category_id = %todo.category_id,
        "Todo created",
    );

    Ok((StatusCode::CREATED, Json(todo)))
}

/// PUT /api/todos/{id}
///
/// Partially update a todo; absent fields are left as they are.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(todo_id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateTodo>,
) -> AppResult<impl IntoResponse> {
    let todo = TodoRepo::update(&state.store, &todo_id, TodoChanges::try_from(input)?).await?;

    tracing::info!(todo_id = %todo.id, completed = todo.completed, "Todo updated");

    Ok(Json(todo))
}

/// DELETE /api/todos/{id}
///
/// Delete a todo and return it.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(todo_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let todo = TodoRepo::delete(&state.store, &todo_id).await?;

    tracing::info!(todo_id = %todo.id, "Todo deleted");

    Ok(Json(todo))
}
