//! Server-confirmed mirror of both collections.
//!
//! Every operation issues the HTTP call first and only then folds the
//! server's answer into local state; nothing is applied optimistically.
//! Failures are recorded as the collection's `error` and returned to the
//! caller. Nothing is retried.

use std::sync::Arc;

use tokio::sync::RwLock;
use todo_core::listing::{SortKey, StatusFilter};
use todo_store::models::category::Category;
use todo_store::models::todo::{CreateTodo, Todo, UpdateTodo};

use crate::api::{ClientError, TodoApi};
use crate::state::{CategoriesState, TodosState};

/// Cheaply cloneable handle; clones share the same state.
#[derive(Debug, Clone)]
pub struct Mirror {
    api: TodoApi,
    todos: Arc<RwLock<TodosState>>,
    categories: Arc<RwLock<CategoriesState>>,
}

impl Mirror {
    pub fn new(api: TodoApi) -> Self {
        Self {
            api,
            todos: Arc::new(RwLock::new(TodosState::default())),
            categories: Arc::new(RwLock::new(CategoriesState::default())),
        }
    }

    /// Snapshot of the todo side.
    pub async fn todos(&self) -> TodosState {
        self.todos.read().await.clone()
    }

    /// Snapshot of the category side.
    pub async fn categories(&self) -> CategoriesState {
        self.categories.read().await.clone()
    }

    // ---- filter selection (local only) ----

    pub async fn set_filter(&self, filter: StatusFilter) {
        self.todos.write().await.set_filter(filter);
    }

    pub async fn set_sort(&self, sort: Option<SortKey>) {
        self.todos.write().await.set_sort(sort);
    }

    pub async fn set_category_filter(&self, category_id: Option<String>) {
        self.todos.write().await.set_category_filter(category_id);
    }

    pub async fn clear_filters(&self) {
        self.todos.write().await.clear_filters();
    }

    // ---- todos ----

    /// Reload todos with the active filter, sort and category.
    ///
    /// If another fetch starts before this one returns, this result is
    /// dropped so the newer selection wins.
    pub async fn fetch_todos(&self) -> Result<(), ClientError> {
        let (ticket, filters) = {
            let mut state = self.todos.write().await;
            (state.fetch_started(), state.filters())
        };

        let result = self.api.list_todos(&filters).await;

        let mut state = self.todos.write().await;
        match result {
            Ok(todos) => {
                if !state.fetch_succeeded(ticket, todos) {
                    tracing::debug!("Discarded stale todo list response");
                }
                Ok(())
            }
            Err(e) => {
                state.fetch_failed(ticket, e.to_string());
                Err(e)
            }
        }
    }

    pub async fn add_todo(&self, input: &CreateTodo) -> Result<Todo, ClientError> {
        let result = self.api.create_todo(input).await;
        let mut state = self.todos.write().await;
        match result {
            Ok(todo) => {
                state.added(todo.clone());
                Ok(todo)
            }
            Err(e) => {
                state.mutation_failed(e.to_string());
                Err(e)
            }
        }
    }

    pub async fn update_todo(&self, id: &str, changes: &UpdateTodo) -> Result<Todo, ClientError> {
        let result = self.api.update_todo(id, changes).await;
        let mut state = self.todos.write().await;
        match result {
            Ok(todo) => {
                state.updated(todo.clone());
                Ok(todo)
            }
            Err(e) => {
                state.mutation_failed(e.to_string());
                Err(e)
            }
        }
    }

    pub async fn delete_todo(&self, id: &str) -> Result<Todo, ClientError> {
        let result = self.api.delete_todo(id).await;
        let mut state = self.todos.write().await;
        match result {
            Ok(todo) => {
                state.removed(todo.id);
                Ok(todo)
            }
            Err(e) => {
                state.mutation_failed(e.to_string());
                Err(e)
            }
        }
    }

    // ---- categories ----

    pub async fn fetch_categories(&self) -> Result<(), ClientError> {
        let ticket = self.categories.write().await.fetch_started();

        let result = self.api.list_categories().await;

        let mut state = self.categories.write().await;
        match result {
            Ok(categories) => {
                if !state.fetch_succeeded(ticket, categories) {
                    tracing::debug!("Discarded stale category list response");
                }
                Ok(())
            }
            Err(e) => {
                state.fetch_failed(ticket, e.to_string());
                Err(e)
            }
        }
    }

    pub async fn add_category(&self, name: &str) -> Result<Category, ClientError> {
        let result = self.api.create_category(name).await;
        let mut state = self.categories.write().await;
        match result {
            Ok(category) => {
                state.added(category.clone());
                Ok(category)
            }
            Err(e) => {
                state.mutation_failed(e.to_string());
                Err(e)
            }
        }
    }

    pub async fn update_category(&self, id: &str, name: &str) -> Result<Category, ClientError> {
        let result = self.api.update_category(id, name).await;
        let mut state = self.categories.write().await;
        match result {
            Ok(category) => {
                state.updated(category.clone());
                Ok(category)
            }
            Err(e) => {
                state.mutation_failed(e.to_string());
                Err(e)
            }
        }
    }

    pub async fn delete_category(&self, id: &str) -> Result<Category, ClientError> {
        let result = self.api.delete_category(id).await;
        let mut state = self.categories.write().await;
        match result {
            Ok(category) => {
                state.removed(category.id);
                Ok(category)
            }
            Err(e) => {
                state.mutation_failed(e.to_string());
                Err(e)
            }
        }
    }
}
