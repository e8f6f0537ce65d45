//! Repository for the category collection.

use todo_core::error::CoreError;
use todo_core::types::parse_id;

use crate::models::category::Category;
use crate::models::todo::Todo;
use crate::query::{self, TodoQuery};
use crate::rules;
use crate::Store;

const ENTITY: &str = "Category";

fn not_found(raw_id: &str) -> CoreError {
    CoreError::NotFound {
        entity: ENTITY,
        id: raw_id.to_string(),
    }
}

/// Provides data access for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// All categories in insertion order.
    pub async fn list(store: &Store) -> Vec<Category> {
        store.read().await.categories.all().to_vec()
    }

    /// Find a category by its raw id. Malformed ids find nothing.
    pub async fn find_by_id(store: &Store, raw_id: &str) -> Option<Category> {
        let id = parse_id(raw_id)?;
        store.read().await.categories.find(id).cloned()
    }

    /// Create a category. Fails with `Conflict` if the name is taken.
    pub async fn create(store: &Store, name: &str) -> Result<Category, CoreError> {
        let mut guard = store.write().await;
        rules::ensure_name_available(&guard.categories, name, None)?;
        Ok(guard.categories.insert(Category::new(name)).clone())
    }

    /// Rename a category. Keeping its own name is allowed; taking another
    /// category's name fails with `Conflict`.
    pub async fn rename(store: &Store, raw_id: &str, name: &str) -> Result<Category, CoreError> {
        let id = parse_id(raw_id).ok_or_else(|| not_found(raw_id))?;
        let mut guard = store.write().await;
        if !guard.categories.contains(id) {
            return Err(not_found(raw_id));
        }
        rules::ensure_name_available(&guard.categories, name, Some(id))?;

        guard
            .categories
            .replace(id, |category| category.name = name.to_string())
            .cloned()
            .ok_or_else(|| not_found(raw_id))
    }

    /// Delete a category that no todo references, returning it.
    pub async fn delete(store: &Store, raw_id: &str) -> Result<Category, CoreError> {
        let id = parse_id(raw_id).ok_or_else(|| not_found(raw_id))?;
        let mut guard = store.write().await;
        if !guard.categories.contains(id) {
            return Err(not_found(raw_id));
        }
        rules::ensure_category_unreferenced(&guard.todos, id)?;

        guard.categories.remove(id).ok_or_else(|| not_found(raw_id))
    }

    /// Todos filed under a category, in store order.
    pub async fn list_todos(store: &Store, raw_id: &str) -> Result<Vec<Todo>, CoreError> {
        let id = parse_id(raw_id).ok_or_else(|| not_found(raw_id))?;
        let guard = store.read().await;
        if !guard.categories.contains(id) {
            return Err(not_found(raw_id));
        }
        Ok(query::apply(guard.todos.all(), &TodoQuery::in_category(id)))
    }
}
