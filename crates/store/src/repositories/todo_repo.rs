//! Repository for the todo collection.

use todo_core::error::CoreError;
use todo_core::types::parse_id;

use crate::models::todo::{NewTodo, Todo, TodoChanges};
use crate::query::{self, TodoQuery};
use crate::rules;
use crate::Store;

const ENTITY: &str = "Todo";

fn not_found(raw_id: &str) -> CoreError {
    CoreError::NotFound {
        entity: ENTITY,
        id: raw_id.to_string(),
    }
}

/// Provides data access for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// Filtered and sorted view of the todos. Never reorders the store.
    pub async fn list(store: &Store, params: &TodoQuery) -> Vec<Todo> {
        query::apply(store.read().await.todos.all(), params)
    }

    pub async fn find_by_id(store: &Store, raw_id: &str) -> Option<Todo> {
        let id = parse_id(raw_id)?;
        store.read().await.todos.find(id).cloned()
    }

    /// Create a todo under an existing category.
    ///
    /// Fails with `BusinessRule` if the category reference does not resolve.
    pub async fn create(store: &Store, input: NewTodo) -> Result<Todo, CoreError> {
        let mut guard = store.write().await;
        let category_id = rules::resolve_category(&guard.categories, &input.category_id)?;
        Ok(guard.todos.insert(Todo::new(input, category_id)).clone())
    }

    /// Merge `changes` into an existing todo.
    ///
    /// The category reference is checked only when the update carries one.
    pub async fn update(
        store: &Store,
        raw_id: &str,
        changes: TodoChanges,
    ) -> Result<Todo, CoreError> {
        let id = parse_id(raw_id).ok_or_else(|| not_found(raw_id))?;
        let mut guard = store.write().await;
        if !guard.todos.contains(id) {
            return Err(not_found(raw_id));
        }
        let category_id = changes
            .category_id
            .as_deref()
            .map(|raw| rules::resolve_category(&guard.categories, raw))
            .transpose()?;

        guard
            .todos
            .replace(id, |todo| todo.merge(changes, category_id))
            .cloned()
            .ok_or_else(|| not_found(raw_id))
    }

    /// Delete a todo, returning it. Categories are unaffected.
    pub async fn delete(store: &Store, raw_id: &str) -> Result<Todo, CoreError> {
        let id = parse_id(raw_id).ok_or_else(|| not_found(raw_id))?;
        store
            .write()
            .await
            .todos
            .remove(id)
            .ok_or_else(|| not_found(raw_id))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use todo_core::listing::StatusFilter;
    use todo_core::types::new_id;
    use todo_core::validation::parse_due_date;

    use super::*;
    use crate::repositories::CategoryRepo;
    use crate::rules::MSG_CATEGORY_NOT_FOUND;

    async fn category(store: &Store, name: &str) -> String {
        CategoryRepo::list(store)
            .await
            .into_iter()
            .find(|c| c.name == name)
            .map(|c| c.id.to_string())
            .unwrap()
    }

    fn input(title: &str, due: &str, category_id: &str) -> NewTodo {
        NewTodo {
            title: title.into(),
            description: "details".into(),
            due_date: parse_due_date(due).unwrap(),
            category_id: category_id.to_string(),
        }
    }

    #[tokio::test]
    async fn create_then_find_round_trips() {
        let store = Store::seeded();
        let work = category(&store, "Work").await;
        let created = TodoRepo::create(&store, input("Ship", "2024-06-01", &work))
            .await
            .unwrap();

        let found = TodoRepo::find_by_id(&store, &created.id.to_string())
            .await
            .unwrap();
        assert_eq!(found, created);
        assert!(!found.completed);
        assert!(found.created_at <= found.updated_at);
    }

    #[tokio::test]
    async fn create_with_unknown_category_is_refused() {
        let store = Store::seeded();
        assert_matches!(
            TodoRepo::create(&store, input("Buy milk", "2024-01-01", "<unknown>")).await,
            Err(CoreError::BusinessRule(msg)) if msg == MSG_CATEGORY_NOT_FOUND
        );
        assert!(TodoRepo::list(&store, &TodoQuery::default()).await.is_empty());
    }

    #[tokio::test]
    async fn update_merges_present_fields_only() {
        let store = Store::seeded();
        let work = category(&store, "Work").await;
        let created = TodoRepo::create(&store, input("Ship", "2024-06-01", &work))
            .await
            .unwrap();

        let updated = TodoRepo::update(
            &store,
            &created.id.to_string(),
            TodoChanges {
                completed: Some(true),
                ..TodoChanges::default()
            },
        )
        .await
        .unwrap();

        assert!(updated.completed);
        assert_eq!(updated.title, created.title);
        assert_eq!(updated.due_date, created.due_date);
        assert_eq!(updated.category_id, created.category_id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn update_moves_between_categories() {
        let store = Store::seeded();
        let work = category(&store, "Work").await;
        let home = category(&store, "Personal").await;
        let created = TodoRepo::create(&store, input("Ship", "2024-06-01", &work))
            .await
            .unwrap();

        let updated = TodoRepo::update(
            &store,
            &created.id.to_string(),
            TodoChanges {
                category_id: Some(home.clone()),
                ..TodoChanges::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.category_id.to_string(), home);
    }

    #[tokio::test]
    async fn update_to_unknown_category_leaves_todo_untouched() {
        let store = Store::seeded();
        let work = category(&store, "Work").await;
        let created = TodoRepo::create(&store, input("Ship", "2024-06-01", &work))
            .await
            .unwrap();

        let result = TodoRepo::update(
            &store,
            &created.id.to_string(),
            TodoChanges {
                title: Some("Changed".into()),
                category_id: Some(new_id().to_string()),
                ..TodoChanges::default()
            },
        )
        .await;
        assert_matches!(result, Err(CoreError::BusinessRule(_)));

        let stored = TodoRepo::find_by_id(&store, &created.id.to_string())
            .await
            .unwrap();
        assert_eq!(stored, created);
    }

    #[tokio::test]
    async fn update_missing_todo_is_not_found_before_category_check() {
        let store = Store::seeded();
        let result = TodoRepo::update(
            &store,
            &new_id().to_string(),
            TodoChanges {
                category_id: Some("garbage".into()),
                ..TodoChanges::default()
            },
        )
        .await;
        assert_matches!(result, Err(CoreError::NotFound { entity: "Todo", .. }));
    }

    #[tokio::test]
    async fn delete_returns_removed_todo() {
        let store = Store::seeded();
        let work = category(&store, "Work").await;
        let created = TodoRepo::create(&store, input("Ship", "2024-06-01", &work))
            .await
            .unwrap();
        let id = created.id.to_string();

        assert_eq!(TodoRepo::delete(&store, &id).await.unwrap(), created);
        assert_matches!(
            TodoRepo::delete(&store, &id).await,
            Err(CoreError::NotFound { .. })
        );
    }

    #[tokio::test]
    async fn list_applies_query_without_reordering_store() {
        let store = Store::seeded();
        let work = category(&store, "Work").await;
        for (title, due) in [("late", "2024-09-01"), ("early", "2024-01-01")] {
            TodoRepo::create(&store, input(title, due, &work)).await.unwrap();
        }

        let sorted = TodoRepo::list(&store, &TodoQuery::from_params(None, Some("dueDate"), None)).await;
        assert_eq!(sorted[0].title, "early");

        let unsorted = TodoRepo::list(&store, &TodoQuery::default()).await;
        assert_eq!(unsorted[0].title, "late");

        let active = TodoRepo::list(
            &store,
            &TodoQuery {
                status: StatusFilter::Active,
                ..TodoQuery::default()
            },
        )
        .await;
        assert_eq!(active.len(), 2);
    }
}
