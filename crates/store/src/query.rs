//! Filter and sort pipeline over the todo collection.
//!
//! Stages run in a fixed order: status, category, sort. The pipeline works
//! on a copy; the backing collection is never reordered.

use todo_core::listing::{SortKey, StatusFilter};
use todo_core::types::{parse_id, EntityId};

use crate::models::todo::Todo;

/// Parsed `GET /todos` parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoQuery {
    pub status: StatusFilter,
    /// Raw category reference. Empty means no category filter.
    pub category_id: Option<String>,
    pub sort: Option<SortKey>,
}

impl TodoQuery {
    pub fn from_params(status: Option<&str>, sort: Option<&str>, category_id: Option<&str>) -> Self {
        Self {
            status: StatusFilter::parse(status),
            category_id: category_id
                .filter(|raw| !raw.is_empty())
                .map(str::to_string),
            sort: SortKey::parse(sort),
        }
    }

    /// Query matching every todo filed under `category_id`, in store order.
    pub fn in_category(category_id: EntityId) -> Self {
        Self {
            category_id: Some(category_id.to_string()),
            ..Self::default()
        }
    }
}

/// Run the pipeline over `todos` and return the resulting view.
pub fn apply(todos: &[Todo], query: &TodoQuery) -> Vec<Todo> {
    // `Some(None)` is a reference that cannot match any todo.
    let wanted_category = query.category_id.as_deref().map(parse_id);

    let mut view: Vec<Todo> = todos
        .iter()
        .filter(|t| query.status.matches(t.completed))
        .filter(|t| match wanted_category {
            Some(wanted) => wanted == Some(t.category_id),
            None => true,
        })
        .cloned()
        .collect();

    // `sort_by_key` is stable, so ties keep store order.
    match query.sort {
        Some(SortKey::DueDate) => view.sort_by_key(|t| t.due_date),
        Some(SortKey::CreatedAt) => view.sort_by_key(|t| t.created_at),
        None => {}
    }

    view
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use todo_core::types::new_id;
    use todo_core::validation::parse_due_date;

    use super::*;
    use crate::models::todo::NewTodo;

    fn todo(title: &str, due: &str, completed: bool, category_id: EntityId) -> Todo {
        let mut t = Todo::new(
            NewTodo {
                title: title.into(),
                description: "d".into(),
                due_date: parse_due_date(due).unwrap(),
                category_id: category_id.to_string(),
            },
            category_id,
        );
        t.completed = completed;
        t
    }

    fn titles(todos: &[Todo]) -> Vec<&str> {
        todos.iter().map(|t| t.title.as_str()).collect()
    }

    fn fixture() -> (Vec<Todo>, EntityId, EntityId) {
        let work = new_id();
        let home = new_id();
        let mut todos = vec![
            todo("c", "2024-03-01", false, work),
            todo("a", "2024-01-01", true, home),
            todo("b", "2024-02-01", false, home),
            todo("d", "2024-01-15", true, work),
        ];
        // Distinct creation times in reverse of store order.
        let base = chrono::Utc::now();
        for (i, t) in todos.iter_mut().enumerate() {
            t.created_at = base - Duration::minutes(i as i64);
        }
        (todos, work, home)
    }

    #[test]
    fn default_query_returns_store_order() {
        let (todos, _, _) = fixture();
        assert_eq!(titles(&apply(&todos, &TodoQuery::default())), ["c", "a", "b", "d"]);
    }

    #[test]
    fn active_and_completed_partition_the_set() {
        let (todos, _, _) = fixture();
        let active = apply(&todos, &TodoQuery::from_params(Some("active"), None, None));
        let completed = apply(&todos, &TodoQuery::from_params(Some("completed"), None, None));

        assert!(active.iter().all(|t| !t.completed));
        assert!(completed.iter().all(|t| t.completed));
        assert_eq!(active.len() + completed.len(), todos.len());
    }

    #[test]
    fn unknown_status_means_no_filter() {
        let (todos, _, _) = fixture();
        let view = apply(&todos, &TodoQuery::from_params(Some("archived"), None, None));
        assert_eq!(view.len(), todos.len());
    }

    #[test]
    fn category_filter() {
        let (todos, work, _) = fixture();
        let view = apply(&todos, &TodoQuery::in_category(work));
        assert_eq!(titles(&view), ["c", "d"]);
    }

    #[test]
    fn empty_category_param_is_ignored_and_garbage_matches_nothing() {
        let (todos, _, _) = fixture();
        assert_eq!(
            apply(&todos, &TodoQuery::from_params(None, None, Some(""))).len(),
            todos.len()
        );
        assert!(apply(&todos, &TodoQuery::from_params(None, None, Some("nope"))).is_empty());
    }

    #[test]
    fn sort_by_due_date_ascending() {
        let (todos, _, _) = fixture();
        let view = apply(&todos, &TodoQuery::from_params(None, Some("dueDate"), None));
        assert_eq!(titles(&view), ["a", "d", "b", "c"]);
        assert!(view.windows(2).all(|w| w[0].due_date <= w[1].due_date));
    }

    #[test]
    fn sort_by_created_at_ascending() {
        let (todos, _, _) = fixture();
        let view = apply(&todos, &TodoQuery::from_params(None, Some("createdAt"), None));
        assert_eq!(titles(&view), ["d", "b", "a", "c"]);
    }

    #[test]
    fn unknown_sort_keeps_store_order() {
        let (todos, _, _) = fixture();
        let view = apply(&todos, &TodoQuery::from_params(None, Some("title"), None));
        assert_eq!(titles(&view), ["c", "a", "b", "d"]);
    }

    #[test]
    fn stages_compose() {
        let (todos, work, _) = fixture();
        let query = TodoQuery {
            status: StatusFilter::Completed,
            category_id: Some(work.to_string()),
            sort: Some(SortKey::DueDate),
        };
        assert_eq!(titles(&apply(&todos, &query)), ["d"]);
    }

    #[test]
    fn sort_ties_keep_store_order() {
        let work = new_id();
        let todos = vec![
            todo("first", "2024-01-01", false, work),
            todo("second", "2024-01-01", false, work),
        ];
        let view = apply(&todos, &TodoQuery::from_params(None, Some("dueDate"), None));
        assert_eq!(titles(&view), ["first", "second"]);
    }
}
