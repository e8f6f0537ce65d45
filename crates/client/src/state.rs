//! Client-side copies of the two collections and their reducers.
//!
//! Nothing here talks to the network. Each reducer takes a confirmed
//! server result and folds it into the local state; [`crate::Mirror`]
//! drives them around the actual HTTP calls.

use todo_core::listing::{SortKey, StatusFilter};
use todo_core::types::EntityId;
use todo_store::models::category::Category;
use todo_store::models::todo::Todo;

use crate::api::TodoFilters;

/// Progress of the most recent list fetch for a collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Ticket handed out when a list fetch starts. Only the newest ticket may
/// land its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

// ---------------------------------------------------------------------------
// Todos
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct TodosState {
    pub todos: Vec<Todo>,
    pub status: RequestStatus,
    pub error: Option<String>,
    pub active_filter: StatusFilter,
    pub active_sort: Option<SortKey>,
    pub active_category_id: Option<String>,
    latest_fetch: u64,
}

impl Default for TodosState {
    fn default() -> Self {
        Self {
            todos: Vec::new(),
            status: RequestStatus::Idle,
            error: None,
            active_filter: StatusFilter::All,
            active_sort: Some(SortKey::DueDate),
            active_category_id: None,
            latest_fetch: 0,
        }
    }
}

impl TodosState {
    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.active_filter = filter;
    }

    pub fn set_sort(&mut self, sort: Option<SortKey>) {
        self.active_sort = sort;
    }

    pub fn set_category_filter(&mut self, category_id: Option<String>) {
        self.active_category_id = category_id;
    }

    /// Back to `all`, sorted by due date, any category.
    pub fn clear_filters(&mut self) {
        self.active_filter = StatusFilter::All;
        self.active_sort = Some(SortKey::DueDate);
        self.active_category_id = None;
    }

    /// List parameters built from the active selections.
    pub fn filters(&self) -> TodoFilters {
        TodoFilters {
            status: self.active_filter,
            sort: self.active_sort,
            category_id: self.active_category_id.clone(),
        }
    }

    pub fn find(&self, id: EntityId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    // ---- reducers ----

    pub fn fetch_started(&mut self) -> FetchTicket {
        self.latest_fetch += 1;
        self.status = RequestStatus::Loading;
        FetchTicket(self.latest_fetch)
    }

    /// Replace the collection wholesale. Returns `false` (and changes
    /// nothing) if a newer fetch has started since `ticket` was issued.
    pub fn fetch_succeeded(&mut self, ticket: FetchTicket, todos: Vec<Todo>) -> bool {
        if ticket.0 != self.latest_fetch {
            return false;
        }
        self.status = RequestStatus::Succeeded;
        self.error = None;
        self.todos = todos;
        true
    }

    pub fn fetch_failed(&mut self, ticket: FetchTicket, message: String) -> bool {
        if ticket.0 != self.latest_fetch {
            return false;
        }
        self.status = RequestStatus::Failed;
        self.error = Some(message);
        true
    }

    pub fn added(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    /// Swap in the server's copy. Unknown ids are ignored.
    pub fn updated(&mut self, todo: Todo) {
        if let Some(slot) = self.todos.iter_mut().find(|t| t.id == todo.id) {
            *slot = todo;
        }
    }

    pub fn removed(&mut self, id: EntityId) {
        self.todos.retain(|t| t.id != id);
    }

    /// Record a failed mutation. The collection and fetch status are kept.
    pub fn mutation_failed(&mut self, message: String) {
        self.error = Some(message);
    }
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoriesState {
    pub categories: Vec<Category>,
    pub status: RequestStatus,
    pub error: Option<String>,
    latest_fetch: u64,
}

impl CategoriesState {
    pub fn find(&self, id: EntityId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    // ---- reducers ----

    pub fn fetch_started(&mut self) -> FetchTicket {
        self.latest_fetch += 1;
        self.status = RequestStatus::Loading;
        FetchTicket(self.latest_fetch)
    }

    pub fn fetch_succeeded(&mut self, ticket: FetchTicket, categories: Vec<Category>) -> bool {
        if ticket.0 != self.latest_fetch {
            return false;
        }
        self.status = RequestStatus::Succeeded;
        self.error = None;
        self.categories = categories;
        true
    }

    pub fn fetch_failed(&mut self, ticket: FetchTicket, message: String) -> bool {
        if ticket.0 != self.latest_fetch {
            return false;
        }
        self.status = RequestStatus::Failed;
        self.error = Some(message);
        true
    }

    pub fn added(&mut self, category: Category) {
        self.categories.push(category);
    }

    pub fn updated(&mut self, category: Category) {
        if let Some(slot) = self.categories.iter_mut().find(|c| c.id == category.id) {
            *slot = category;
        }
    }

    pub fn removed(&mut self, id: EntityId) {
        self.categories.retain(|c| c.id != id);
    }

    pub fn mutation_failed(&mut self, message: String) {
        self.error = Some(message);
    }
}
