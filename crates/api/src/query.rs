//! Query parameter types for API handlers.

use serde::Deserialize;
use todo_store::query::TodoQuery;

/// `GET /api/todos?status=&sort=&categoryId=`.
///
/// Values are kept as raw strings; unrecognised ones mean "no filter" /
/// "no sort" rather than a rejected request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoListParams {
    pub status: Option<String>,
    pub sort: Option<String>,
    pub category_id: Option<String>,
}

impl TodoListParams {
    pub fn to_query(&self) -> TodoQuery {
        TodoQuery::from_params(
            self.status.as_deref(),
            self.sort.as_deref(),
            self.category_id.as_deref(),
        )
    }
}
