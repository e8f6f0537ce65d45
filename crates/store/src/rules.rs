//! Cross-entity consistency rules.
//!
//! Every function here inspects the collections only; callers run them and
//! the mutation they guard under the same write lock.

use todo_core::error::CoreError;
use todo_core::types::{parse_id, EntityId};

use crate::collection::Collection;
use crate::models::category::Category;
use crate::models::todo::Todo;

pub const MSG_CATEGORY_NAME_TAKEN: &str = "Category with this name already exists";
pub const MSG_CATEGORY_NOT_FOUND: &str = "Category not found";
pub const MSG_CATEGORY_IN_USE: &str = "Cannot delete category because it has associated todos. \
     Please reassign or delete these todos first.";

/// Fail with `Conflict` if a category other than `except` already uses `name`.
pub(crate) fn ensure_name_available(
    categories: &Collection<Category>,
    name: &str,
    except: Option<EntityId>,
) -> Result<(), CoreError> {
    let taken = categories
        .all()
        .iter()
        .any(|c| c.name == name && Some(c.id) != except);
    if taken {
        return Err(CoreError::Conflict(MSG_CATEGORY_NAME_TAKEN.into()));
    }
    Ok(())
}

/// Resolve a todo's raw category reference to an existing category id.
pub(crate) fn resolve_category(
    categories: &Collection<Category>,
    raw: &str,
) -> Result<EntityId, CoreError> {
    parse_id(raw)
        .filter(|id| categories.contains(*id))
        .ok_or_else(|| CoreError::BusinessRule(MSG_CATEGORY_NOT_FOUND.into()))
}

/// Fail with `BusinessRule` if any todo still points at `category_id`.
pub(crate) fn ensure_category_unreferenced(
    todos: &Collection<Todo>,
    category_id: EntityId,
) -> Result<(), CoreError> {
    let referencing = todos
        .all()
        .iter()
        .filter(|t| t.category_id == category_id)
        .count();
    if referencing > 0 {
        tracing::debug!(%category_id, referencing, "Category still referenced");
        return Err(CoreError::BusinessRule(MSG_CATEGORY_IN_USE.into()));
    }
    Ok(())
}
