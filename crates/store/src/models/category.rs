//! Category entity and DTOs.

use serde::{Deserialize, Serialize};
use todo_core::types::{new_id, now_not_before, EntityId, Timestamp};
use validator::Validate;

use crate::collection::Entity;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A named bucket todos are filed under. Names are unique (exact match).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: EntityId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: new_id(),
            name: name.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for Category {
    fn id(&self) -> EntityId {
        self.id
    }

    fn touch(&mut self) {
        self.updated_at = now_not_before(self.created_at);
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Body of `POST /categories`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateCategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(
        required(message = "Category name is required"),
        custom(
            function = "todo_core::validation::validate_not_blank",
            message = "Category name is required"
        )
    )]
    pub name: Option<String>,
}

/// Body of `PUT /categories/{id}`. A rename always carries the new name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateCategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(
        required(message = "Category name is required"),
        custom(
            function = "todo_core::validation::validate_not_blank",
            message = "Category name is required"
        )
    )]
    pub name: Option<String>,
}

impl CreateCategory {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

impl UpdateCategory {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}
