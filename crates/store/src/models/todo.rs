//! Todo entity, request DTOs and the validated inputs the repository consumes.
//!
//! Wire DTOs ([`CreateTodo`], [`UpdateTodo`]) keep every field optional and
//! loosely typed so that missing or malformed values surface as field-level
//! validation errors instead of JSON rejections. After validation they are
//! converted into [`NewTodo`] / [`TodoChanges`].

use serde::{Deserialize, Serialize};
use todo_core::error::{CoreError, FieldError};
use todo_core::types::{new_id, now_not_before, EntityId, Timestamp};
use todo_core::validation::{parse_due_date, MSG_COMPLETED_NOT_BOOLEAN, MSG_DUE_DATE_INVALID};
use validator::Validate;

use crate::collection::Entity;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub due_date: Timestamp,
    pub completed: bool,
    pub category_id: EntityId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Todo {
    /// Build a fresh, incomplete todo under an already-resolved category.
    pub fn new(input: NewTodo, category_id: EntityId) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: new_id(),
            title: input.title,
            description: input.description,
            due_date: input.due_date,
            completed: false,
            category_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite only the fields present in `changes`.
    ///
    /// `category_id` is passed separately because it must be resolved
    /// against the category collection first.
    pub(crate) fn merge(&mut self, changes: TodoChanges, category_id: Option<EntityId>) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(due_date) = changes.due_date {
            self.due_date = due_date;
        }
        if let Some(completed) = changes.completed {
            self.completed = completed;
        }
        if let Some(category_id) = category_id {
            self.category_id = category_id;
        }
    }
}

impl Entity for Todo {
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

/// Body of `POST /todos`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(
        required(message = "Title is required"),
        custom(
            function = "todo_core::validation::validate_not_blank",
            message = "Title is required"
        )
    )]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(
        required(message = "Description is required"),
        custom(
            function = "todo_core::validation::validate_not_blank",
            message = "Description is required"
        )
    )]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(
        required(message = "Due date must be a valid date"),
        custom(function = "todo_core::validation::validate_due_date")
    )]
    pub due_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(
        required(message = "Category ID is required"),
        custom(
            function = "todo_core::validation::validate_not_blank",
            message = "Category ID is required"
        )
    )]
    pub category_id: Option<String>,
}

/// Body of `PUT /todos/{id}`. Every field is optional; absent fields are
/// left untouched. Present string fields must not be blank.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(
        function = "todo_core::validation::validate_not_blank",
        message = "Title must not be empty"
    ))]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(
        function = "todo_core::validation::validate_not_blank",
        message = "Description must not be empty"
    ))]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "todo_core::validation::validate_due_date"))]
    pub due_date: Option<String>,

    /// An explicit `null` is kept as `Some(Value::Null)` so it fails the
    /// boolean check instead of reading as "absent".
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_value"
    )]
    #[validate(custom(function = "todo_core::validation::validate_boolean"))]
    pub completed: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(
        function = "todo_core::validation::validate_not_blank",
        message = "Category ID must not be empty"
    ))]
    pub category_id: Option<String>,
}

/// Deserialize a field that is present in the payload, `null` included.
fn present_value<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

impl CreateTodo {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: Timestamp,
        category_id: EntityId,
    ) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            due_date: Some(due_date.to_rfc3339()),
            category_id: Some(category_id.to_string()),
        }
    }
}

impl UpdateTodo {
    /// Update that only flips the completion flag.
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(serde_json::Value::Bool(completed)),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Validated inputs
// ---------------------------------------------------------------------------

/// A create request after field validation. `category_id` is still the raw
/// reference; resolving it is a consistency rule, not a field check.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
    pub due_date: Timestamp,
    pub category_id: String,
}

/// An update request after field validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<Timestamp>,
    pub completed: Option<bool>,
    pub category_id: Option<String>,
}

impl TryFrom<CreateTodo> for NewTodo {
    type Error = CoreError;

    fn try_from(dto: CreateTodo) -> Result<Self, Self::Error> {
        dto.validate()?;
        let due_date = dto.due_date.as_deref().and_then(parse_due_date).ok_or_else(|| {
            CoreError::Validation(vec![FieldError::new("dueDate", MSG_DUE_DATE_INVALID)])
        })?;

        Ok(Self {
            title: dto.title.unwrap_or_default(),
            description: dto.description.unwrap_or_default(),
            due_date,
            category_id: dto.category_id.unwrap_or_default(),
        })
    }
}

impl TryFrom<UpdateTodo> for TodoChanges {
    type Error = CoreError;

    fn try_from(dto: UpdateTodo) -> Result<Self, Self::Error> {
        dto.validate()?;
        let due_date = match dto.due_date.as_deref() {
            Some(raw) => Some(parse_due_date(raw).ok_or_else(|| {
                CoreError::Validation(vec![FieldError::new("dueDate", MSG_DUE_DATE_INVALID)])
            })?),
            None => None,
        };
        let completed = match dto.completed {
            Some(value) => Some(value.as_bool().ok_or_else(|| {
                CoreError::Validation(vec![FieldError::new(
                    "completed",
                    MSG_COMPLETED_NOT_BOOLEAN,
                )])
            })?),
            None => None,
        };

        Ok(Self {
            title: dto.title,
            description: dto.description,
            due_date,
            completed,
            category_id: dto.category_id,
        })
    }
}
