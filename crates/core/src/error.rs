use serde::{Deserialize, Serialize};

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the offending field as it appears on the wire (`dueDate`).
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Lookup by id found nothing. `id` is the raw identifier as received.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: String },

    /// Request payload failed field-level validation.
    #[error("Validation failed: {}", summarize(.0))]
    Validation(Vec<FieldError>),

    /// Uniqueness violation (e.g. duplicate category name).
    #[error("{0}")]
    Conflict(String),

    /// Cross-entity rule violation (unknown category, category in use).
    #[error("{0}")]
    BusinessRule(String),

    /// Unexpected failure inside the domain layer. The in-memory store has
    /// no fallible I/O, so nothing produces it yet.
    #[error("Internal error: {0}")]
    Internal(String),
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}
