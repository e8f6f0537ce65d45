//! Status filter and sort key accepted by the todo list endpoint.
//!
//! Both are parsed leniently: a value the server does not recognise means
//! "no filter" / "no sort" rather than a client error.

use serde::{Deserialize, Serialize};

pub const STATUS_ALL: &str = "all";
pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_COMPLETED: &str = "completed";

pub const SORT_DUE_DATE: &str = "dueDate";
pub const SORT_CREATED_AT: &str = "createdAt";

/// Completion-status filter (`?status=`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl StatusFilter {
    /// Parse a raw query value. Missing or unrecognised values yield `All`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(STATUS_ACTIVE) => Self::Active,
            Some(STATUS_COMPLETED) => Self::Completed,
            _ => Self::All,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => STATUS_ALL,
            Self::Active => STATUS_ACTIVE,
            Self::Completed => STATUS_COMPLETED,
        }
    }

    /// Whether a todo with the given completion flag passes this filter.
    pub fn matches(self, completed: bool) -> bool {
        match self {
            Self::All => true,
            Self::Active => !completed,
            Self::Completed => completed,
        }
    }
}

/// Ascending sort key (`?sort=`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    DueDate,
    CreatedAt,
}

impl SortKey {
    /// Parse a raw query value. Missing or unrecognised values yield `None`,
    /// which leaves the list in store order.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        match raw {
            Some(SORT_DUE_DATE) => Some(Self::DueDate),
            Some(SORT_CREATED_AT) => Some(Self::CreatedAt),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::DueDate => SORT_DUE_DATE,
            Self::CreatedAt => SORT_CREATED_AT,
        }
    }
}
