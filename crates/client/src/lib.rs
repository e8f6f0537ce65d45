//! Client side of the todo service.
//!
//! [`api::TodoApi`] is a typed HTTP client for every endpoint.
//! [`mirror::Mirror`] keeps a local copy of both collections that is only
//! ever changed from confirmed server responses.

pub mod api;
pub mod mirror;
pub mod state;

pub use api::{ClientError, TodoApi, TodoFilters};
pub use mirror::Mirror;
pub use state::{CategoriesState, RequestStatus, TodosState};
