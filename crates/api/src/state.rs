use std::sync::Arc;

use todo_store::Store;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the store is a shared handle and the config is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The in-memory todo/category store.
    pub store: Store,
    pub config: Arc<ServerConfig>,
}
