//! In-memory entity store for todos and categories.
//!
//! [`Store`] is a cheaply cloneable handle; every clone sees the same
//! collections. Construct one per process (or per test) and pass it around.
//! Data access goes through [`repositories::CategoryRepo`] and
//! [`repositories::TodoRepo`].

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use todo_core::seed::DEFAULT_CATEGORY_NAMES;

pub mod collection;
pub mod models;
pub mod query;
pub mod repositories;
pub mod rules;

use collection::Collection;
use models::category::Category;
use models::todo::Todo;

/// Both collections, guarded together so cross-entity checks and the
/// mutation they protect happen in one critical section.
#[derive(Debug, Default)]
pub(crate) struct Collections {
    pub(crate) categories: Collection<Category>,
    pub(crate) todos: Collection<Todo>,
}

/// Entry counts, reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub categories: usize,
    pub todos: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<Collections>>,
}

impl Store {
    /// An empty store with no categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the default categories (`Personal`, `Work`, `Shopping`).
    pub fn seeded() -> Self {
        let mut collections = Collections::default();
        for name in DEFAULT_CATEGORY_NAMES {
            collections.categories.insert(Category::new(*name));
        }
        tracing::debug!(count = DEFAULT_CATEGORY_NAMES.len(), "Seeded default categories");

        Self {
            inner: Arc::new(RwLock::new(collections)),
        }
    }

    pub async fn stats(&self) -> StoreStats {
        let guard = self.read().await;
        StoreStats {
            categories: guard.categories.len(),
            todos: guard.todos.len(),
        }
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.inner.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.inner.write().await
    }
}
