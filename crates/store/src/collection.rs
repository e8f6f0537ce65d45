//! Ordered in-memory collection with linear-scan lookup by id.
//!
//! Iteration order is insertion order; nothing is ever re-sorted in place.

use todo_core::types::EntityId;

/// An entity that can live in a [`Collection`].
pub trait Entity: Clone {
    fn id(&self) -> EntityId;

    /// Refresh the entity's `updated_at` stamp after a mutation.
    fn touch(&mut self);
}

#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// All entities in insertion order.
    pub fn all(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: EntityId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.position(id).is_some()
    }

    fn position(&self, id: EntityId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// Append an entity; it becomes the last in iteration order.
    pub fn insert(&mut self, item: T) -> &T {
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    /// Mutate the entity with `id` in place, then stamp it.
    ///
    /// Returns the updated entity, or `None` if no entity has that id.
    pub fn replace<F>(&mut self, id: EntityId, merge: F) -> Option<&T>
    where
        F: FnOnce(&mut T),
    {
        let index = self.position(id)?;
        let item = &mut self.items[index];
        merge(item);
        item.touch();
        Some(&self.items[index])
    }

    /// Remove and return the entity with `id`, preserving the order of the rest.
    pub fn remove(&mut self, id: EntityId) -> Option<T> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }
}
