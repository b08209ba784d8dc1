//! In-memory collection owning one page's records.
//!
//! The store lives exactly as long as the page that created it; navigating
//! away discards it and the next mount re-seeds from the hard-coded data.

use contracts::domain::common::{Entity, EntityId};

/// Store-level failures surfaced to the dispatcher
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },
}

/// Ordered in-memory list of records with a monotonic id counter
///
/// Insertion order is preserved; `create` appends, `update` replaces in
/// place, nothing re-sorts. The counter is seeded strictly above the
/// largest seed id, so ids never collide within a store lifetime.
#[derive(Debug, Clone)]
pub struct Collection<E: Entity> {
    items: Vec<E>,
    next_id: u64,
}

impl<E: Entity> Collection<E> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Seed the store with the page's initial records
    pub fn with_seed(items: Vec<E>) -> Self {
        let next_id = items
            .iter()
            .map(|item| item.id().raw())
            .max()
            .map_or(1, |max| max + 1);
        Self { items, next_id }
    }

    pub fn all(&self) -> &[E] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: E::Id) -> Option<&E> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Append a new record built around a freshly allocated id
    pub fn create(&mut self, build: impl FnOnce(E::Id) -> E) -> &E {
        let id = E::Id::from_raw(self.next_id);
        self.next_id += 1;
        let record = build(id);
        debug_assert_eq!(record.id(), id, "builder must keep the allocated id");
        self.items.push(record);
        self.items.last().expect("record was just pushed")
    }

    /// Replace the record's fields in place; position and id are unchanged
    pub fn update(
        &mut self,
        id: E::Id,
        apply: impl FnOnce(&mut E),
    ) -> Result<&E, CollectionError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| Self::not_found(id))?;
        apply(item);
        debug_assert_eq!(item.id(), id, "update must not change the id");
        Ok(item)
    }

    /// Remove the record with the given id, returning it
    pub fn remove(&mut self, id: E::Id) -> Result<E, CollectionError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| Self::not_found(id))?;
        Ok(self.items.remove(index))
    }

    fn not_found(id: E::Id) -> CollectionError {
        CollectionError::NotFound {
            entity: E::element_name(),
            id: id.as_string(),
        }
    }
}

impl<E: Entity> Default for Collection<E> {
    fn default() -> Self {
        Self::new()
    }
}
