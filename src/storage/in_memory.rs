//! In-memory collection of entities
//!
//! Every read and write goes through an `RwLock`: many readers, one writer.
//! Reads hand back owned clones so no reference outlives the lock. Lookups are
//! linear scans in insertion order; there are no secondary indices.

use crate::core::entity::Entity;
use crate::core::error::{EntityError, GameReviewsResult, StorageError};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Ordered, thread-safe collection of one entity type
#[derive(Clone)]
pub struct InMemoryCollection<T: Entity> {
    items: Arc<RwLock<Vec<T>>>,
}

impl<T: Entity> InMemoryCollection<T> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Create a collection holding `items` in the given order
    pub fn from_vec(items: Vec<T>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    fn read(&self) -> GameReviewsResult<RwLockReadGuard<'_, Vec<T>>> {
        self.items.read().map_err(|_| Self::poisoned())
    }

    fn write(&self) -> GameReviewsResult<RwLockWriteGuard<'_, Vec<T>>> {
        self.items.write().map_err(|_| Self::poisoned())
    }

    fn poisoned() -> crate::core::error::GameReviewsError {
        StorageError::LockPoisoned {
            collection: T::resource_name().to_string(),
        }
        .into()
    }

    fn already_exists(id: &str) -> crate::core::error::GameReviewsError {
        EntityError::AlreadyExists {
            entity_type: T::resource_name_singular().to_string(),
            id: id.to_string(),
        }
        .into()
    }

    /// All entities in insertion order
    pub fn list_all(&self) -> GameReviewsResult<Vec<T>> {
        Ok(self.read()?.clone())
    }

    /// Number of entities
    pub fn len(&self) -> GameReviewsResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> GameReviewsResult<bool> {
        Ok(self.read()?.is_empty())
    }

    /// First entity with the given id, in collection order
    pub fn find_by_id(&self, id: &str) -> GameReviewsResult<Option<T>> {
        Ok(self.read()?.iter().find(|e| e.id() == id).cloned())
    }

    /// All entities whose `field` is a string equal to `value`
    ///
    /// Unknown field names match nothing.
    pub fn filter_by_foreign_key(&self, field: &str, value: &str) -> GameReviewsResult<Vec<T>> {
        Ok(self
            .read()?
            .iter()
            .filter(|e| e.field_value(field).is_some_and(|v| v.eq_str(value)))
            .cloned()
            .collect())
    }

    /// Append an entity whose id the caller already chose
    pub fn insert(&self, entity: T) -> GameReviewsResult<T> {
        let mut items = self.write()?;
        if items.iter().any(|e| e.id() == entity.id()) {
            return Err(Self::already_exists(entity.id()));
        }
        items.push(entity.clone());
        Ok(entity)
    }

    /// Build and append an entity while holding the write lock
    ///
    /// `build` sees the current contents, so an id chosen from them cannot be
    /// taken by a concurrent writer before the append.
    pub fn insert_with(&self, build: impl FnOnce(&[T]) -> T) -> GameReviewsResult<T> {
        let mut items = self.write()?;
        let entity = build(&items);
        if items.iter().any(|e| e.id() == entity.id()) {
            return Err(Self::already_exists(entity.id()));
        }
        items.push(entity.clone());
        Ok(entity)
    }

    /// Replace every entity matching `predicate` with `merge(entity)`
    ///
    /// Non-matching entities and the overall order are untouched. Returns the
    /// replacements. If a replacement would carry an id already held by a
    /// different entity, nothing is changed and `AlreadyExists` is returned.
    pub fn replace_matching(
        &self,
        predicate: impl Fn(&T) -> bool,
        merge: impl Fn(&T) -> T,
    ) -> GameReviewsResult<Vec<T>> {
        let mut items = self.write()?;

        let mut staged = items.clone();
        let mut replaced = Vec::new();
        let mut renamed = Vec::new();
        for (index, slot) in staged.iter_mut().enumerate() {
            if predicate(&*slot) {
                let next = merge(&*slot);
                if next.id() != slot.id() {
                    renamed.push(index);
                }
                *slot = next;
                replaced.push(slot.clone());
            }
        }

        for index in renamed {
            let id = staged[index].id();
            if staged
                .iter()
                .enumerate()
                .any(|(other, e)| other != index && e.id() == id)
            {
                return Err(Self::already_exists(id));
            }
        }

        *items = staged;
        Ok(replaced)
    }

    /// Keep only entities NOT matching `predicate`
    ///
    /// Returns how many were dropped and what remains, both taken under the
    /// same write lock.
    pub fn remove_matching(
        &self,
        predicate: impl Fn(&T) -> bool,
    ) -> GameReviewsResult<(usize, Vec<T>)> {
        let mut items = self.write()?;
        let before = items.len();
        items.retain(|e| !predicate(e));
        Ok((before - items.len(), items.clone()))
    }
}

impl<T: Entity> Default for InMemoryCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}
