//! Keyed in-memory record container shared by the memory adapters.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{StoreError, StoreResult};

/// Thread-safe keyed collection that preserves insertion order.
///
/// Clones share the same underlying records.
#[derive(Debug)]
pub struct MemoryCollection<K, V> {
    name: &'static str,
    state: Arc<RwLock<CollectionState<K, V>>>,
}

#[derive(Debug)]
struct CollectionState<K, V> {
    order: Vec<K>,
    records: HashMap<K, V>,
}

impl<K, V> Default for CollectionState<K, V> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            records: HashMap::new(),
        }
    }
}

impl<K, V> Clone for MemoryCollection<K, V> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            state: Arc::clone(&self.state),
        }
    }
}

impl<K, V> MemoryCollection<K, V>
where
    K: Eq + Hash + Clone + fmt::Display,
    V: Clone,
{
    /// Creates an empty collection with the given name.
    ///
    /// The name is reported in store errors.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: Arc::new(RwLock::new(CollectionState::default())),
        }
    }

    /// Returns the collection name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, CollectionState<K, V>>> {
        self.state
            .read()
            .map_err(|err| StoreError::persistence(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, CollectionState<K, V>>> {
        self.state
            .write()
            .map_err(|err| StoreError::persistence(std::io::Error::other(err.to_string())))
    }

    /// Inserts a new record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateKey`] when the identifier is taken.
    pub fn insert(&self, id: K, value: V) -> StoreResult<()> {
        self.insert_with(id, value, |_| None)
    }

    /// Inserts a new record after checking it against every stored record.
    ///
    /// The `conflict` check runs under the same write lock as the insert, so
    /// unique constraints hold under concurrent writers.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateKey`] when the identifier is taken, or
    /// the first error produced by `conflict`.
    pub fn insert_with<F>(&self, id: K, value: V, conflict: F) -> StoreResult<()>
    where
        F: Fn(&V) -> Option<StoreError>,
    {
        let mut state = self.write()?;
        if state.records.contains_key(&id) {
            return Err(StoreError::DuplicateKey {
                collection: self.name,
                key: "id",
                value: id.to_string(),
            });
        }
        if let Some(err) = state.records.values().find_map(&conflict) {
            return Err(err);
        }
        state.order.push(id.clone());
        state.records.insert(id, value);
        Ok(())
    }

    /// Replaces an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no record has the identifier.
    pub fn replace(&self, id: &K, value: V) -> StoreResult<()> {
        self.replace_with(id, value, |_| None)
    }

    /// Replaces an existing record after checking it against every other
    /// stored record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no record has the identifier, or
    /// the first error produced by `conflict`.
    pub fn replace_with<F>(&self, id: &K, value: V, conflict: F) -> StoreResult<()>
    where
        F: Fn(&V) -> Option<StoreError>,
    {
        let mut state = self.write()?;
        if !state.records.contains_key(id) {
            return Err(StoreError::not_found(self.name, id));
        }
        let clash = state
            .records
            .iter()
            .filter(|(key, _)| *key != id)
            .find_map(|(_, existing)| conflict(existing));
        if let Some(err) = clash {
            return Err(err);
        }
        state.records.insert(id.clone(), value);
        Ok(())
    }

    /// Returns the record with the identifier, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] when the lock is poisoned.
    pub fn get(&self, id: &K) -> StoreResult<Option<V>> {
        Ok(self.read()?.records.get(id).cloned())
    }

    /// Removes and returns the record with the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no record has the identifier.
    pub fn remove(&self, id: &K) -> StoreResult<V> {
        let mut state = self.write()?;
        let removed = state
            .records
            .remove(id)
            .ok_or_else(|| StoreError::not_found(self.name, id))?;
        state.order.retain(|key| key != id);
        Ok(removed)
    }

    /// Returns the first record, in insertion order, matching the predicate.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] when the lock is poisoned.
    pub fn find_first<P>(&self, predicate: P) -> StoreResult<Option<V>>
    where
        P: Fn(&V) -> bool,
    {
        let state = self.read()?;
        Ok(state
            .order
            .iter()
            .filter_map(|key| state.records.get(key))
            .find(|record| predicate(record))
            .cloned())
    }

    /// Returns every record matching the predicate in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] when the lock is poisoned.
    pub fn filter<P>(&self, predicate: P) -> StoreResult<Vec<V>>
    where
        P: Fn(&V) -> bool,
    {
        let state = self.read()?;
        Ok(state
            .order
            .iter()
            .filter_map(|key| state.records.get(key))
            .filter(|record| predicate(record))
            .cloned()
            .collect())
    }
}
