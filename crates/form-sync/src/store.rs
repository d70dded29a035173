//! Item Form Store
//!
//! Out-of-band cache of per-item form values. Owned by the coordinator,
//! never touched directly by views.

use std::collections::BTreeMap;

use crate::domain::{DomainError, DomainResult, Item, ItemFormState, ItemId};

/// Mapping from item id to its current form values
///
/// Updates through [`ItemStore::set`] shallow-merge into the existing entry.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    entries: BTreeMap<ItemId, ItemFormState>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with one default state per item
    pub fn seeded(items: &[Item]) -> Self {
        let mut store = Self::new();
        store.rebuild(items);
        store
    }

    /// Current values for `id`
    pub fn get(&self, id: ItemId) -> Option<ItemFormState> {
        self.entries.get(&id).cloned()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Merge `update` into the entry for `id`
    pub fn set(&mut self, id: ItemId, update: &ItemFormState) -> DomainResult<()> {
        let entry = self.entries.get_mut(&id).ok_or(DomainError::NotFound(id))?;
        entry.merge(update);
        Ok(())
    }

    /// Overwrite the entry for `id`, dropping fields `state` does not carry
    pub fn replace(&mut self, id: ItemId, state: ItemFormState) -> DomainResult<()> {
        let entry = self.entries.get_mut(&id).ok_or(DomainError::NotFound(id))?;
        *entry = state;
        Ok(())
    }

    /// Reinitialize every entry from `items`
    ///
    /// The new map is built before it replaces the old one, so the store is
    /// never observed half-filled.
    pub fn rebuild(&mut self, items: &[Item]) {
        let entries = items
            .iter()
            .map(|item| (item.id, ItemFormState::default()))
            .collect();
        self.entries = entries;
    }

    /// Copy of the whole mapping
    pub fn snapshot(&self) -> BTreeMap<ItemId, ItemFormState> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
