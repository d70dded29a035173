//! Item Binding
//!
//! Local editable copy of one item's form, kept in step with the
//! coordinator. A rendered item form owns exactly one binding for as long as
//! it is mounted.

use crate::coordinator::ItemCoordinator;
use crate::domain::{DomainResult, ItemFormState, ItemId};
use crate::reset::ResetKey;

/// Per-view form state tied to one store slot
#[derive(Debug, Clone)]
pub struct ItemBinding {
    coordinator: ItemCoordinator,
    id: ItemId,
    local: ItemFormState,
    seen: ResetKey,
}

impl ItemBinding {
    /// Start from the store's current value and the current reset key.
    ///
    /// A binding mounted after a reset records the new key here, so it never
    /// replays a reset it did not witness.
    pub fn mount(coordinator: &ItemCoordinator, id: ItemId) -> DomainResult<Self> {
        let (local, seen) = coordinator.mount_snapshot(id)?;
        Ok(Self {
            coordinator: coordinator.clone(),
            id,
            local,
            seen,
        })
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Current local value of `field` (empty when the field is unset)
    pub fn value(&self, field: &str) -> String {
        self.local.get(field).unwrap_or_default().to_string()
    }

    pub fn state(&self) -> &ItemFormState {
        &self.local
    }

    pub fn seen_key(&self) -> ResetKey {
        self.seen
    }

    /// Apply a user edit locally and report it to the coordinator.
    ///
    /// A reset not yet observed is applied first, so fields edited before it
    /// are never written back into the rebuilt store.
    pub fn edit(&mut self, field: &str, value: impl Into<String>) -> DomainResult<()> {
        self.refresh();
        self.local.set(field, value);
        self.coordinator.report_change(self.id, &self.local)
    }

    /// React to a reset key. Returns true when local edits were discarded.
    pub fn observe(&mut self, key: ResetKey) -> bool {
        if key == self.seen {
            return false;
        }
        self.local = self.coordinator.initial_state(self.id).unwrap_or_default();
        self.seen = key;
        log::debug!("item {} reverted on {}", self.id, key);
        true
    }

    /// Observe the coordinator's current key
    pub fn refresh(&mut self) -> bool {
        let key = self.coordinator.reset_key();
        self.observe(key)
    }

    /// Submit this item's values: log them, then clear both the local copy
    /// and the store slot. Returns the submitted values.
    pub fn commit(&mut self) -> DomainResult<ItemFormState> {
        self.coordinator.replace_state(self.id, ItemFormState::default())?;
        let submitted = std::mem::take(&mut self.local);
        log::info!("item {} submitted: {:?}", self.id, submitted);
        Ok(submitted)
    }
}
