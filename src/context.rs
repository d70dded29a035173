//! Provider Context
//!
//! Coordinator handle shared with every item form via Leptos Context API.

use leptos::prelude::*;

use form_sync::{DomainResult, ItemBinding, ItemCoordinator, ItemId, LoadState};

use crate::store::{store_apply_load, store_publish_reset, PageStore};

/// Provider capabilities handed to the collection and item views
#[derive(Clone, Copy)]
pub struct ItemContext {
    coordinator: StoredValue<ItemCoordinator>,
    store: PageStore,
}

impl ItemContext {
    pub fn new(coordinator: ItemCoordinator, store: PageStore) -> Self {
        Self {
            coordinator: StoredValue::new(coordinator),
            store,
        }
    }

    pub fn coordinator(&self) -> ItemCoordinator {
        self.coordinator.get_value()
    }

    /// Run the initial load and mirror the result into the page store
    pub async fn load(&self) {
        let coordinator = self.coordinator();
        let result = coordinator.start().await;
        match (result, coordinator.load_state()) {
            (Err(err), LoadState::Closed) => {
                web_sys::console::log_1(&format!("[PROVIDER] Load dropped: {}", err).into());
            }
            (_, load_state) => {
                let items = coordinator.items();
                web_sys::console::log_1(&format!("[PROVIDER] {:?} with {} items", load_state, items.len()).into());
                store_apply_load(&self.store, items, load_state);
            }
        }
    }

    /// Bind a freshly mounted item form to its store slot
    pub fn mount(&self, id: ItemId) -> DomainResult<ItemBinding> {
        self.coordinator.with_value(|c| ItemBinding::mount(c, id))
    }

    /// Print the current form state to the console
    pub fn show_ref(&self) {
        let snapshot = self.coordinator.with_value(|c| c.dump_state());
        let json = serde_json::to_string_pretty(&snapshot).unwrap_or_else(|e| e.to_string());
        web_sys::console::log_1(&format!("Current Form State {}", json).into());
    }

    /// Print the state, reset the store and tell open forms to revert
    pub fn show_and_reset(&self) {
        self.show_ref();
        let key = self.coordinator.with_value(|c| c.reset_all());
        store_publish_reset(&self.store, key);
    }
}

/// Get the provider context
pub fn use_item_context() -> ItemContext {
    expect_context::<ItemContext>()
}
