//! Page State Store
//!
//! Reactive mirror of what the coordinator exposes to the view tree.
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use form_sync::{Item, LoadState, ResetKey};

/// Visible page state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct PageState {
    /// Loaded items, empty while loading
    pub items: Vec<Item>,
    /// Loader progress
    pub load_state: LoadState,
    /// Last reset key published by the coordinator
    pub reset_key: ResetKey,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            load_state: LoadState::Loading,
            reset_key: ResetKey::default(),
        }
    }
}

/// Type alias for the store
pub type PageStore = Store<PageState>;

/// Get the page store from context
pub fn use_page_store() -> PageStore {
    expect_context::<PageStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Publish the outcome of a load
pub fn store_apply_load(store: &PageStore, items: Vec<Item>, load_state: LoadState) {
    *store.items().write() = items;
    *store.load_state().write() = load_state;
}

/// Publish a new reset key to every mounted item form
pub fn store_publish_reset(store: &PageStore, key: ResetKey) {
    *store.reset_key().write() = key;
}
