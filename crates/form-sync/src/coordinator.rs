//! Item Coordinator
//!
//! Provider side of the protocol: owns the item list, the form store and the
//! reset key, and is the only writer of the store.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::SyncConfig;
use crate::domain::{DomainError, DomainResult, Item, ItemFormState, ItemId};
use crate::loader::{FixtureLoader, ItemLoader};
use crate::reset::{ResetKey, ResetSignal};
use crate::store::ItemStore;

/// Lifecycle of the item list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Waiting on the loader; no items are visible
    Loading,
    /// Items loaded and store seeded
    Ready,
    /// The loader returned an error
    Failed(DomainError),
    /// Torn down; late load results are dropped
    Closed,
}

impl LoadState {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready)
    }
}

struct Inner {
    items: Vec<Item>,
    store: ItemStore,
    reset: ResetSignal,
    load_state: LoadState,
    /// Incremented per load so a superseded load can be recognized
    generation: u64,
}

/// Shared handle to one provider instance
///
/// Cloning yields another handle to the same state.
#[derive(Clone)]
pub struct ItemCoordinator {
    inner: Arc<RwLock<Inner>>,
    loader: Arc<dyn ItemLoader>,
    config: SyncConfig,
}

impl std::fmt::Debug for ItemCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.read();
        f.debug_struct("ItemCoordinator")
            .field("items", &inner.items.len())
            .field("load_state", &inner.load_state)
            .field("reset_key", &inner.reset.current())
            .finish()
    }
}

impl ItemCoordinator {
    pub fn new(loader: Arc<dyn ItemLoader>, config: SyncConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                items: Vec::new(),
                store: ItemStore::new(),
                reset: ResetSignal::new(),
                load_state: LoadState::Loading,
                generation: 0,
            })),
            loader,
            config,
        }
    }

    /// Coordinator backed by the course fixture
    pub fn with_fixture(config: SyncConfig) -> Self {
        let loader = Arc::new(FixtureLoader::new(&config));
        Self::new(loader, config)
    }

    // Every critical section leaves `Inner` consistent, so a poisoned lock
    // still holds usable state.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ========================
    // Lifecycle
    // ========================

    /// Run the first load.
    ///
    /// Later calls do not load again (use [`Self::reload`]); they report the
    /// first load's outcome, or `LoadInProgress` while it is still running.
    pub async fn start(&self) -> DomainResult<()> {
        let (generation, load_state) = {
            let inner = self.read();
            (inner.generation, inner.load_state.clone())
        };
        if generation > 0 {
            log::debug!("coordinator already started ({:?})", load_state);
            return match load_state {
                LoadState::Ready => Ok(()),
                LoadState::Loading => Err(DomainError::LoadInProgress),
                LoadState::Failed(err) => Err(err),
                LoadState::Closed => Err(DomainError::Closed),
            };
        }
        self.run_load().await
    }

    /// Load the item list again, discarding any load still in flight
    pub async fn reload(&self) -> DomainResult<()> {
        self.run_load().await
    }

    async fn run_load(&self) -> DomainResult<()> {
        let generation = {
            let mut inner = self.write();
            if inner.load_state == LoadState::Closed {
                return Err(DomainError::Closed);
            }
            inner.generation += 1;
            inner.load_state = LoadState::Loading;
            inner.items.clear();
            inner.store.rebuild(&[]);
            inner.generation
        };

        let result = self.loader.load().await;

        let mut inner = self.write();
        if inner.load_state == LoadState::Closed {
            log::warn!("load #{} finished after close, discarding", generation);
            return Err(DomainError::Closed);
        }
        if inner.generation != generation {
            log::warn!("load #{} superseded by #{}, discarding", generation, inner.generation);
            return Ok(());
        }

        match result {
            Ok(items) => {
                inner.store.rebuild(&items);
                inner.items = items;
                inner.load_state = LoadState::Ready;
                log::info!("loaded {} items (load #{})", inner.items.len(), generation);
                Ok(())
            }
            Err(err) => {
                log::warn!("load #{} failed: {}", generation, err);
                inner.load_state = LoadState::Failed(err.clone());
                Err(err)
            }
        }
    }

    /// Tear down. Items and store are dropped and pending loads are ignored.
    pub fn close(&self) {
        let mut inner = self.write();
        inner.load_state = LoadState::Closed;
        inner.items.clear();
        inner.store.rebuild(&[]);
    }

    pub fn load_state(&self) -> LoadState {
        self.read().load_state.clone()
    }

    // ========================
    // Consumer Surface
    // ========================

    /// Loaded items in order; empty unless [`LoadState::Ready`]
    pub fn items(&self) -> Vec<Item> {
        self.read().items.clone()
    }

    pub fn item(&self, id: ItemId) -> Option<Item> {
        self.read().items.iter().find(|item| item.id == id).cloned()
    }

    /// Values a view should start from, read at call time
    pub fn initial_state(&self, id: ItemId) -> Option<ItemFormState> {
        self.read().store.get(id)
    }

    pub fn reset_key(&self) -> ResetKey {
        self.read().reset.current()
    }

    /// Store value and reset key read together
    pub(crate) fn mount_snapshot(&self, id: ItemId) -> DomainResult<(ItemFormState, ResetKey)> {
        let inner = self.read();
        let state = inner.store.get(id).ok_or(DomainError::NotFound(id))?;
        Ok((state, inner.reset.current()))
    }

    /// Merge a view's values into the store
    pub fn report_change(&self, id: ItemId, update: &ItemFormState) -> DomainResult<()> {
        self.write()
            .store
            .set(id, update)
            .inspect_err(|err| log::warn!("report_change ignored: {}", err))?;
        log::debug!("item {} updated: {:?}", id, update);
        Ok(())
    }

    /// Overwrite a view's slot instead of merging into it
    pub fn replace_state(&self, id: ItemId, state: ItemFormState) -> DomainResult<()> {
        self.write()
            .store
            .replace(id, state)
            .inspect_err(|err| log::warn!("replace_state ignored: {}", err))
    }

    /// Log and return the whole store
    pub fn dump_state(&self) -> BTreeMap<ItemId, ItemFormState> {
        let snapshot = self.read().store.snapshot();
        log_dump(&snapshot);
        snapshot
    }

    /// Dump, rebuild the store from the current items, then publish a new
    /// reset key. All three run under one write lock.
    pub fn reset_all(&self) -> ResetKey {
        let mut inner = self.write();
        if self.config.dump_before_reset {
            log_dump(&inner.store.snapshot());
        }

        let Inner { items, store, reset, .. } = &mut *inner;
        store.rebuild(items);
        let key = reset.bump();
        log::info!("store reset to defaults ({})", key);
        key
    }
}

fn log_dump(snapshot: &BTreeMap<ItemId, ItemFormState>) {
    match serde_json::to_string(snapshot) {
        Ok(json) => log::info!("Current Form State {}", json),
        Err(err) => log::warn!("could not format form state: {}", err),
    }
}
