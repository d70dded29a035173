//! Form Sync
//!
//! Keeps per-item form values outside the rendered view tree:
//! - domain: items, form state, errors
//! - store: the out-of-band id -> form state cache
//! - loader: pluggable async item source
//! - reset: version key telling mounted views to drop local edits
//! - coordinator: provider owning all of the above
//! - binding: one mounted item form's local copy

mod binding;
mod config;
mod coordinator;
mod domain;
mod loader;
mod reset;
mod store;

#[cfg(test)]
mod tests;

pub use binding::ItemBinding;
pub use config::SyncConfig;
pub use coordinator::{ItemCoordinator, LoadState};
pub use domain::{course_fixture, DomainError, DomainResult, Item, ItemFormState, ItemId, QTY};
pub use loader::{FixtureLoader, ItemLoader};
pub use reset::{ResetKey, ResetSignal};
pub use store::ItemStore;
