//! Domain Errors
//!
//! Error type shared by the store, loader and coordinator.

use super::item::ItemId;

/// Common result type for synchronization operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No item with this id in the current list
    NotFound(ItemId),
    /// The loader could not produce an item list
    LoadFailed(String),
    /// The first load has not finished yet
    LoadInProgress,
    /// The coordinator was torn down
    Closed,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(id) => write!(f, "Not found: item {}", id),
            DomainError::LoadFailed(msg) => write!(f, "Load failed: {}", msg),
            DomainError::LoadInProgress => write!(f, "Load in progress"),
            DomainError::Closed => write!(f, "Coordinator closed"),
        }
    }
}

impl std::error::Error for DomainError {}
