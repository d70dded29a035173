//! Domain Layer
//!
//! Items, per-item form state and the shared error type.
//! No framework dependencies (serde only, for form state dumps).

mod error;
mod form_state;
mod item;

pub use error::{DomainError, DomainResult};
pub use form_state::{ItemFormState, QTY};
pub use item::{course_fixture, Item, ItemId};
