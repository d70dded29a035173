//! Item Entity
//!
//! One course entry in the loaded list.

/// Stable item identifier
pub type ItemId = u32;

/// A loaded list entry. Never mutated after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// Display title
    pub title: String,
}

impl Item {
    pub fn new(id: ItemId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

/// The canonical three-course fixture served by the simulated API
pub fn course_fixture() -> Vec<Item> {
    vec![
        Item::new(101, "Calc I"),
        Item::new(201, "Calc II"),
        Item::new(301, "Calc III"),
    ]
}
