//! Item Form State
//!
//! Editable field values for one item, kept as a string map so new inputs
//! can be added without touching the store.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Name of the quantity input
pub const QTY: &str = "qty";

/// Field values of one item form
///
/// Serializes as a plain JSON object, e.g. `{"qty":"5"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemFormState {
    fields: BTreeMap<String, String>,
}

impl Default for ItemFormState {
    fn default() -> Self {
        Self::empty().with(QTY, "")
    }
}

impl ItemFormState {
    /// State with no fields at all (a partial update carrier)
    pub fn empty() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field setter
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Shorthand for a state carrying only `qty`
    pub fn qty(value: impl Into<String>) -> Self {
        Self::empty().with(QTY, value)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Shallow merge: fields present in `update` win, the rest are kept
    pub fn merge(&mut self, update: &ItemFormState) {
        for (field, value) in &update.fields {
            self.fields.insert(field.clone(), value.clone());
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_blank_qty() {
        let state = ItemFormState::default();
        assert_eq!(state.get(QTY), Some(""));
        assert_eq!(state.fields().count(), 1);
    }

    #[test]
    fn test_merge_keeps_missing_fields() {
        let mut state = ItemFormState::qty("3").with("note", "rush");
        state.merge(&ItemFormState::qty("7"));

        assert_eq!(state.get(QTY), Some("7"));
        assert_eq!(state.get("note"), Some("rush"));
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let json = serde_json::to_string(&ItemFormState::qty("5")).unwrap();
        assert_eq!(json, r#"{"qty":"5"}"#);

        let back: ItemFormState = serde_json::from_str(r#"{"qty":""}"#).unwrap();
        assert_eq!(back, ItemFormState::default());
    }
}
