//! Operator-supplied price/quantity overrides for missing combinations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A manual price/quantity override for one missing combination.
///
/// Fields are free text; an empty field means "leave the cloned template
/// value untouched" rather than "blank the cell".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Override {
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub quantity: String,
}

impl Override {
    pub fn is_empty(&self) -> bool {
        self.price.trim().is_empty() && self.quantity.trim().is_empty()
    }
}

/// Read-only view of the override store, injected into synthesis.
pub trait OverrideLookup {
    fn get(&self, group_key: &str, combination_key: &str) -> Option<&Override>;
}

/// In-memory override store scoped to one interactive session.
///
/// Mutated only by the operator between runs; runs themselves only read it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverrideStore {
    entries: BTreeMap<String, Override>,
}

fn store_key(group_key: &str, combination_key: &str) -> String {
    format!("{group_key}\u{1f}{combination_key}")
}

impl OverrideStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or replace an override. Setting with both fields empty clears.
    pub fn set(&mut self, group_key: &str, combination_key: &str, value: Override) {
        if value.is_empty() {
            self.clear(group_key, combination_key);
        } else {
            self.entries.insert(store_key(group_key, combination_key), value);
        }
    }

    pub fn clear(&mut self, group_key: &str, combination_key: &str) {
        self.entries.remove(&store_key(group_key, combination_key));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl OverrideLookup for OverrideStore {
    fn get(&self, group_key: &str, combination_key: &str) -> Option<&Override> {
        self.entries.get(&store_key(group_key, combination_key))
    }
}

/// Lookup that never matches, for runs without operator input.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverrides;

impl OverrideLookup for NoOverrides {
    fn get(&self, _group_key: &str, _combination_key: &str) -> Option<&Override> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_clear() {
        let mut store = OverrideStore::new();
        let value = Override {
            price: "99".to_string(),
            quantity: String::new(),
        };
        store.set("p1", "red\u{1f}m", value.clone());
        assert_eq!(store.get("p1", "red\u{1f}m"), Some(&value));
        store.clear("p1", "red\u{1f}m");
        assert_eq!(store.get("p1", "red\u{1f}m"), None);
    }

    #[test]
    fn setting_empty_clears() {
        let mut store = OverrideStore::new();
        store.set(
            "p1",
            "k",
            Override {
                price: "5".to_string(),
                quantity: "2".to_string(),
            },
        );
        store.set("p1", "k", Override::default());
        assert!(store.is_empty());
    }

    #[test]
    fn round_trips_through_json() {
        let mut store = OverrideStore::new();
        store.set(
            "p1",
            "blue\u{1f}m",
            Override {
                price: "19.99".to_string(),
                quantity: "3".to_string(),
            },
        );
        let json = serde_json::to_string(&store).expect("serialize store");
        let round: OverrideStore = serde_json::from_str(&json).expect("deserialize store");
        assert_eq!(round.get("p1", "blue\u{1f}m").unwrap().price, "19.99");
    }
}
