//! Snapshot of the asset balances known for each node.
//!
//! These values are produced by an external store and only read by the widgets of this crate.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use icu_collator::{Collator, CollatorOptions};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct AssetBalance {
    /// Unique asset identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    pub balance: u64,
}

impl AssetBalance {
    pub fn new(id: impl Into<String>, name: impl Into<String>, balance: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            balance,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct NodeState {
    #[serde(default)]
    pub balances: Vec<AssetBalance>,
}

impl NodeState {
    pub fn new(balances: Vec<AssetBalance>) -> Self {
        Self { balances }
    }

    pub fn balance(&self, id: &str) -> Option<&AssetBalance> {
        self.balances.iter().find(|b| b.id == id)
    }

    /// Balances ordered by display name.
    pub fn sorted_balances(&self) -> Vec<AssetBalance> {
        let collator = collator();
        let mut balances = self.balances.clone();
        balances.sort_by(|a, b| collate(collator.as_ref(), &a.name, &b.name));
        balances
    }
}

/// Node states keyed by node name.
pub type NodeStates = BTreeMap<String, NodeState>;

/// Returns the state of the node named `node_name`, if both are known.
pub fn node_state<'a>(
    node_states: Option<&'a NodeStates>,
    node_name: Option<&str>,
) -> Option<&'a NodeState> {
    node_states.zip(node_name).and_then(|(s, n)| s.get(n))
}

/// Compares display names with the root locale collation: accents and case only matter
/// once the base letters are equal, and lowercase sorts first.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    collate(collator().as_ref(), a, b)
}

fn collator() -> Option<Collator> {
    match Collator::try_new(&Default::default(), CollatorOptions::new()) {
        Ok(collator) => Some(collator),
        Err(e) => {
            log::warn!("Failed to load collation data, sorting names bytewise: {:?}", e);
            None
        }
    }
}

// Strings the collator holds equal are ordered bytewise so that sorting is total.
fn collate(collator: Option<&Collator>, a: &str, b: &str) -> Ordering {
    collator
        .map(|c| c.compare(a, b))
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_cmp() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("Banana", "apple"), Ordering::Greater);
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("same", "same"), Ordering::Equal);
        assert_eq!(locale_cmp("ab", "abc"), Ordering::Less);
        assert_eq!(locale_cmp("Émeraude", "euro"), Ordering::Less);
        assert_eq!(locale_cmp("e", "é"), Ordering::Less);
    }

    #[test]
    fn test_sorted_balances_non_ascii() {
        let state = NodeState::new(
            ["zinc", "Émeraude", "euro", "faucet"]
                .iter()
                .enumerate()
                .map(|(i, name)| AssetBalance::new(format!("{:02}", i), *name, 1))
                .collect(),
        );
        let names: Vec<_> = state
            .sorted_balances()
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, vec!["Émeraude", "euro", "faucet", "zinc"]);
    }

    #[test]
    fn test_sorted_balances() {
        let state = NodeState::new(vec![
            AssetBalance::new("03", "zeta", 1),
            AssetBalance::new("01", "Alpha", 0),
            AssetBalance::new("02", "beta", 20),
        ]);
        let names: Vec<_> = state
            .sorted_balances()
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, vec!["Alpha", "beta", "zeta"]);
        // The snapshot itself is left untouched.
        assert_eq!(state.balances[0].name, "zeta");
    }

    #[test]
    fn test_node_state_lookup() {
        let mut states = NodeStates::new();
        states.insert("alice".to_string(), NodeState::default());
        assert!(node_state(Some(&states), Some("alice")).is_some());
        assert!(node_state(Some(&states), Some("bob")).is_none());
        assert!(node_state(Some(&states), None).is_none());
        assert!(node_state(None, Some("alice")).is_none());
    }

    #[test]
    fn test_deserialize_node_states() {
        let states: NodeStates = toml::from_str(
            r#"
            [alice]
            balances = [
                { id = "abcdef0123", name = "LUSD", balance = 1000 },
            ]

            [bob]
            "#,
        )
        .unwrap();
        assert_eq!(
            states["alice"].balance("abcdef0123"),
            Some(&AssetBalance::new("abcdef0123", "LUSD", 1000))
        );
        assert!(states["bob"].balances.is_empty());
    }
}
