//! Runtime options for a [`Graph`](crate::graph::Graph) and the searches
//! run against it.

use serde::{Deserialize, Serialize};

/// Options that change how weights are validated and how A* treats its
/// frontier.
///
/// Every field has a default, so a partial document (or `{}`) deserializes
/// into a usable config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Accept negative edge weights instead of rejecting them with
    /// [`Error::NegativeWeight`](crate::Error::NegativeWeight).
    ///
    /// Both solvers assume non-negative weights. With this enabled the
    /// returned routes are no longer guaranteed to be optimal, and both
    /// solvers check every improvement against the predecessor chain. A
    /// search that runs into a cycle of negative total weight stops with
    /// [`Error::NegativeCycle`](crate::Error::NegativeCycle).
    pub allow_negative_weights: bool,

    /// Skip A* frontier entries whose key is larger than the node's current
    /// `f` score, the same lazy deletion Dijkstra performs.
    ///
    /// Off by default: stale entries are expanded again, which relaxes
    /// nothing when the heuristic is consistent.
    pub a_star_stale_guard: bool,
}

#[cfg(test)]
mod config_tests {
    use super::RouterConfig;

    #[test]
    fn test_default_rejects_negative_weights() {
        let config = RouterConfig::default();
        assert!(!config.allow_negative_weights);
        assert!(!config.a_star_stale_guard);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: RouterConfig = serde_json::from_str(r#"{"a_star_stale_guard": true}"#).unwrap();
        assert!(config.a_star_stale_guard);
        assert!(!config.allow_negative_weights);

        let config: RouterConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RouterConfig::default());
    }
}
