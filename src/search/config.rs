//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Minimax search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies to look ahead. Every move counts, extra turns included.
    pub depth: u32,

    /// Stop expanding once this many nodes were visited (`None` = unlimited).
    /// Unexpanded nodes are scored statically, so results stay deterministic.
    pub node_limit: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::for_level(crate::core::DEFAULT_LEVEL)
    }
}

impl SearchConfig {
    /// Depth used for a difficulty level: one ply per level.
    #[must_use]
    pub fn for_level(level: u32) -> Self {
        Self {
            depth: level.max(1),
            node_limit: None,
        }
    }

    /// Create a new config with custom depth.
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Create a new config with a node budget.
    #[must_use]
    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = Some(limit);
        self
    }
}
