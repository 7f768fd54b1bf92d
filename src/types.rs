//! Plain data types for Orchard counters.

use serde::Serialize;

/// A point-in-time copy of a counter's two values.
///
/// Always taken as a pair, so `edges == nodes.saturating_sub(1)` holds for
/// any snapshot produced by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Snapshot {
    /// Nodes inserted since the last reset
    pub nodes: u64,

    /// Edges implied by those insertions
    pub edges: u64,
}

impl Snapshot {
    /// True when the pair satisfies the chain invariant.
    pub fn is_consistent(&self) -> bool {
        self.edges == self.nodes.saturating_sub(1)
    }
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "nodes={} edges={}", self.nodes, self.edges)
    }
}
