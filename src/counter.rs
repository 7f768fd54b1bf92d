//! The graph counter: node and edge totals for an implicit chain.

use crate::types::Snapshot;
use log::{debug, trace, warn};

/// Errors that can occur during counter operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterError {
    /// Inserting another node would exceed the representable range.
    CounterOverflow { nodes: u64 },
}

impl std::fmt::Display for CounterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CounterError::CounterOverflow { nodes } => {
                write!(f, "counter overflow: cannot add a node after {} nodes", nodes)
            }
        }
    }
}

impl std::error::Error for CounterError {}

/// Tracks how many nodes have been inserted and how many edges they imply.
///
/// Every node after the first contributes exactly one edge, so the edge
/// count is always `max(node_count - 1, 0)`. Node ids are accepted but not
/// stored; the counter knows nothing about topology.
///
/// Overflow is an error: once `node_count` reaches `u64::MAX`, `add_node`
/// returns [`CounterError::CounterOverflow`] and leaves the state untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphCounter {
    nodes: u64,
    edges: u64,
}

impl GraphCounter {
    /// Create an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a counter that already holds `nodes` nodes.
    pub fn from_node_count(nodes: u64) -> Self {
        Self {
            nodes,
            edges: nodes.saturating_sub(1),
        }
    }

    /// Return to the empty state.
    pub fn reset(&mut self) {
        debug!("Resetting counter (was {} nodes, {} edges)", self.nodes, self.edges);
        self.nodes = 0;
        self.edges = 0;
    }

    /// Insert a node and return the new node count.
    ///
    /// `id` is a caller-supplied label; any value is accepted, including
    /// duplicates and negatives, and none of them affect the result.
    pub fn add_node(&mut self, id: i64) -> Result<u64, CounterError> {
        let nodes = self.nodes.checked_add(1).ok_or_else(|| {
            warn!("Rejecting node {}: node count at maximum", id);
            CounterError::CounterOverflow { nodes: self.nodes }
        })?;

        // nodes - 1 <= u64::MAX - 1, so this cannot overflow once nodes did not
        let edges = if nodes > 1 { self.edges + 1 } else { self.edges };

        self.nodes = nodes;
        self.edges = edges;
        trace!("Added node {}: {} nodes, {} edges", id, nodes, edges);

        Ok(nodes)
    }

    /// Number of edges implied since the last reset.
    pub fn edge_count(&self) -> u64 {
        self.edges
    }

    /// Number of nodes inserted since the last reset.
    pub fn node_count(&self) -> u64 {
        self.nodes
    }

    /// Copy both values out as a pair.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            nodes: self.nodes,
            edges: self.edges,
        }
    }
}

impl From<&GraphCounter> for Snapshot {
    fn from(counter: &GraphCounter) -> Self {
        counter.snapshot()
    }
}
