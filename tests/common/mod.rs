//! Shared test infrastructure for Orchard integration tests.
//!
//! Provides CounterEnv helper for consistent test setup.

#![allow(dead_code)]

use orchard::{GraphCounter, Snapshot};

/// Test environment wrapping a freshly reset counter.
pub struct CounterEnv {
    pub counter: GraphCounter,
}

impl CounterEnv {
    /// Create a new test environment with an empty counter.
    pub fn new() -> Self {
        let mut counter = GraphCounter::new();
        counter.reset();
        Self { counter }
    }

    /// Start from a counter that already holds `nodes` nodes.
    pub fn with_nodes(nodes: u64) -> Self {
        Self {
            counter: GraphCounter::from_node_count(nodes),
        }
    }

    /// Add a node, expecting success.
    pub fn add(&mut self, id: i64) -> u64 {
        self.counter.add_node(id).expect("Failed to add node")
    }

    /// Add every id in order, returning the node count after each.
    pub fn add_all(&mut self, ids: &[i64]) -> Vec<u64> {
        ids.iter().map(|&id| self.add(id)).collect()
    }

    /// Current counts as a pair.
    pub fn snapshot(&self) -> Snapshot {
        self.counter.snapshot()
    }

    /// Assert that edges == max(nodes - 1, 0).
    pub fn assert_invariant(&self) {
        let nodes = self.counter.node_count();
        let edges = self.counter.edge_count();
        assert_eq!(
            edges,
            nodes.saturating_sub(1),
            "Invariant broken: {} nodes but {} edges",
            nodes,
            edges
        );
    }

    /// Assert the counter is back to its empty state.
    pub fn assert_empty(&self) {
        assert_eq!(self.snapshot(), Snapshot::default(), "Expected an empty counter");
    }
}

impl Default for CounterEnv {
    fn default() -> Self {
        Self::new()
    }
}
