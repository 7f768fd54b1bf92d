//! Orchard: a node/edge counter for an implicitly chained graph.
//!
//! Nodes are inserted one at a time; every node after the first implies one
//! edge. The counter never stores node ids or topology.
//!
//! # Example
//!
//! ```
//! use orchard::GraphCounter;
//!
//! let mut counter = GraphCounter::new();
//! assert_eq!(counter.add_node(1).unwrap(), 1);
//! assert_eq!(counter.add_node(2).unwrap(), 2);
//! assert_eq!(counter.edge_count(), 1);
//!
//! counter.reset();
//! assert_eq!(counter.edge_count(), 0);
//! ```

mod counter;
mod shared;
mod types;

// Re-export public API
pub use counter::{CounterError, GraphCounter};
pub use shared::SharedCounter;
pub use types::Snapshot;
