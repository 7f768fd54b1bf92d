//! Thread-safe handle around a [`GraphCounter`].

use crate::counter::{CounterError, GraphCounter};
use crate::types::Snapshot;
use std::sync::{Arc, Mutex, MutexGuard};

/// A cloneable, lock-guarded counter for use across threads.
///
/// Both values live behind one mutex, so readers never see a node count
/// from one update paired with an edge count from another.
///
/// ```
/// use orchard::{SharedCounter, Snapshot};
///
/// let counter = SharedCounter::new();
/// let handle = counter.clone();
/// std::thread::spawn(move || handle.add_node(1).unwrap()).join().unwrap();
/// counter.add_node(2).unwrap();
///
/// assert_eq!(counter.snapshot(), Snapshot { nodes: 2, edges: 1 });
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedCounter {
    inner: Arc<Mutex<GraphCounter>>,
}

impl SharedCounter {
    /// Create an empty shared counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing counter.
    pub fn from_counter(counter: GraphCounter) -> Self {
        Self {
            inner: Arc::new(Mutex::new(counter)),
        }
    }

    // A panic while holding the lock cannot leave the pair half-written:
    // add_node commits both fields after all checks pass.
    fn lock(&self) -> MutexGuard<'_, GraphCounter> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Return the shared counter to the empty state.
    pub fn reset(&self) {
        self.lock().reset();
    }

    /// Insert a node and return the new node count.
    pub fn add_node(&self, id: i64) -> Result<u64, CounterError> {
        self.lock().add_node(id)
    }

    /// Number of edges implied since the last reset.
    pub fn edge_count(&self) -> u64 {
        self.lock().edge_count()
    }

    /// Number of nodes inserted since the last reset.
    pub fn node_count(&self) -> u64 {
        self.lock().node_count()
    }

    /// Read both values under a single lock.
    pub fn snapshot(&self) -> Snapshot {
        self.lock().snapshot()
    }
}
