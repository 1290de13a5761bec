/// Memory strategy of a [`DirectedGraph`](super::DirectedGraph).
///
/// Configured via setters before being passed to
/// [`DirectedGraph::with_config`](super::DirectedGraph::with_config):
/// ```
/// use lgraphs::prelude::*;
///
/// let config = StorageConfig::new().node_capacity(64).shrink_on_clear(true);
/// let graph: Digraph<u32> = Digraph::with_config(config);
/// assert!(graph.is_empty());
/// assert_eq!(graph.config().get_node_capacity(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StorageConfig {
    /// Number of nodes reserved up front
    node_capacity: usize,
    /// Release the node store's memory on `clear()` instead of keeping it for reuse
    shrink_on_clear: bool,
}

impl StorageConfig {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of nodes the store reserves space for on construction
    pub fn node_capacity(mut self, capacity: usize) -> Self {
        self.node_capacity = capacity;
        self
    }

    /// If *true*, `clear()` releases the memory of the node store
    pub fn shrink_on_clear(mut self, shrink: bool) -> Self {
        self.shrink_on_clear = shrink;
        self
    }

    /// Returns the number of nodes reserved on construction
    pub fn get_node_capacity(&self) -> usize {
        self.node_capacity
    }

    /// Returns *true* if `clear()` releases memory
    pub fn get_shrink_on_clear(&self) -> bool {
        self.shrink_on_clear
    }
}
