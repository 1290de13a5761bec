/*!
Graph traversal algorithms.

This module provides:
- A generic traversal iterator [`TraversalSearch`] whose visiting order is decided by its
  frontier: a queue ([`VecDeque`]) yields a **BFS**, a stack ([`Vec`]) yields a **DFS**.
- [`TraversalValues`], which resolves the visited positions to the values stored at them.
- A high-level [`Traversal`] trait that exposes both directly as methods on graphs, started from
  a node *value*.

Nodes are marked as visited when they enter the frontier, so every reachable node is yielded
exactly once and the search runs in `O(n + m)`.
*/

use super::*;
use std::collections::VecDeque;

/// Abstraction for the traversal frontier data structure.
///
/// A `NodeSequencer` is responsible for storing the "to be visited"
/// nodes during a traversal. Different implementations determine
/// the traversal order:
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer<T>: Default {
    /// Creates a new sequencer initialized with a single node.
    fn init(u: T) -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    fn init(u: T) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    fn init(u: T) -> Self {
        vec![u]
    }
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit "frontier" (queue or stack) of nodes to visit
/// and a bitset of visited nodes. Yields node positions.
pub struct TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer<Node>,
{
    graph: &'a G,
    visited: NodeBitSet,
    sequencer: S,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>>;

/// A DFS traversal iterator over the graph, visiting nodes in
/// depth-first order from a given starting node.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>>;

impl<'a, G, S> TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer<Node>,
{
    /// Creates a new traversal iterator starting from position `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);
        Self {
            graph,
            visited,
            sequencer: S::init(start),
        }
    }

    /// Creates a traversal iterator that yields nothing
    pub fn empty(graph: &'a G) -> Self {
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            sequencer: S::default(),
        }
    }

    /// Returns the set of nodes that were visited (or are queued to be visited)
    pub fn visited(&self) -> &NodeBitSet {
        &self.visited
    }

    /// Checks if a given node `u` has already been visited.
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }

    /// Tries to restart the search at an yet unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert_eq!(self.sequencer.cardinality(), 0);
        match self.graph.vertices().find(|&u| !self.visited.get_bit(u)) {
            None => false,
            Some(u) => {
                self.visited.set_bit(u);
                self.sequencer.push(u);
                true
            }
        }
    }

    /// Resolves every visited position to the value stored at it
    pub fn values(self) -> TraversalValues<'a, G, S>
    where
        G: NodeValues,
    {
        TraversalValues { search: self }
    }
}

impl<G, S> Iterator for TraversalSearch<'_, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer<Node>,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.sequencer.pop()?;
        for v in self.graph.neighbors_of(u) {
            if !self.visited.set_bit(v) {
                self.sequencer.push(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let queued = self.sequencer.cardinality();
        (
            queued,
            Some(queued + self.graph.len() - self.visited.cardinality() as usize),
        )
    }
}

/// Iterator over the values of the nodes visited by a [`TraversalSearch`]
pub struct TraversalValues<'a, G, S>
where
    G: AdjacencyList + NodeValues,
    S: NodeSequencer<Node>,
{
    search: TraversalSearch<'a, G, S>,
}

impl<'a, G, S> Iterator for TraversalValues<'a, G, S>
where
    G: AdjacencyList + NodeValues,
    S: NodeSequencer<Node>,
{
    type Item = &'a G::Value;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.search.graph;
        self.search.next().map(|u| graph.value_of(u))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.search.size_hint()
    }
}

/// Provides traversal methods (BFS, DFS) started from a node value.
/// If no node holds the start value, the traversal is empty.
pub trait Traversal: AdjacencyList + NodeValues {
    /// Returns an iterator over the positions of all nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut g: Digraph<char> = "abc".chars().collect();
    /// g.insert_edge(&'b', &'c');
    /// g.insert_edge(&'b', &'a');
    ///
    /// let order: Vec<_> = g.bfs(&'b').collect();
    /// assert_eq!(order, vec![1, 0, 2]);
    /// ```
    fn bfs(&self, start: &Self::Value) -> BFS<'_, Self> {
        match self.position_of(start) {
            Some(u) => BFS::new(self, u),
            None => BFS::empty(self),
        }
    }

    /// Returns an iterator over the positions of all nodes reachable from `start`
    /// in **depth-first search (DFS) order**.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut g: Digraph<char> = "abc".chars().collect();
    /// g.insert_edge(&'a', &'b');
    /// g.insert_edge(&'b', &'c');
    ///
    /// let order: Vec<_> = g.dfs(&'a').collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn dfs(&self, start: &Self::Value) -> DFS<'_, Self> {
        match self.position_of(start) {
            Some(u) => DFS::new(self, u),
            None => DFS::empty(self),
        }
    }

    /// Returns an iterator over the values of all nodes reachable from `start` in BFS order
    fn bfs_values(&self, start: &Self::Value) -> TraversalValues<'_, Self, VecDeque<Node>> {
        self.bfs(start).values()
    }

    /// Returns an iterator over the values of all nodes reachable from `start` in DFS order
    fn dfs_values(&self, start: &Self::Value) -> TraversalValues<'_, Self, Vec<Node>> {
        self.dfs(start).values()
    }
}

impl<G> Traversal for G where G: AdjacencyList + NodeValues {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::reference_graph;
    use itertools::Itertools;

    #[test]
    fn bfs_order() {
        let graph = reference_graph();
        assert_eq!(
            graph.bfs_values(&11).copied().collect_vec(),
            [11, 22, 55, 33, 66, 77, 44, 88]
        );
        assert_eq!(graph.bfs(&11).collect_vec(), [0, 1, 4, 2, 5, 6, 3, 7]);
        assert_eq!(graph.bfs_values(&77).copied().collect_vec(), [77, 44, 88]);
        assert_eq!(graph.bfs_values(&88).copied().collect_vec(), [88]);
    }

    #[test]
    fn dfs_order() {
        let graph = reference_graph();
        assert_eq!(
            graph.dfs_values(&11).copied().collect_vec(),
            [11, 55, 77, 44, 88, 66, 22, 33]
        );
        assert_eq!(graph.dfs_values(&33).copied().collect_vec(), [33, 44, 88]);
    }

    #[test]
    fn absent_start_is_empty() {
        let graph = reference_graph();
        assert_eq!(graph.bfs(&45).next(), None);
        assert_eq!(graph.dfs_values(&45).next(), None);
    }

    #[test]
    fn restart_covers_all_nodes() {
        let mut graph = reference_graph();
        graph.insert(99);

        let mut search = BFS::new(&graph, 3);
        assert_eq!(search.by_ref().collect_vec(), [3, 7]);
        assert!(search.did_visit_node(7));
        assert!(!search.did_visit_node(0));

        let mut visited = 2;
        while search.try_restart_at_unvisited() {
            visited += search.by_ref().count();
        }
        assert_eq!(visited, graph.len());
        assert_eq!(search.visited().cardinality(), graph.number_of_nodes());
    }
}
