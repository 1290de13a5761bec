/*!
# Directed Graph Container

[`DirectedGraph`] owns a node store of unique values and one [`Neighborhood`] per node.
The edge payload `W` selects the variant:

- [`Digraph<T>`] (`W = ()`) is the unweighted directed graph,
- [`WeightedDigraph<T>`] (`W = Weight`) attaches an `f64` weight to every edge.

Values and neighborhoods are kept in two parallel vectors: position `u` holds `values[u]` and the
outgoing edges `nbs[u]`. Edges refer to their target by position, so erasing a node renumbers
every adjacency entry pointing past it.

## Invalidation
Positions are not stable. Inserting keeps all positions, erasing shifts every later position down
by the number of erased nodes. Iterators and cursors borrow the graph and are therefore invalidated
statically by any mutation.

## Uniqueness
Values are unique under `PartialEq`. Mutating a value through [`IndexMut`], [`DirectedGraph::iter_mut`]
or a mutable cursor into a value that compares equal to another stored value is a logic error,
similar to mutating the key of a `HashMap`: it is not memory-unsafe, but lookups by value become
unspecified.
*/

use std::{
    hash::Hash,
    mem,
    ops::{Index, IndexMut, Range},
};

use fxhash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

use crate::testing::test_graph_ops;

use super::*;

/// A directed graph over unique values of type `T` with edge payload `W`.
///
/// ```
/// use lgraphs::prelude::*;
///
/// let mut graph = WeightedDigraph::new();
/// graph.insert_all(["a", "b", "c"]);
/// assert!(graph.insert_edge(&"a", &"b", 2.0));
/// assert!(graph.insert_edge(&"b", &"c", 0.5));
///
/// assert!(graph.erase(&"a"));
/// assert_eq!(graph.len(), 2);
/// assert_eq!(graph[0], "b");
/// assert_eq!(graph.weight_of(&"b", &"c"), Some(0.5));
/// ```
#[derive(Clone, Debug)]
pub struct DirectedGraph<T, W: EdgeWeight = ()> {
    pub(crate) values: Vec<T>,
    pub(crate) nbs: Vec<Neighborhood<W>>,
    num_edges: NumEdges,
    config: StorageConfig,
}

/// Unweighted directed graph
pub type Digraph<T> = DirectedGraph<T, ()>;

/// Directed graph with an `f64` weight on every edge
pub type WeightedDigraph<T> = DirectedGraph<T, Weight>;

impl<T, W: EdgeWeight> Default for DirectedGraph<T, W> {
    fn default() -> Self {
        Self::with_config(StorageConfig::default())
    }
}

impl<T, W: EdgeWeight> DirectedGraph<T, W> {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph whose memory strategy is given by `config`
    pub fn with_config(config: StorageConfig) -> Self {
        Self {
            values: Vec::with_capacity(config.get_node_capacity()),
            nbs: Vec::with_capacity(config.get_node_capacity()),
            num_edges: 0,
            config,
        }
    }

    /// Creates an empty graph with space for at least `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(StorageConfig::new().node_capacity(capacity))
    }

    /// Returns the configuration the graph was created with
    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Reserves space for at least `additional` more nodes
    pub fn reserve(&mut self, additional: usize) {
        self.values.reserve(additional);
        self.nbs.reserve(additional);
    }

    /// Upper bound on the number of nodes a graph can hold
    pub fn max_size(&self) -> NumNodes {
        INVALID_NODE
    }

    /// Removes all nodes and edges.
    /// Memory is kept for reuse unless the config asks to shrink on clear.
    pub fn clear(&mut self) {
        self.values.clear();
        self.nbs.clear();
        self.num_edges = 0;

        if self.config.get_shrink_on_clear() {
            self.values.shrink_to_fit();
            self.nbs.shrink_to_fit();
        }
    }

    /// Exchanges the contents of two graphs without touching any node
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Returns all values in store order
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Returns an iterator over all values in store order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.values)
    }

    /// Returns an iterator over mutable references to all values in store order
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.values)
    }

    /// Returns the value at position `u`, if it exists
    pub fn get(&self, u: Node) -> Option<&T> {
        self.values.get(u as usize)
    }

    /// Returns the value at position `u` mutably, if it exists
    pub fn get_mut(&mut self, u: Node) -> Option<&mut T> {
        self.values.get_mut(u as usize)
    }

    /// Bounds-checked access to the value at position `u`
    pub fn at(&self, u: Node) -> Result<&T> {
        let len = self.values.len();
        self.values.get(u as usize).ok_or(GraphError::OutOfRange {
            index: u as usize,
            len,
        })
    }

    /// Bounds-checked mutable access to the value at position `u`
    pub fn at_mut(&mut self, u: Node) -> Result<&mut T> {
        let len = self.values.len();
        self.values.get_mut(u as usize).ok_or(GraphError::OutOfRange {
            index: u as usize,
            len,
        })
    }

    /// Returns the outgoing edges of the node at position `u`.
    /// ** Panics if `u >= n` **
    pub fn neighborhood_of(&self, u: Node) -> &Neighborhood<W> {
        &self.nbs[u as usize]
    }

    /// Returns an iterator over the out-neighbors of the node at position `u`.
    /// ** Panics if `u >= n` **
    pub fn neighbors_at(&self, u: Node) -> Neighbors<'_, T, W> {
        Neighbors::new(&self.values, &self.nbs[u as usize])
    }

    /// Returns an iterator over mutable references to the out-neighbors of the node at position `u`.
    /// ** Panics if `u >= n` **
    pub fn neighbors_at_mut(&mut self, u: Node) -> NeighborsMut<'_, T, W> {
        NeighborsMut::new(&mut self.values, &self.nbs[u as usize])
    }

    /// Inserts the edge `(u, v)` with payload `weight`.
    /// Returns *true* if the edge did not exist before; otherwise its payload is overwritten.
    /// ** Panics if `u >= n` or `v >= n` **
    pub fn insert_edge_at(&mut self, u: Node, v: Node, weight: W) -> bool {
        assert!((v as usize) < self.values.len());
        let inserted = self.nbs[u as usize].insert(v, weight);
        if inserted {
            self.num_edges += 1;
        }
        trace!(u, v, ?weight, inserted, "insert edge");
        inserted
    }

    /// Removes the edge `(u, v)`. Returns *true* if it existed.
    /// ** Panics if `u >= n` **
    pub fn erase_edge_at(&mut self, u: Node, v: Node) -> bool {
        if self.nbs[u as usize].try_remove_neighbor(v) {
            self.num_edges -= 1;
            true
        } else {
            false
        }
    }

    /// Removes the node at position `u` together with all its incident edges and returns its value.
    /// Every later node moves one position down. Returns `None` if `u >= n`.
    pub fn remove_at(&mut self, u: Node) -> Option<T> {
        if u as usize >= self.values.len() {
            return None;
        }

        let out_edges = self.nbs.remove(u as usize).num_of_neighbors();
        let value = self.values.remove(u as usize);
        self.renumber_after_removal(u..u + 1, out_edges);
        Some(value)
    }

    /// Removes the node at position `pos` and returns the position of its successor, i.e. `pos`.
    /// Erasing at or past the end is a no-op returning `n`.
    pub fn erase_at(&mut self, pos: Node) -> Node {
        let len = self.number_of_nodes();
        if pos >= len {
            return len;
        }

        self.remove_at(pos);
        pos
    }

    /// Removes all nodes in `range` (clamped to `0..n`) with a single renumbering pass.
    /// Returns the position of the first node after the range, i.e. the clamped start.
    pub fn erase_range(&mut self, range: Range<Node>) -> Node {
        let len = self.number_of_nodes();
        let start = range.start.min(len);
        let end = range.end.min(len);
        if start >= end {
            return start;
        }

        let out_edges = self
            .nbs
            .drain(start as usize..end as usize)
            .map(|nbs| nbs.num_of_neighbors())
            .sum();
        self.values.drain(start as usize..end as usize);
        self.renumber_after_removal(start..end, out_edges);
        start
    }

    /// Updates all remaining neighborhoods after the positions in `removed` were deleted from the
    /// store. `out_edges` is the number of edges that started in the deleted nodes.
    fn renumber_after_removal(&mut self, removed: Range<Node>, out_edges: NumEdges) {
        let in_edges: NumEdges = self
            .nbs
            .iter_mut()
            .map(|nbs| nbs.renumber_after_removal(removed.clone()))
            .sum();
        self.num_edges -= out_edges + in_edges;

        debug!(
            start = removed.start,
            end = removed.end,
            dropped_edges = out_edges + in_edges,
            remaining_nodes = self.values.len(),
            "erased nodes"
        );
    }

    /// Compares structure and values of both graphs.
    /// If `with_weights` is set, corresponding edges must also carry equal payloads.
    fn structurally_equal(&self, other: &Self, with_weights: bool) -> bool
    where
        T: PartialEq,
    {
        if self.values.len() != other.values.len() || self.num_edges != other.num_edges {
            return false;
        }

        // Values are unique and both stores have equal size, so this is a bijection
        let mut mapping = Vec::with_capacity(self.values.len());
        for value in &self.values {
            match other.position_of(value) {
                Some(v) => mapping.push(v),
                None => return false,
            }
        }

        self.nbs.iter().zip(&mapping).all(|(nbs, &mapped)| {
            let other_nbs = &other.nbs[mapped as usize];
            nbs.len() == other_nbs.len()
                && nbs.iter().all(|(v, weight)| {
                    other_nbs
                        .weight_of(mapping[v as usize])
                        .is_some_and(|stored| !with_weights || stored.same_weight(&weight))
                })
        })
    }
}

impl<T: PartialEq, W: EdgeWeight> DirectedGraph<T, W> {
    /// Returns *true* if a node holds `value`
    pub fn contains(&self, value: &T) -> bool {
        self.position_of(value).is_some()
    }

    /// Appends `value` as a new node unless an equal value is already stored.
    /// Returns the position of the node holding the value and whether it was newly inserted.
    /// ** Panics if the graph already holds `max_size()` nodes **
    pub fn insert(&mut self, value: T) -> (Node, bool) {
        if let Some(u) = self.position_of(&value) {
            return (u, false);
        }

        let u = node_from_index(self.values.len());
        self.values.push(value);
        self.nbs.push(Neighborhood::new());
        trace!(u, "insert node");
        (u, true)
    }

    /// Inserts all values in order, skipping duplicates.
    /// Returns the number of newly inserted nodes.
    pub fn insert_all<I>(&mut self, values: I) -> NumNodes
    where
        I: IntoIterator<Item = T>,
    {
        values
            .into_iter()
            .map(|value| self.insert(value).1 as NumNodes)
            .sum()
    }

    /// Removes the node holding `value` together with all incident edges.
    /// Returns *false* if no node holds `value`.
    pub fn erase(&mut self, value: &T) -> bool {
        match self.position_of(value) {
            Some(u) => self.remove_at(u).is_some(),
            None => false,
        }
    }

    /// Inserts the edge `from -> to` with payload `weight`.
    /// Returns *false* if an endpoint is missing or the edge already existed (its payload is
    /// overwritten in the latter case).
    pub fn insert_edge_with(&mut self, from: &T, to: &T, weight: W) -> bool {
        let (Some(u), Some(v)) = (self.position_of(from), self.position_of(to)) else {
            return false;
        };
        self.insert_edge_at(u, v, weight)
    }

    /// Removes the edge `from -> to`.
    /// Returns *false* only if an endpoint is missing: a missing edge between existing endpoints
    /// still counts as erased.
    pub fn erase_edge(&mut self, from: &T, to: &T) -> bool {
        let (Some(u), Some(v)) = (self.position_of(from), self.position_of(to)) else {
            return false;
        };
        self.erase_edge_at(u, v);
        true
    }

    /// Returns *true* if both endpoints exist and the edge `from -> to` exists
    pub fn contains_edge(&self, from: &T, to: &T) -> bool {
        match (self.position_of(from), self.position_of(to)) {
            (Some(u), Some(v)) => self.has_edge(u, v),
            _ => false,
        }
    }

    /// Returns an iterator over the out-neighbors of the node holding `value`.
    /// The iterator is empty if no node holds `value`.
    pub fn neighbors(&self, value: &T) -> Neighbors<'_, T, W> {
        self.position_of(value)
            .map(|u| self.neighbors_at(u))
            .unwrap_or_default()
    }

    /// Returns an iterator over mutable references to the out-neighbors of the node holding
    /// `value`. The iterator is empty if no node holds `value`.
    pub fn neighbors_mut(&mut self, value: &T) -> NeighborsMut<'_, T, W> {
        match self.position_of(value) {
            Some(u) => self.neighbors_at_mut(u),
            None => NeighborsMut::default(),
        }
    }

    /// Returns the values of all out-neighbors of `value`; empty if no node holds `value`
    pub fn adjacent_values(&self, value: &T) -> FxHashSet<&T>
    where
        T: Eq + Hash,
    {
        self.position_of(value)
            .map(|u| {
                self.nbs[u as usize]
                    .targets()
                    .map(|v| &self.values[v as usize])
                    .collect::<FxHashSet<_>>()
            })
            .unwrap_or_default()
    }

    /// Like `==`, but corresponding edges must also carry the same payload as decided by
    /// [`EdgeWeight::same_weight`], so a graph with `NaN` weights equals itself.
    pub fn eq_with_weights(&self, other: &Self) -> bool {
        self.structurally_equal(other, true)
    }
}

impl<T: PartialEq> DirectedGraph<T, ()> {
    /// Inserts the edge `from -> to`.
    /// Returns *false* if an endpoint is missing or the edge already existed.
    pub fn insert_edge(&mut self, from: &T, to: &T) -> bool {
        self.insert_edge_with(from, to, ())
    }
}

impl<T: PartialEq> DirectedGraph<T, Weight> {
    /// Inserts the edge `from -> to` with the given weight.
    /// Returns *false* if an endpoint is missing or the edge already existed; in the latter case
    /// the stored weight is replaced.
    pub fn insert_edge(&mut self, from: &T, to: &T, weight: Weight) -> bool {
        self.insert_edge_with(from, to, weight)
    }

    /// Returns the weight of the edge `from -> to`, if both endpoints and the edge exist
    pub fn weight_of(&self, from: &T, to: &T) -> Option<Weight> {
        let (u, v) = (self.position_of(from)?, self.position_of(to)?);
        self.nbs[u as usize].weight_of(v)
    }

    /// Returns the values of all out-neighbors of `value` mapped to the weight of the connecting
    /// edge; empty if no node holds `value`
    pub fn adjacent_values_and_weights(&self, value: &T) -> FxHashMap<&T, Weight>
    where
        T: Eq + Hash,
    {
        self.position_of(value)
            .map(|u| {
                self.nbs[u as usize]
                    .iter()
                    .map(|(v, weight)| (&self.values[v as usize], weight))
                    .collect::<FxHashMap<_, _>>()
            })
            .unwrap_or_default()
    }
}

impl<T: PartialEq, W: EdgeWeight> PartialEq for DirectedGraph<T, W> {
    /// Two graphs are equal if they hold the same values and every value has the same set of
    /// adjacent values in both. Positions and edge weights are not compared.
    fn eq(&self, other: &Self) -> bool {
        self.structurally_equal(other, false)
    }
}

impl<T: Eq, W: EdgeWeight> Eq for DirectedGraph<T, W> {}

impl<T, W: EdgeWeight> Index<Node> for DirectedGraph<T, W> {
    type Output = T;

    fn index(&self, u: Node) -> &T {
        &self.values[u as usize]
    }
}

impl<T, W: EdgeWeight> IndexMut<Node> for DirectedGraph<T, W> {
    fn index_mut(&mut self, u: Node) -> &mut T {
        &mut self.values[u as usize]
    }
}

impl<T: PartialEq, W: EdgeWeight> Extend<T> for DirectedGraph<T, W> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<T: PartialEq, W: EdgeWeight> FromIterator<T> for DirectedGraph<T, W> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<T, W: EdgeWeight> GraphNodeOrder for DirectedGraph<T, W> {
    fn number_of_nodes(&self) -> NumNodes {
        self.values.len() as NumNodes
    }
}

impl<T, W: EdgeWeight> GraphEdgeOrder for DirectedGraph<T, W> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<T, W: EdgeWeight> AdjacencyList for DirectedGraph<T, W> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].targets()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].num_of_neighbors()
    }
}

impl<T, W: EdgeWeight> WeightedAdjacencyList for DirectedGraph<T, W> {
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.nbs[u as usize]
            .iter()
            .map(|(v, weight)| (v, weight.cost()))
    }
}

impl<T, W: EdgeWeight> AdjacencyTest for DirectedGraph<T, W> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].has_neighbor(v)
    }
}

impl<T: PartialEq, W: EdgeWeight> NodeValues for DirectedGraph<T, W> {
    type Value = T;

    fn value_of(&self, u: Node) -> &T {
        &self.values[u as usize]
    }

    fn position_of(&self, value: &T) -> Option<Node> {
        self.values
            .iter()
            .position(|x| x == value)
            .map(|u| u as Node)
    }
}

// ---------- Testing ----------

test_graph_ops!(
    test_digraph,
    Digraph<u32>,
    |_: &mut Pcg64Mcg| (),
    (
        GraphNew,
        AdjacencyList,
        EdgeEditing,
        NodeErasure,
        RangeErasure,
        Equality
    )
);

test_graph_ops!(
    test_weighted_digraph,
    WeightedDigraph<u32>,
    |rng: &mut Pcg64Mcg| rng.random_range(0.0..10.0),
    (
        GraphNew,
        AdjacencyList,
        EdgeEditing,
        NodeErasure,
        RangeErasure,
        Equality
    )
);

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::testing::reference_graph;

    fn targets_in_range<T, W: EdgeWeight>(graph: &DirectedGraph<T, W>) -> bool {
        graph.edges().all(|Edge(_, v)| v < graph.number_of_nodes())
    }

    #[test]
    fn insert_reports_duplicates() {
        let mut graph: Digraph<&str> = Digraph::new();
        assert_eq!(graph.insert("a"), (0, true));
        assert_eq!(graph.insert("b"), (1, true));
        assert_eq!(graph.insert("a"), (0, false));
        assert_eq!(graph.len(), 2);

        assert_eq!(graph.insert_all(["c", "b", "d"]), 2);
        assert_eq!(graph.as_slice(), ["a", "b", "c", "d"]);
    }

    #[test]
    fn reference_scenario() {
        let mut graph = reference_graph();
        assert_eq!(graph.len(), 8);
        assert_eq!(graph.number_of_edges(), 10);

        assert!(graph.erase_edge(&44, &88));
        assert!(graph.erase(&88));
        assert_eq!(graph.len(), 7);
        assert_eq!(graph.number_of_edges(), 9);
        assert!(graph.edges().all(|Edge(_, v)| v != 7));
        assert!(targets_in_range(&graph));

        assert!(!graph.contains(&88));
        assert!(graph.contains_edge(&77, &44));
    }

    #[test]
    fn erase_renumbers_targets() {
        let mut graph = reference_graph();
        let before = graph.edges().collect_vec();

        // 33 sits at position 2
        assert!(graph.erase(&33));

        let expected = before
            .into_iter()
            .filter(|&Edge(u, v)| u != 2 && v != 2)
            .map(|Edge(u, v)| Edge(u - (u > 2) as Node, v - (v > 2) as Node))
            .collect_vec();
        assert_eq!(graph.edges().collect_vec(), expected);
        assert_eq!(graph.number_of_edges(), expected.len() as NumEdges);

        // Value-level view is unchanged apart from the erased node
        assert_eq!(
            graph.adjacent_values_and_weights(&22),
            FxHashMap::from_iter([(&66, 1.0)])
        );
        assert_eq!(graph.weight_of(&77, &44), Some(1.0));
    }

    #[test]
    fn erase_absent_is_noop() {
        let mut graph = reference_graph();
        let copy = graph.clone();
        assert!(!graph.erase(&99));
        assert!(graph.eq_with_weights(&copy));
        assert_eq!(graph.as_slice(), copy.as_slice());
    }

    #[test]
    fn erase_at_and_range() {
        let mut graph = reference_graph();
        assert_eq!(graph.erase_at(8), 8);
        assert_eq!(graph.erase_at(100), 8);
        assert_eq!(graph.erase_at(0), 0);
        assert_eq!(graph[0], 22);

        // erases 33, 44, 55
        assert_eq!(graph.erase_range(1..4), 1);
        assert_eq!(graph.as_slice(), [22, 66, 77, 88]);
        assert_eq!(graph.iter_edges_by_value(), [(22, 66), (66, 77)]);
        assert!(targets_in_range(&graph));

        assert_eq!(graph.erase_range(3..10), 3);
        assert_eq!(graph.erase_range(5..9), 3);
        assert_eq!(graph.as_slice(), [22, 66, 77]);
    }

    #[test]
    fn remove_at_returns_value() {
        let mut graph = reference_graph();
        assert_eq!(graph.remove_at(1), Some(22));
        assert_eq!(graph.remove_at(7), None);
        assert_eq!(graph.number_of_edges(), 7);
    }

    #[test]
    fn edges_require_endpoints() {
        let mut graph: Digraph<u32> = [1, 2].into_iter().collect();
        assert!(!graph.insert_edge(&1, &3));
        assert!(!graph.insert_edge(&3, &1));
        assert!(!graph.erase_edge(&1, &3));
        assert!(graph.has_no_edges());

        assert!(graph.insert_edge(&1, &2));
        assert!(!graph.insert_edge(&1, &2));
        assert!(graph.insert_edge(&2, &2));
        assert!(graph.has_self_loop(1));
        assert_eq!(graph.number_of_edges(), 2);

        assert!(graph.erase_edge(&1, &2));
        assert!(graph.erase_edge(&1, &2));
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn reinsert_overwrites_weight() {
        let mut graph = reference_graph();
        assert!(!graph.insert_edge(&11, &22, 7.5));
        assert_eq!(graph.weight_of(&11, &22), Some(7.5));
        assert_eq!(graph.number_of_edges(), 10);
        assert_eq!(graph.weight_of(&11, &33), None);
        assert_eq!(graph.weight_of(&11, &99), None);
    }

    #[test]
    fn adjacent_values_of_22() {
        let graph = reference_graph();
        assert_eq!(graph.adjacent_values(&22), FxHashSet::from_iter([&33, &66]));
        assert!(graph.adjacent_values(&88).is_empty());
        assert!(graph.adjacent_values(&99).is_empty());
        assert_eq!(graph.neighbors(&22).collect_vec(), [(&33, 3.0), (&66, 1.0)]);
    }

    #[test]
    fn equality_ignores_positions() {
        let graph = reference_graph();

        let mut reversed = WeightedDigraph::new();
        reversed.insert_all(graph.iter().rev().copied());
        for Edge(u, v) in graph.edges().collect_vec().into_iter().rev() {
            reversed.insert_edge(&graph[u], &graph[v], 1.0);
        }

        assert_eq!(graph, reversed);
        assert_eq!(reversed, graph);
        assert!(!graph.eq_with_weights(&reversed));

        let mut other = reversed.clone();
        other.erase_edge(&11, &22);
        other.insert_edge(&22, &11, 2.0);
        assert_ne!(graph, other);

        other.erase_edge(&22, &11);
        other.insert(99);
        assert_ne!(graph, other);
    }

    #[test]
    fn nan_weights_compare_equal_to_themselves() {
        let mut graph = reference_graph();
        graph.insert_edge(&88, &11, Weight::NAN);

        let copy = graph.clone();
        assert!(graph.eq_with_weights(&graph));
        assert!(graph.eq_with_weights(&copy));

        let mut other = copy.clone();
        other.insert_edge(&88, &11, 1.0);
        assert!(!graph.eq_with_weights(&other));
        assert_eq!(graph, other);
    }

    #[test]
    fn positional_access() {
        let mut graph: Digraph<char> = "xyz".chars().collect();
        assert_eq!(graph[1], 'y');
        assert_eq!(graph.get(2), Some(&'z'));
        assert_eq!(graph.get(3), None);
        assert_eq!(graph.at(0), Ok(&'x'));
        assert_eq!(
            graph.at(3),
            Err(GraphError::OutOfRange { index: 3, len: 3 })
        );

        *graph.at_mut(0).unwrap() = 'a';
        graph[1] = 'b';
        *graph.get_mut(2).unwrap() = 'c';
        assert_eq!(graph.as_slice(), ['a', 'b', 'c']);
        assert!(graph.at_mut(5).is_err());
    }

    #[test]
    fn clear_and_swap() {
        let config = StorageConfig::new().node_capacity(16).shrink_on_clear(true);
        let mut graph = reference_graph();
        let mut other: WeightedDigraph<u32> = WeightedDigraph::with_config(config);
        other.insert(1);

        graph.swap(&mut other);
        assert_eq!(graph.len(), 1);
        assert_eq!(other.len(), 8);
        assert_eq!(graph.config(), &config);

        graph.clear();
        assert!(graph.is_empty());
        assert!(graph.has_no_edges());

        other.clear();
        assert!(other.is_empty());
        assert_eq!(other.number_of_edges(), 0);
        assert_eq!(other.max_size(), INVALID_NODE);
    }

    #[test]
    fn position_level_traits() {
        let graph = reference_graph();
        assert_eq!(graph.degree_of(0), 2);
        assert_eq!(graph.max_degree(), 2);
        assert_eq!(graph.neighbors_of(1).collect_vec(), [2, 5]);
        assert_eq!(graph.weighted_neighbors_of(0).collect_vec(), [(1, 2.0), (4, 1.0)]);
        assert_eq!(graph.value_of(3), &44);
        assert_eq!(graph.values().copied().collect_vec(), graph.as_slice());
        assert_eq!(graph.position_of(&77), Some(6));

        let unweighted: Digraph<u32> = [5, 6].into_iter().collect();
        assert!(unweighted.neighbors_at(0).next().is_none());
    }

    impl<T: Copy, W: EdgeWeight> DirectedGraph<T, W> {
        fn iter_edges_by_value(&self) -> Vec<(T, T)> {
            self.edges()
                .map(|Edge(u, v)| (self[u], self[v]))
                .collect_vec()
        }
    }
}
