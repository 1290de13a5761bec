/*!
Dijkstra's algorithm for shortest paths with non-negative edge costs.

[`Dijkstra`] is a lazy iterator that settles nodes in order of non-decreasing distance from a
start node. The [`ShortestPath`] trait builds the value-level queries on top of it:
- [`ShortestPath::shortest_distances`] maps every reachable value to its distance,
- [`ShortestPath::shortest_path`] reconstructs one shortest path between two values.

Edge costs come from [`WeightedAdjacencyList`], so unweighted graphs are searched with unit costs.
Negative costs are a caller error and only checked in debug builds.
*/

use super::*;
use std::{cmp::Ordering, collections::BinaryHeap, hash::Hash};

use fxhash::FxHashMap;
use tracing::warn;

/// Entry in the priority queue of [`Dijkstra`].
///
/// Ordered by distance (lower distance = higher priority).
#[derive(Debug, Clone, Copy)]
struct DijkstraEntry {
    node: Node,
    distance: Weight,
}

impl PartialEq for DijkstraEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DijkstraEntry {}

impl PartialOrd for DijkstraEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DijkstraEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior; ties go to the smaller position
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Single-source shortest path search.
///
/// Iterating yields `(node, distance)` for every node reachable from the start, in order of
/// non-decreasing distance. Once a node was yielded, its distance and predecessor are final.
pub struct Dijkstra<'a, G>
where
    G: WeightedAdjacencyList,
{
    graph: &'a G,
    start: Node,
    distances: Vec<Weight>,
    predecessors: Vec<Node>,
    settled: NodeBitSet,
    heap: BinaryHeap<DijkstraEntry>,
}

impl<'a, G> Dijkstra<'a, G>
where
    G: WeightedAdjacencyList,
{
    /// Creates a new search starting at position `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut distances = vec![Weight::INFINITY; graph.len()];
        distances[start as usize] = 0.0;

        Self {
            graph,
            start,
            distances,
            predecessors: vec![INVALID_NODE; graph.len()],
            settled: graph.vertex_bitset_unset(),
            heap: BinaryHeap::from([DijkstraEntry {
                node: start,
                distance: 0.0,
            }]),
        }
    }

    /// Returns the position the search started at
    pub fn start(&self) -> Node {
        self.start
    }

    /// Returns the best distance to `u` found so far; final once `u` was yielded.
    /// `None` if `u` was not reached yet.
    pub fn distance_to(&self, u: Node) -> Option<Weight> {
        let distance = self.distances[u as usize];
        distance.is_finite().then_some(distance)
    }

    /// Runs the search until `target` is settled and returns its distance.
    /// Returns `None` if `target` is unreachable.
    pub fn run_until(&mut self, target: Node) -> Option<Weight> {
        if self.settled.get_bit(target) {
            return self.distance_to(target);
        }
        self.find(|&(u, _)| u == target).map(|(_, distance)| distance)
    }

    /// Returns the positions on the best path from the start to `u` found so far, both
    /// inclusive. Final once `u` was yielded. `None` if `u` was not reached yet.
    pub fn path_to(&self, u: Node) -> Option<Vec<Node>> {
        self.distance_to(u)?;

        let mut path = vec![u];
        let mut current = u;
        while current != self.start {
            current = self.predecessors[current as usize];
            path.push(current);
        }
        path.reverse();
        Some(path)
    }
}

impl<G> Iterator for Dijkstra<'_, G>
where
    G: WeightedAdjacencyList,
{
    type Item = (Node, Weight);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(DijkstraEntry { node: u, distance }) = self.heap.pop() {
            if self.settled.set_bit(u) {
                continue;
            }

            for (v, cost) in self.graph.weighted_neighbors_of(u) {
                debug_assert!(cost >= 0.0, "negative edge cost {cost} on ({u},{v})");
                let candidate = distance + cost;
                if candidate < self.distances[v as usize] {
                    self.distances[v as usize] = candidate;
                    self.predecessors[v as usize] = u;
                    self.heap.push(DijkstraEntry {
                        node: v,
                        distance: candidate,
                    });
                }
            }

            return Some((u, distance));
        }

        None
    }
}

/// Value-level shortest path queries
pub trait ShortestPath: WeightedAdjacencyList + NodeValues {
    /// Returns the distance from `start` to every value reachable from it, including `start`
    /// itself at distance `0`. The map is empty if no node holds `start`.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = WeightedDigraph::new();
    /// g.insert_all(['a', 'b', 'c']);
    /// g.insert_edge(&'a', &'b', 4.0);
    /// g.insert_edge(&'a', &'c', 1.0);
    /// g.insert_edge(&'c', &'b', 2.0);
    ///
    /// let distances = g.shortest_distances(&'a');
    /// assert_eq!(distances[&'b'], 3.0);
    /// assert_eq!(distances.len(), 3);
    /// ```
    fn shortest_distances(&self, start: &Self::Value) -> FxHashMap<&Self::Value, Weight>
    where
        Self::Value: Eq + Hash,
    {
        match self.position_of(start) {
            Some(s) => Dijkstra::new(self, s)
                .map(|(u, distance)| (self.value_of(u), distance))
                .collect(),
            None => FxHashMap::default(),
        }
    }

    /// Returns the values on a shortest path from `start` to `end`, both inclusive.
    ///
    /// The path is empty if `end` is unreachable from `start`, or if an endpoint is not in the
    /// graph; the latter is reported as a warning.
    fn shortest_path(&self, start: &Self::Value, end: &Self::Value) -> Vec<&Self::Value> {
        let Some(s) = self.position_of(start) else {
            warn!("start node of shortest path query is not in this graph");
            return Vec::new();
        };
        let Some(t) = self.position_of(end) else {
            warn!("end node of shortest path query is not in this graph");
            return Vec::new();
        };

        let mut search = Dijkstra::new(self, s);
        if search.run_until(t).is_none() {
            return Vec::new();
        }

        search
            .path_to(t)
            .map(|path| path.into_iter().map(|u| self.value_of(u)).collect())
            .unwrap_or_default()
    }
}

impl<G> ShortestPath for G where G: WeightedAdjacencyList + NodeValues {}
