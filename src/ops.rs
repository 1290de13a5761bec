//! Position-level graph traits.
//!
//! These traits describe a graph purely in terms of node positions (`0..n`) and are what the
//! algorithms in [`crate::algo`] are written against. Value-level operations (insert by value,
//! erase by value, ...) live on [`DirectedGraph`](crate::repr::DirectedGraph) itself.

use std::ops::Range;

use crate::{edge::*, node::*};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the range of all node positions.
    /// In contrast to `self.vertices()`, the range does not borrow `self`.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn has_no_edges(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the out-neighbors of a given vertex in ascending order.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of outgoing neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the out-degrees of all nodes
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum out-degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u).map(move |v| Edge(u, v))
    }

    /// Returns an iterator over all edges in the graph, grouped by source in store order.
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range().flat_map(move |u| self.edges_of(u))
    }
}

/// Adjacency with traversal costs attached to every edge
pub trait WeightedAdjacencyList: AdjacencyList {
    /// Returns an iterator over `(neighbor, cost)` of a given vertex in ascending neighbor order.
    /// ** Panics if `u >= n` **
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_;
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the egde (u,v) exists in the graph.
    /// ** Panics if `u >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns *true* if a self-loop (u,u) exists.
    /// ** Panics if `u >= n` **
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }
}

/// Maps node positions to the values stored at them and back
pub trait NodeValues: GraphNodeOrder {
    /// Type of the stored values
    type Value;

    /// Returns the value stored at position `u`
    /// ** Panics if `u >= n` **
    fn value_of(&self, u: Node) -> &Self::Value;

    /// Returns the position of the node holding `value`, if any
    fn position_of(&self, value: &Self::Value) -> Option<Node>;

    /// Returns an iterator over all values in store order
    fn values(&self) -> impl Iterator<Item = &Self::Value> + '_ {
        self.vertices().map(|u| self.value_of(u))
    }
}
