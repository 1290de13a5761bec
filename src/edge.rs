use std::fmt::{Debug, Display};

use crate::node::Node;

/// An edge between two node positions, always directed from `.0` to `.1`
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// Weight carried by edges of a [`WeightedDigraph`](crate::repr::WeightedDigraph)
pub type Weight = f64;

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }
}

/// Payload stored alongside every adjacency entry.
///
/// `()` selects the unweighted graph variant, [`Weight`] the weighted one. The payload also
/// decides what adjacency iterators yield: the target's value alone (`()`) or the target's value
/// paired with the edge weight ([`Weight`]).
pub trait EdgeWeight: Copy + PartialEq + Debug + 'static {
    /// Item yielded for a neighbor whose value is accessed through `V`
    type Entry<V>;

    /// Combines the (borrowed) value of a neighbor with the edge payload
    fn entry<V>(value: V, weight: Self) -> Self::Entry<V>;

    /// Numeric weight of the edge, `None` for unweighted edges
    fn weight(&self) -> Option<Weight>;

    /// Returns *true* if both payloads are the same weight.
    /// Must be reflexive, even where `==` is not.
    fn same_weight(&self, other: &Self) -> bool {
        self == other
    }

    /// Cost of traversing the edge in shortest-path computations.
    /// Unweighted edges cost `1`.
    fn cost(&self) -> Weight {
        self.weight().unwrap_or(1.0)
    }
}

impl EdgeWeight for () {
    type Entry<V> = V;

    #[inline]
    fn entry<V>(value: V, _: Self) -> V {
        value
    }

    #[inline]
    fn weight(&self) -> Option<Weight> {
        None
    }
}

impl EdgeWeight for Weight {
    type Entry<V> = (V, Weight);

    #[inline]
    fn entry<V>(value: V, weight: Self) -> (V, Weight) {
        (value, weight)
    }

    #[inline]
    fn weight(&self) -> Option<Weight> {
        Some(*self)
    }

    /// Compares by `total_cmp`: `NaN` equals itself, `0.0` and `-0.0` differ.
    #[inline]
    fn same_weight(&self, other: &Self) -> bool {
        self.total_cmp(other).is_eq()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_display() {
        assert_eq!(format!("{}", Edge(3, 7)), "(3,7)");
        assert_eq!(format!("{:?}", Edge(3, 7).reverse()), "(7,3)");
        assert!(Edge(2, 2).is_loop());
    }

    #[test]
    fn entries() {
        assert_eq!(<() as EdgeWeight>::entry("a", ()), "a");
        assert_eq!(<Weight as EdgeWeight>::entry("a", 2.5), ("a", 2.5));
        assert_eq!(().cost(), 1.0);
        assert_eq!(4.0_f64.cost(), 4.0);
        assert_eq!(().weight(), None);
    }

    #[test]
    fn same_weight_is_total() {
        assert!(().same_weight(&()));
        assert!(1.5_f64.same_weight(&1.5));
        assert!(!1.5_f64.same_weight(&2.5));
        assert!(Weight::NAN.same_weight(&Weight::NAN));
        assert!(!0.0_f64.same_weight(&-0.0));
    }
}
