use std::{iter::Copied, ops::Range, slice::Iter};

use smallvec::SmallVec;

use super::*;

/// Number of adjacency entries stored inline before spilling to the heap
pub const INLINE_NEIGHBORS: usize = 4;

/// Outgoing edges of a single node.
///
/// Entries are `(target, weight)` pairs kept sorted by target and unique per target, so an edge
/// from `u` to `v` exists at most once. The weight is payload, not part of the key: inserting an
/// existing target again overwrites its weight.
#[derive(Clone, Debug, PartialEq)]
pub struct Neighborhood<W: EdgeWeight = ()>(SmallVec<[(Node, W); INLINE_NEIGHBORS]>);

impl<W: EdgeWeight> Default for Neighborhood<W> {
    fn default() -> Self {
        Self(SmallVec::new())
    }
}

impl<W: EdgeWeight> Neighborhood<W> {
    /// Creates an empty neighborhood
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of neighbors in the Neighborhood
    pub fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    /// Returns the number of neighbors as usize
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns *true* if there are no outgoing edges
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the entries sorted by target
    pub fn as_slice(&self) -> &[(Node, W)] {
        &self.0
    }

    /// Returns an iterator over all `(target, weight)` entries in ascending target order
    pub fn iter(&self) -> Copied<Iter<'_, (Node, W)>> {
        self.0.iter().copied()
    }

    /// Returns an iterator over all targets in ascending order
    pub fn targets(&self) -> impl DoubleEndedIterator<Item = Node> + ExactSizeIterator + '_ {
        self.0.iter().map(|&(v, _)| v)
    }

    fn search(&self, v: Node) -> std::result::Result<usize, usize> {
        self.0.binary_search_by_key(&v, |&(u, _)| u)
    }

    /// Returns *true* if `v` is in the Neighborhood
    pub fn has_neighbor(&self, v: Node) -> bool {
        self.search(v).is_ok()
    }

    /// Returns the payload of the edge towards `v`, if present
    pub fn weight_of(&self, v: Node) -> Option<W> {
        self.search(v).ok().map(|i| self.0[i].1)
    }

    /// Adds `v` with the given payload.
    /// Returns *true* if `v` was not a neighbor before. Otherwise its payload is overwritten.
    pub fn insert(&mut self, v: Node, weight: W) -> bool {
        match self.search(v) {
            Ok(i) => {
                self.0[i].1 = weight;
                false
            }
            Err(i) => {
                self.0.insert(i, (v, weight));
                true
            }
        }
    }

    /// Tries to remove a neighbor from the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before.
    pub fn try_remove_neighbor(&mut self, v: Node) -> bool {
        match self.search(v) {
            Ok(i) => {
                self.0.remove(i);
                true
            }
            Err(_) => false,
        }
    }

    /// Keeps the neighborhood consistent with a node store from which the positions in `removed`
    /// were deleted: entries targeting `removed` are dropped, entries targeting a later position
    /// are shifted down by `removed.len()`.
    ///
    /// Shifting preserves the relative order of the remaining targets, so the entries stay sorted
    /// and are adjusted in place. Returns the number of dropped entries.
    pub fn renumber_after_removal(&mut self, removed: Range<Node>) -> NumNodes {
        if removed.is_empty() {
            return 0;
        }

        let size_before = self.0.len();
        let shift = removed.end - removed.start;
        self.0.retain(|entry| !removed.contains(&entry.0));
        for entry in self.0.iter_mut() {
            if entry.0 >= removed.end {
                entry.0 -= shift;
            }
        }

        (size_before - self.0.len()) as NumNodes
    }
}
