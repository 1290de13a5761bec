/*!
# Iterators

Whole-graph iterators ([`Iter`], [`IterMut`], [`IntoIter`]) walk the node store in position order.
Adjacency iterators ([`Neighbors`], [`NeighborsMut`]) walk the outgoing edges of one node in
ascending target order and resolve every target to its *current* value in the node store.

All of them are double-ended, so reverse iteration is `.rev()`. A default-constructed iterator is
empty, which is also what adjacency iterators of a missing node look like.
*/

use std::{iter::FusedIterator, mem, slice, vec};

use super::*;

macro_rules! forward_iterator {
    ($iter:ident<$($lt:lifetime,)? $t:ident> => $item:ty) => {
        impl<$($lt,)? $t> Iterator for $iter<$($lt,)? $t> {
            type Item = $item;

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                self.inner.next()
            }

            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                self.inner.size_hint()
            }
        }

        impl<$($lt,)? $t> DoubleEndedIterator for $iter<$($lt,)? $t> {
            #[inline]
            fn next_back(&mut self) -> Option<Self::Item> {
                self.inner.next_back()
            }
        }

        impl<$($lt,)? $t> ExactSizeIterator for $iter<$($lt,)? $t> {}
        impl<$($lt,)? $t> FusedIterator for $iter<$($lt,)? $t> {}
    };
}

/// Iterator over the values of a graph in position order
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(values: &'a [T]) -> Self {
        Self {
            inner: values.iter(),
        }
    }
}

impl<T> Default for Iter<'_, T> {
    fn default() -> Self {
        Self {
            inner: Default::default(),
        }
    }
}

forward_iterator!(Iter<'a, T> => &'a T);

/// Iterator over mutable references to the values of a graph in position order.
///
/// Modified values must remain unique within the graph.
#[derive(Debug)]
pub struct IterMut<'a, T> {
    inner: slice::IterMut<'a, T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(values: &'a mut [T]) -> Self {
        Self {
            inner: values.iter_mut(),
        }
    }
}

impl<T> Default for IterMut<'_, T> {
    fn default() -> Self {
        Self {
            inner: Default::default(),
        }
    }
}

forward_iterator!(IterMut<'a, T> => &'a mut T);

/// Owning iterator over the values of a graph in position order
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(values: Vec<T>) -> Self {
        Self {
            inner: values.into_iter(),
        }
    }
}

forward_iterator!(IntoIter<T> => T);

/// Iterator over the out-neighbors of a node.
///
/// Yields `&T` for unweighted graphs and `(&T, Weight)` for weighted graphs.
#[derive(Debug)]
pub struct Neighbors<'a, T, W: EdgeWeight> {
    values: &'a [T],
    entries: slice::Iter<'a, (Node, W)>,
}

impl<'a, T, W: EdgeWeight> Neighbors<'a, T, W> {
    pub(crate) fn new(values: &'a [T], nbs: &'a Neighborhood<W>) -> Self {
        Self {
            values,
            entries: nbs.as_slice().iter(),
        }
    }
}

impl<T, W: EdgeWeight> Clone for Neighbors<'_, T, W> {
    fn clone(&self) -> Self {
        Self {
            values: self.values,
            entries: self.entries.clone(),
        }
    }
}

impl<T, W: EdgeWeight> Default for Neighbors<'_, T, W> {
    fn default() -> Self {
        Self {
            values: &[],
            entries: Default::default(),
        }
    }
}

impl<'a, T, W: EdgeWeight> Iterator for Neighbors<'a, T, W> {
    type Item = W::Entry<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        let &(v, weight) = self.entries.next()?;
        Some(W::entry(&self.values[v as usize], weight))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<T, W: EdgeWeight> DoubleEndedIterator for Neighbors<'_, T, W> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let &(v, weight) = self.entries.next_back()?;
        Some(W::entry(&self.values[v as usize], weight))
    }
}

impl<T, W: EdgeWeight> ExactSizeIterator for Neighbors<'_, T, W> {}
impl<T, W: EdgeWeight> FusedIterator for Neighbors<'_, T, W> {}

/// Iterator over mutable references to the values of the out-neighbors of a node.
///
/// Yields `&mut T` for unweighted graphs and `(&mut T, Weight)` for weighted graphs.
/// Modified values must remain unique within the graph.
#[derive(Debug)]
pub struct NeighborsMut<'a, T, W: EdgeWeight> {
    /// Values not yet handed out; `values[0]` is at position `offset`
    values: &'a mut [T],
    offset: usize,
    entries: slice::Iter<'a, (Node, W)>,
}

impl<'a, T, W: EdgeWeight> NeighborsMut<'a, T, W> {
    pub(crate) fn new(values: &'a mut [T], nbs: &'a Neighborhood<W>) -> Self {
        Self {
            values,
            offset: 0,
            entries: nbs.as_slice().iter(),
        }
    }
}

impl<T, W: EdgeWeight> Default for NeighborsMut<'_, T, W> {
    fn default() -> Self {
        Self {
            values: Default::default(),
            offset: 0,
            entries: Default::default(),
        }
    }
}

impl<'a, T, W: EdgeWeight> Iterator for NeighborsMut<'a, T, W> {
    type Item = W::Entry<&'a mut T>;

    fn next(&mut self) -> Option<Self::Item> {
        // Targets are strictly increasing, so the front target is always within the remaining
        // window and everything before it can be dropped from the window.
        let &(v, weight) = self.entries.next()?;
        let values = mem::take(&mut self.values);
        let (_, rest) = values.split_at_mut(v as usize - self.offset);
        let (value, rest) = rest.split_first_mut()?;
        self.values = rest;
        self.offset = v as usize + 1;
        Some(W::entry(value, weight))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<T, W: EdgeWeight> DoubleEndedIterator for NeighborsMut<'_, T, W> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let &(v, weight) = self.entries.next_back()?;
        let values = mem::take(&mut self.values);
        let (rest, _) = values.split_at_mut(v as usize - self.offset + 1);
        let (value, rest) = rest.split_last_mut()?;
        self.values = rest;
        Some(W::entry(value, weight))
    }
}

impl<T, W: EdgeWeight> ExactSizeIterator for NeighborsMut<'_, T, W> {}
impl<T, W: EdgeWeight> FusedIterator for NeighborsMut<'_, T, W> {}

impl<'a, T, W: EdgeWeight> IntoIterator for &'a DirectedGraph<T, W> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, W: EdgeWeight> IntoIterator for &'a mut DirectedGraph<T, W> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, W: EdgeWeight> IntoIterator for DirectedGraph<T, W> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.values)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    fn sample() -> WeightedDigraph<u32> {
        let mut graph = WeightedDigraph::new();
        graph.insert_all([10, 20, 30, 40]);
        graph.insert_edge(&20, &40, 1.0);
        graph.insert_edge(&20, &10, 2.0);
        graph.insert_edge(&20, &20, 3.0);
        graph
    }

    #[test]
    fn whole_graph_both_directions() {
        let graph = sample();
        assert_eq!(graph.iter().copied().collect_vec(), [10, 20, 30, 40]);
        assert_eq!(graph.iter().rev().copied().collect_vec(), [40, 30, 20, 10]);
        assert_eq!(graph.iter().len(), 4);

        let mut iter = graph.iter();
        assert_eq!(iter.next(), Some(&10));
        assert_eq!(iter.next_back(), Some(&40));
        assert_eq!(iter.copied().collect_vec(), [20, 30]);

        assert_eq!(Iter::<u32>::default().next(), None);
        assert_eq!(graph.into_iter().collect_vec(), [10, 20, 30, 40]);
    }

    #[test]
    fn neighbors_resolve_values() {
        let graph = sample();
        assert_eq!(
            graph.neighbors(&20).collect_vec(),
            [(&10, 2.0), (&20, 3.0), (&40, 1.0)]
        );
        assert_eq!(
            graph.neighbors(&20).rev().collect_vec(),
            [(&40, 1.0), (&20, 3.0), (&10, 2.0)]
        );
        assert_eq!(graph.neighbors(&30).len(), 0);
        assert_eq!(graph.neighbors(&99).next(), None);
    }

    #[test]
    fn neighbors_mut_from_both_ends() {
        let mut graph = sample();
        {
            let mut nbs = graph.neighbors_mut(&20);
            assert_eq!(nbs.len(), 3);

            let (last, w) = nbs.next_back().unwrap();
            assert_eq!((*last, w), (40, 1.0));
            *last += 1;

            let (first, w) = nbs.next().unwrap();
            assert_eq!((*first, w), (10, 2.0));
            *first += 1;

            let (middle, _) = nbs.next().unwrap();
            *middle += 1;

            assert!(nbs.next().is_none());
            assert!(nbs.next_back().is_none());
        }
        assert_eq!(graph.iter().copied().collect_vec(), [11, 21, 30, 41]);
    }

    #[test]
    fn neighbors_mut_of_absent_value_is_empty() {
        let mut graph = sample();
        let mut nbs = graph.neighbors_mut(&99);
        assert_eq!(nbs.len(), 0);
        assert!(nbs.next().is_none());
        assert!(nbs.next_back().is_none());
    }

    #[test]
    fn neighbors_mut_unweighted() {
        let mut graph: Digraph<u32> = [1, 2, 3].into_iter().collect();
        graph.insert_edge(&2, &1);
        graph.insert_edge(&2, &3);

        for value in graph.neighbors_mut(&2) {
            *value *= 10;
        }
        assert_eq!(graph.as_slice(), [10, 2, 30]);
        assert_eq!(graph.neighbors(&2).copied().collect_vec(), [10, 30]);
        assert_eq!(graph.neighbors_mut(&10).len(), 0);
    }

    #[test]
    fn iter_mut_changes_values() {
        let mut graph: Digraph<u32> = [1, 2, 3].into_iter().collect();
        for value in &mut graph {
            *value *= 10;
        }
        assert_eq!(graph.iter().copied().collect_vec(), [10, 20, 30]);
        assert_eq!(graph.iter_mut().rev().map(|v| *v).collect_vec(), [30, 20, 10]);
    }
}
