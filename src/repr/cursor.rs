/*!
# Cursors

A [`Cursor`] is a bidirectional position within a [`DirectedGraph`] that can be moved freely in
both directions, compared against other cursors and dereferenced. It is the counterpart of the
iterators for code that needs to step back and forth or to remember a position.

A cursor is parameterized by
- the graph reference `G`: `&DirectedGraph` for read-only cursors, `&mut DirectedGraph` for
  cursors that can modify (or, for [`NodeCursorMut`], remove) the element they point to,
- the relation `R` it walks: [`Nodes`] walks the node store, [`Adjacent`] walks the outgoing edges
  of a single node and resolves every target to its value.

A cursor at index `span` is *past the end*. A default-constructed cursor has no graph at all and is
the universal end sentinel: all cursors that are past the end compare equal, independent of their
graph or relation.

```
use lgraphs::prelude::*;

let mut graph: Digraph<u32> = [1, 2, 3].into_iter().collect();
graph.insert_edge(&1, &3);

let mut cursor = graph.cursor_end();
cursor.move_prev();
assert_eq!(cursor.current(), Some(&3));

let mut nbs = graph.adjacent_cursor_front(&1);
assert_eq!(nbs.current(), Some(&3));
nbs.move_next();
assert!(nbs.is_end());
assert!(nbs == AdjacentCursor::default());
```
*/

use std::{
    fmt::Debug,
    ops::{Deref, DerefMut},
    ptr,
};

use super::*;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Nodes {}
    impl Sealed for super::Adjacent {}
}

/// Sequence of node positions a [`Cursor`] walks
pub trait Relation: sealed::Sealed + Copy + Eq + Default + Debug {
    /// Number of elements of the relation in `graph`
    fn span<T, W: EdgeWeight>(&self, graph: &DirectedGraph<T, W>) -> usize;

    /// Node position of the element at `index`.
    /// ** Panics if `index >= span` **
    fn node_at<T, W: EdgeWeight>(&self, graph: &DirectedGraph<T, W>, index: usize) -> Node;
}

/// All nodes in store order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Nodes;

/// Out-neighbors of the node at the given position in ascending position order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjacent(Node);

impl Default for Adjacent {
    fn default() -> Self {
        Self(INVALID_NODE)
    }
}

impl Adjacent {
    /// Position of the node whose out-neighbors are walked
    pub fn source(&self) -> Node {
        self.0
    }
}

impl Relation for Nodes {
    fn span<T, W: EdgeWeight>(&self, graph: &DirectedGraph<T, W>) -> usize {
        graph.values.len()
    }

    fn node_at<T, W: EdgeWeight>(&self, _: &DirectedGraph<T, W>, index: usize) -> Node {
        index as Node
    }
}

impl Relation for Adjacent {
    fn span<T, W: EdgeWeight>(&self, graph: &DirectedGraph<T, W>) -> usize {
        graph.nbs[self.0 as usize].len()
    }

    fn node_at<T, W: EdgeWeight>(&self, graph: &DirectedGraph<T, W>, index: usize) -> Node {
        graph.nbs[self.0 as usize].as_slice()[index].0
    }
}

/// A bidirectional position within a graph relation. See the [module docs](self).
#[derive(Debug, Clone)]
pub struct Cursor<G, R> {
    graph: Option<G>,
    relation: R,
    index: usize,
}

/// Read-only cursor over the nodes of a graph
pub type NodeCursor<'a, T, W = ()> = Cursor<&'a DirectedGraph<T, W>, Nodes>;

/// Cursor over the nodes of a graph that can modify or remove the current node
pub type NodeCursorMut<'a, T, W = ()> = Cursor<&'a mut DirectedGraph<T, W>, Nodes>;

/// Read-only cursor over the out-neighbors of a node
pub type AdjacentCursor<'a, T, W = ()> = Cursor<&'a DirectedGraph<T, W>, Adjacent>;

/// Cursor over the out-neighbors of a node that can modify the current neighbor's value
pub type AdjacentCursorMut<'a, T, W = ()> = Cursor<&'a mut DirectedGraph<T, W>, Adjacent>;

impl<G, R: Relation> Default for Cursor<G, R> {
    fn default() -> Self {
        Self {
            graph: None,
            relation: R::default(),
            index: 0,
        }
    }
}

impl<G, R, T, W> Cursor<G, R>
where
    G: Deref<Target = DirectedGraph<T, W>>,
    R: Relation,
    W: EdgeWeight,
{
    fn new(graph: G, relation: R, at_end: bool) -> Self {
        let index = if at_end { relation.span(&graph) } else { 0 };
        Self {
            graph: Some(graph),
            relation,
            index,
        }
    }

    fn span(&self) -> usize {
        self.graph
            .as_deref()
            .map_or(0, |graph| self.relation.span(graph))
    }

    /// Returns *true* if the cursor is past the end (or has no graph at all)
    pub fn is_end(&self) -> bool {
        self.index >= self.span()
    }

    /// Returns the index of the cursor within its relation, `None` if past the end
    pub fn index(&self) -> Option<usize> {
        (!self.is_end()).then_some(self.index)
    }

    /// Returns the node position the cursor points to, `None` if past the end
    pub fn position(&self) -> Option<Node> {
        let graph = self.graph.as_deref()?;
        (self.index < self.relation.span(graph)).then(|| self.relation.node_at(graph, self.index))
    }

    /// Returns the relation the cursor walks
    pub fn relation(&self) -> R {
        self.relation
    }

    /// Advances the cursor by one. Advancing past the end is a caller error.
    pub fn move_next(&mut self) {
        let at_end = self.is_end();
        debug_assert!(!at_end, "cursor advanced past the end");
        if !at_end {
            self.index += 1;
        }
    }

    /// Moves the cursor back by one. Moving before the first element is a caller error.
    pub fn move_prev(&mut self) {
        let at_front = self.graph.is_none() || self.index == 0;
        debug_assert!(!at_front, "cursor moved before the beginning");
        if !at_front {
            self.index -= 1;
        }
    }

    /// Returns a read-only cursor at the same position
    pub fn as_cursor(&self) -> Cursor<&DirectedGraph<T, W>, R> {
        Cursor {
            graph: self.graph.as_deref(),
            relation: self.relation,
            index: self.index,
        }
    }
}

impl<G, T, W> Cursor<G, Nodes>
where
    G: Deref<Target = DirectedGraph<T, W>>,
    W: EdgeWeight,
{
    /// Returns the value of the current node, `None` if past the end
    pub fn current(&self) -> Option<&T> {
        let u = self.position()?;
        self.graph.as_deref().map(|graph| &graph.values[u as usize])
    }
}

impl<G, T, W> Cursor<G, Nodes>
where
    G: DerefMut<Target = DirectedGraph<T, W>>,
    W: EdgeWeight,
{
    /// Returns the value of the current node mutably, `None` if past the end.
    /// The value must stay unique within the graph.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        let u = self.position()?;
        self.graph
            .as_deref_mut()
            .map(|graph| &mut graph.values[u as usize])
    }

    /// Erases the current node (renumbering all edges) and returns its value.
    /// Afterwards the cursor points to the successor of the removed node.
    /// Returns `None` and does nothing if the cursor is past the end.
    pub fn remove_current(&mut self) -> Option<T> {
        let u = self.position()?;
        self.graph.as_deref_mut()?.remove_at(u)
    }
}

impl<G, T, W> Cursor<G, Adjacent>
where
    G: Deref<Target = DirectedGraph<T, W>>,
    W: EdgeWeight,
{
    /// Returns the value of the current neighbor (paired with the edge weight for weighted
    /// graphs), `None` if past the end
    pub fn current(&self) -> Option<W::Entry<&T>> {
        let graph = self.graph.as_deref()?;
        let &(v, weight) = graph.nbs[self.relation.0 as usize]
            .as_slice()
            .get(self.index)?;
        Some(W::entry(&graph.values[v as usize], weight))
    }
}

impl<G, T, W> Cursor<G, Adjacent>
where
    G: DerefMut<Target = DirectedGraph<T, W>>,
    W: EdgeWeight,
{
    /// Returns the value of the current neighbor mutably (paired with the edge weight for
    /// weighted graphs), `None` if past the end.
    /// The value must stay unique within the graph.
    pub fn current_mut(&mut self) -> Option<W::Entry<&mut T>> {
        let graph = self.graph.as_deref_mut()?;
        let &(v, weight) = graph.nbs[self.relation.0 as usize]
            .as_slice()
            .get(self.index)?;
        Some(W::entry(&mut graph.values[v as usize], weight))
    }
}

impl<G, R, T, W> PartialEq for Cursor<G, R>
where
    G: Deref<Target = DirectedGraph<T, W>>,
    R: Relation,
    W: EdgeWeight,
{
    fn eq(&self, other: &Self) -> bool {
        match (self.is_end(), other.is_end()) {
            (true, true) => true,
            (false, false) => {
                self.graph
                    .as_deref()
                    .zip(other.graph.as_deref())
                    .is_some_and(|(a, b)| ptr::eq(a, b))
                    && self.relation == other.relation
                    && self.index == other.index
            }
            _ => false,
        }
    }
}

impl<G, R, T, W> Eq for Cursor<G, R>
where
    G: Deref<Target = DirectedGraph<T, W>>,
    R: Relation,
    W: EdgeWeight,
{
}

impl<T, W: EdgeWeight> DirectedGraph<T, W> {
    /// Returns a cursor at the first node (past the end if the graph is empty)
    pub fn cursor_front(&self) -> NodeCursor<'_, T, W> {
        Cursor::new(self, Nodes, false)
    }

    /// Returns a cursor past the last node
    pub fn cursor_end(&self) -> NodeCursor<'_, T, W> {
        Cursor::new(self, Nodes, true)
    }

    /// Returns a mutable cursor at the first node (past the end if the graph is empty)
    pub fn cursor_front_mut(&mut self) -> NodeCursorMut<'_, T, W> {
        Cursor::new(self, Nodes, false)
    }

    /// Returns a mutable cursor past the last node
    pub fn cursor_end_mut(&mut self) -> NodeCursorMut<'_, T, W> {
        Cursor::new(self, Nodes, true)
    }
}

impl<T: PartialEq, W: EdgeWeight> DirectedGraph<T, W> {
    /// Returns a cursor at the first out-neighbor of the node holding `value`.
    /// If no node holds `value`, the default end cursor is returned.
    pub fn adjacent_cursor_front(&self, value: &T) -> AdjacentCursor<'_, T, W> {
        self.position_of(value)
            .map(|u| Cursor::new(self, Adjacent(u), false))
            .unwrap_or_default()
    }

    /// Returns a cursor past the last out-neighbor of the node holding `value`.
    /// If no node holds `value`, the default end cursor is returned.
    pub fn adjacent_cursor_end(&self, value: &T) -> AdjacentCursor<'_, T, W> {
        self.position_of(value)
            .map(|u| Cursor::new(self, Adjacent(u), true))
            .unwrap_or_default()
    }

    /// Mutable version of [`DirectedGraph::adjacent_cursor_front`]
    pub fn adjacent_cursor_front_mut(&mut self, value: &T) -> AdjacentCursorMut<'_, T, W> {
        match self.position_of(value) {
            Some(u) => Cursor::new(self, Adjacent(u), false),
            None => Cursor::default(),
        }
    }

    /// Mutable version of [`DirectedGraph::adjacent_cursor_end`]
    pub fn adjacent_cursor_end_mut(&mut self, value: &T) -> AdjacentCursorMut<'_, T, W> {
        match self.position_of(value) {
            Some(u) => Cursor::new(self, Adjacent(u), true),
            None => Cursor::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::testing::reference_graph;

    #[test]
    fn walk_nodes_both_directions() {
        let graph = reference_graph();

        let mut forward = Vec::new();
        let mut cursor = graph.cursor_front();
        while let Some(&value) = cursor.current() {
            forward.push(value);
            cursor.move_next();
        }
        assert_eq!(forward, graph.iter().copied().collect_vec());
        assert!(cursor.is_end());
        assert_eq!(cursor.index(), None);
        assert!(cursor == graph.cursor_end());

        let mut backward = Vec::new();
        while cursor != graph.cursor_front() {
            cursor.move_prev();
            backward.push(*cursor.current().unwrap());
        }
        assert_eq!(backward, graph.iter().rev().copied().collect_vec());
        assert_eq!(cursor.index(), Some(0));
        assert_eq!(cursor.position(), Some(0));
    }

    #[test]
    fn end_cursors_are_equal() {
        let graph = reference_graph();
        let other = reference_graph();

        assert!(NodeCursor::<u32, Weight>::default() == graph.cursor_end());
        assert!(graph.cursor_end() == other.cursor_end());
        assert!(graph.adjacent_cursor_end(&11) == graph.adjacent_cursor_end(&22));
        assert!(graph.adjacent_cursor_front(&88) == AdjacentCursor::default());
        assert!(graph.adjacent_cursor_front(&99).is_end());

        assert!(graph.cursor_front() == graph.cursor_front());
        assert!(graph.cursor_front() != other.cursor_front());
        assert!(graph.cursor_front() != graph.cursor_end());
        assert!(graph.adjacent_cursor_front(&11) != graph.adjacent_cursor_front(&22));
    }

    #[test]
    fn walk_adjacency_of_22() {
        let graph = reference_graph();
        let mut cursor = graph.adjacent_cursor_front(&22);
        assert_eq!(cursor.relation().source(), 1);
        assert_eq!(cursor.current(), Some((&33, 3.0)));
        assert_eq!(cursor.position(), Some(2));

        cursor.move_next();
        assert_eq!(cursor.current(), Some((&66, 1.0)));
        cursor.move_next();
        assert!(cursor.is_end());
        assert_eq!(cursor.current(), None);

        cursor.move_prev();
        assert_eq!(cursor.index(), Some(1));
        assert_eq!(cursor.position(), Some(5));
    }

    #[test]
    fn mutate_through_cursors() {
        let mut graph: Digraph<u32> = [1, 2, 3].into_iter().collect();
        graph.insert_edge(&1, &3);

        {
            let mut cursor = graph.adjacent_cursor_front_mut(&1);
            *cursor.current_mut().unwrap() = 30;
            assert_eq!(cursor.as_cursor().current(), Some(&30));
        }
        {
            let mut cursor = graph.cursor_end_mut();
            cursor.move_prev();
            cursor.move_prev();
            *cursor.current_mut().unwrap() = 20;
        }
        assert_eq!(graph.as_slice(), [1, 20, 30]);
        assert!(graph.contains_edge(&1, &30));
        assert!(graph.adjacent_cursor_end_mut(&5).is_end());
    }

    #[test]
    fn remove_under_cursor() {
        let mut graph = reference_graph();
        {
            let mut cursor = graph.cursor_front_mut();
            while cursor.current().is_some_and(|&v| v != 44) {
                cursor.move_next();
            }
            assert_eq!(cursor.remove_current(), Some(44));
            assert_eq!(cursor.current(), Some(&55));
            assert_eq!(cursor.index(), Some(3));
        }
        assert_eq!(graph.cursor_end_mut().remove_current(), None);
        assert_eq!(graph.len(), 7);
        assert_eq!(graph.number_of_edges(), 7);
        assert!(!graph.contains(&44));
        assert!(graph.edges().all(|Edge(_, v)| v < 7));
    }
}
