/*!
`lgraphs` is a container library for **l**abelled directed graphs:
- Nodes hold arbitrary values that are unique under equality,
- Edges are directed and, optionally, weighted with an `f64`,
- At most one edge exists per ordered pair of nodes.

# Representation

Internally, a node is addressed by its **position** `0..n` in the node store, represented as `u32`.
Positions are dense: erasing a node moves every later node one position down and renumbers all
edges pointing past it. Most of the public interface is value-based (`graph.insert_edge(&a, &b)`),
the position-level view is available through the traits in [`ops`].

Both variants share one implementation, [`DirectedGraph<T, W>`](crate::repr::DirectedGraph):
- [`Digraph<T>`](crate::repr::Digraph) for unweighted graphs,
- [`WeightedDigraph<T>`](crate::repr::WeightedDigraph) for graphs with weighted edges.

# Usage

There are *3* submodules you probably want to interact with besides the [`prelude`]:
- [`repr`] includes the graph container, its iterators and cursors,
- [`algo`] includes traversals (`graph.bfs_values(&start)`) and shortest paths
  (`graph.shortest_path(&start, &end)`) built on the public interface,
- [`io`] includes writers for exporting a graph, currently in the DOT format.

In most use-cases, `use lgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use lgraphs::{prelude::*, algo::*, io::dot::to_dot};

let mut graph = WeightedDigraph::new();
graph.insert_all([1, 2, 3]);
graph.insert_edge(&1, &2, 0.5);
graph.insert_edge(&2, &3, 1.5);

assert_eq!(graph.shortest_path(&1, &3), [&1, &2, &3]);
assert_eq!(to_dot(&graph, "g"), "digraph g {\n1 -> 2:0.5\n2 -> 3:1.5\n3\n}\n");
```

# Concurrency

A graph is a plain single-threaded container. Shared references may be sent across threads like
any other collection, but there is no internal synchronization.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

/// `lgraphs::prelude` includes definitions for nodes and edges, all position-level graph traits
/// as well as the graph container and its iterators.
pub mod prelude {
    pub use super::{edge::*, error::GraphError, node::*, ops::*, repr::*};
}
