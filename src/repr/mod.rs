/*!
# Graph Representation

- [`Neighborhood`] stores the outgoing edges of one node as a sorted, duplicate-free sequence of
  `(target, weight)` pairs.
- [`DirectedGraph`] owns the node store and one neighborhood per node. It comes in two flavours,
  [`Digraph`] (unweighted) and [`WeightedDigraph`] (`f64` weights).
- [`StorageConfig`] configures the memory strategy of a graph.
- Iterators ([`Iter`], [`Neighbors`], ...) and [`Cursor`]s give read and write access to values
  without exposing positions.
*/

use crate::{edge::*, error::*, node::*, ops::*};

mod config;
mod cursor;
mod directed;
mod iter;
mod neighborhood;

pub use config::*;
pub use cursor::*;
pub use directed::*;
pub use iter::*;
pub use neighborhood::*;
