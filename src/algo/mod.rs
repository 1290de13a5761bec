/*!
# Graph Algorithms

This module provides **graph algorithms** built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use lgraphs::algo::*;
```
and gain access to traversals and shortest paths. Both are provided as **iterators** on the
position level, making it easy to consume results lazily, and as value-level trait methods on the
graphs themselves.
*/

mod shortest_path;
mod traversal;

use crate::prelude::*;

pub use shortest_path::*;
pub use traversal::*;
