/*!
# Node Positions

A node is addressed by its **position** in the node store of a graph: a dense, zero-based index.
Positions are not stable handles. Erasing a node shifts every later node one position down, and
every adjacency entry is renumbered accordingly.

We choose `Node = u32` as almost all use-cases involve less than `2^32` nodes, which keeps
adjacency entries small.
*/

use stream_bitset::bitset::BitSetImpl;

/// Position of a node in the node store
pub type Node = u32;

/// Node-Value that is considered invalid. Also the upper bound on the number of nodes.
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet over node positions
pub type NodeBitSet = BitSetImpl<Node>;

/// Converts a `usize` position into a [`Node`].
/// ** Panics if `index >= INVALID_NODE` **
#[inline]
pub(crate) fn node_from_index(index: usize) -> Node {
    assert!(
        index < INVALID_NODE as usize,
        "node store exceeds the maximum of {INVALID_NODE} nodes"
    );
    index as Node
}
