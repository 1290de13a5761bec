//! Error types of the crate.
//!
//! Missing nodes or edges are not errors: lookups and mutators report them through `bool`,
//! `Option` or empty results. The only fault is an out-of-range positional access through the
//! bounds-checked accessors.

use thiserror::Error;

/// Errors raised by graph operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A node position is not smaller than the number of nodes
    #[error("node position {index} is out of range for a graph with {len} nodes")]
    OutOfRange { index: usize, len: usize },
}

/// Result type for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message() {
        let err = GraphError::OutOfRange { index: 9, len: 3 };
        assert_eq!(
            err.to_string(),
            "node position 9 is out of range for a graph with 3 nodes"
        );
    }
}
