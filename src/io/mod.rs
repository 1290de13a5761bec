/*!
# IO

Utilities for writing graphs to different output formats.

## Output Formats

Currently supported output formats:
- **Dot**: The [DOT language](https://graphviz.org/doc/info/lang.html) of [GraphViz](https://graphviz.org/).

The DOT writer renders node values with their `Display` implementation, so values should follow
DOT's naming conventions (no spaces, hyphens, or other special characters) if the output is meant
to be read by GraphViz.

## Traits

- [`GraphWriter`] is implemented by writers for a specific format and holds their settings.
- Format-specific extension traits such as [`DotWrite`] are implemented on the graphs themselves
  and write with default settings.
*/

pub mod dot;

use std::{
    fs::File,
    io::{BufWriter, Result, Write},
    path::Path,
};

use crate::prelude::*;

pub use dot::*;

/// Trait for types that can write graphs in a specific format.
///
/// This trait provides both a low-level method to write to any
/// [`Write`] instance and a convenience wrapper to write directly
/// to files.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered writer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}
