//! # Dot
//!
//! The Dot-Format is a very extensive format used by [GraphViz](https://graphviz.org/) to allow
//! for detailed visualizations. We only use its most basic form: every node without outgoing edges
//! is written as a standalone line, every edge as `source -> target`. Weighted edges append the
//! weight as `source -> target:weight`.
//!
//! Lines follow the store order of the nodes and the ascending target position within every node:
//! ```
//! use lgraphs::{prelude::*, io::*};
//!
//! let mut graph: Digraph<&str> = ["a", "b", "c"].into_iter().collect();
//! graph.insert_edge(&"a", &"c");
//! graph.insert_edge(&"a", &"b");
//!
//! assert_eq!(to_dot(&graph, "abc"), "digraph abc {\na -> b\na -> c\nb\nc\n}\n");
//!
//! let mut buffer = Vec::new();
//! DotWriter::new()
//!     .graph_name("abc")
//!     .indent("  ")
//!     .try_write_graph(&graph, &mut buffer)
//!     .unwrap();
//! assert!(String::from_utf8(buffer).unwrap().starts_with("digraph abc {\n  a -> b\n"));
//! ```
use std::{
    fmt::Display,
    io::{Result, Write},
};

use super::*;

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Name of the graph in the opening line (default: `G`)
    graph_name: String,
    /// Prefix of every node and edge line (default: none)
    indent: String,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            graph_name: "G".to_string(),
            indent: String::new(),
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name of the graph written into the opening line
    pub fn graph_name<S>(mut self, name: S) -> Self
    where
        S: Into<String>,
    {
        self.graph_name = name.into();
        self
    }

    /// Set the prefix written in front of every node and edge line
    pub fn indent<S>(mut self, indent: S) -> Self
    where
        S: Into<String>,
    {
        self.indent = indent.into();
        self
    }

    /// Writes the opening line of the graph
    pub fn start_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "digraph {} {{", self.graph_name)
    }

    /// Writes a standalone node
    pub fn write_node<W, T>(&self, writer: &mut W, value: &T) -> Result<()>
    where
        W: Write,
        T: Display + ?Sized,
    {
        writeln!(writer, "{}{value}", self.indent)
    }

    /// Writes a directed edge, followed by `:weight` if a weight is given
    pub fn write_edge<W, T>(
        &self,
        writer: &mut W,
        from: &T,
        to: &T,
        weight: Option<Weight>,
    ) -> Result<()>
    where
        W: Write,
        T: Display + ?Sized,
    {
        match weight {
            Some(weight) => writeln!(writer, "{}{from} -> {to}:{weight}", self.indent),
            None => writeln!(writer, "{}{from} -> {to}", self.indent),
        }
    }

    /// Closes the Dot-Graph, thus finishing the graph
    pub fn finish_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "}}")
    }
}

impl<T, Wt> GraphWriter<DirectedGraph<T, Wt>> for DotWriter
where
    T: Display,
    Wt: EdgeWeight,
{
    fn try_write_graph<W>(&self, graph: &DirectedGraph<T, Wt>, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        self.start_graph(&mut writer)?;
        for u in graph.vertices_range() {
            let nbs = graph.neighborhood_of(u);
            if nbs.is_empty() {
                self.write_node(&mut writer, &graph[u])?;
                continue;
            }

            for (v, weight) in nbs.iter() {
                self.write_edge(&mut writer, &graph[u], &graph[v], weight.weight())?;
            }
        }
        self.finish_graph(&mut writer)
    }
}

/// Trait for writing a graph to a writer in the Dot-Format.
/// Shorthand for default settings with a custom graph name.
pub trait DotWrite {
    /// Tries to write the graph to a writer
    fn try_write_dot<W>(&self, writer: W, name: &str) -> Result<()>
    where
        W: Write;

    /// Tries to write the graph to a file
    fn try_write_dot_file<P>(&self, path: P, name: &str) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_dot(writer, name)
    }
}

impl<T, Wt> DotWrite for DirectedGraph<T, Wt>
where
    T: Display,
    Wt: EdgeWeight,
{
    fn try_write_dot<W>(&self, writer: W, name: &str) -> Result<()>
    where
        W: Write,
    {
        DotWriter::new().graph_name(name).try_write_graph(self, writer)
    }
}

/// Renders `graph` in the Dot-Format with the given graph name.
/// ** Panics if the `Display` implementation of a node value returns an error **
pub fn to_dot<T, W>(graph: &DirectedGraph<T, W>, name: &str) -> String
where
    T: Display,
    W: EdgeWeight,
{
    let mut buffer = Vec::new();
    graph
        .try_write_dot(&mut buffer, name)
        .expect("Display implementation of a node value failed");
    String::from_utf8(buffer).expect("formatted output is valid UTF-8")
}

#[cfg(test)]
mod tests {
    use std::{fmt, fs};

    use super::*;
    use crate::testing::reference_graph;

    #[derive(PartialEq)]
    struct Unprintable;

    impl Display for Unprintable {
        fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn empty_graph() {
        let graph: Digraph<u32> = Digraph::new();
        assert_eq!(to_dot(&graph, "empty"), "digraph empty {\n}\n");
    }

    #[test]
    fn reference_graph_before_and_after_erase() {
        let mut graph = reference_graph();
        assert_eq!(
            to_dot(&graph, "reference"),
            "digraph reference {\n\
             11 -> 22:2\n\
             11 -> 55:1\n\
             22 -> 33:3\n\
             22 -> 66:1\n\
             33 -> 44:1\n\
             44 -> 88:9\n\
             55 -> 66:1\n\
             55 -> 77:3\n\
             66 -> 77:1\n\
             77 -> 44:1\n\
             88\n\
             }\n"
        );

        graph.erase_edge(&44, &88);
        graph.erase(&88);
        graph.insert_edge(&66, &22, 0.25);
        assert_eq!(
            to_dot(&graph, "reference"),
            "digraph reference {\n\
             11 -> 22:2\n\
             11 -> 55:1\n\
             22 -> 33:3\n\
             22 -> 66:1\n\
             33 -> 44:1\n\
             44\n\
             55 -> 66:1\n\
             55 -> 77:3\n\
             66 -> 22:0.25\n\
             66 -> 77:1\n\
             77 -> 44:1\n\
             }\n"
        );
    }

    #[test]
    fn indented_unweighted() {
        let mut graph: Digraph<char> = "pq".chars().collect();
        graph.insert_edge(&'q', &'p');

        let mut buffer = Vec::new();
        DotWriter::new()
            .graph_name("pq")
            .indent("  ")
            .try_write_graph(&graph, &mut buffer)
            .unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "digraph pq {\n  p\n  q -> p\n}\n"
        );
    }

    #[test]
    fn write_to_file() {
        let graph = reference_graph();
        let expected = to_dot(&graph, "reference");
        let temp_dir = std::env::temp_dir();

        let path = temp_dir.join("lgraphs_dot_write_to_file.dot");
        graph.try_write_dot_file(&path, "reference").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), expected);
        fs::remove_file(&path).unwrap();

        let path = temp_dir.join("lgraphs_dot_writer_to_file.dot");
        DotWriter::new()
            .graph_name("reference")
            .try_write_graph_file(&graph, &path)
            .unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), expected);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn failing_display_is_an_error() {
        let mut graph: Digraph<Unprintable> = Digraph::new();
        graph.insert(Unprintable);

        assert!(graph.try_write_dot(Vec::new(), "broken").is_err());
    }

    #[test]
    #[should_panic(expected = "Display implementation of a node value failed")]
    fn to_dot_panics_on_failing_display() {
        let mut graph: Digraph<Unprintable> = Digraph::new();
        graph.insert(Unprintable);

        to_dot(&graph, "broken");
    }
}
