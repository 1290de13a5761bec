//! Shared test fixtures and randomized model checks for the graph container.

#[cfg(test)]
use crate::prelude::*;

/// The weighted graph used by the demo scenarios: eight nodes `11..=88` and ten edges.
#[cfg(test)]
pub(crate) fn reference_graph() -> WeightedDigraph<u32> {
    let mut graph = WeightedDigraph::new();
    graph.insert_all([11, 22, 33, 44, 55, 66, 77, 88]);
    for (u, v, w) in [
        (11, 22, 2.0),
        (11, 55, 1.0),
        (22, 33, 3.0),
        (22, 66, 1.0),
        (33, 44, 1.0),
        (44, 88, 9.0),
        (55, 66, 1.0),
        (55, 77, 3.0),
        (66, 77, 1.0),
        (77, 44, 1.0),
    ] {
        assert!(graph.insert_edge(&u, &v, w));
    }
    graph
}

/// Instantiates randomized tests comparing a graph type against a simple model.
///
/// `$weight` is a closure `|rng: &mut Pcg64Mcg| -> W` producing edge payloads.
/// Node `u` of the model holds the value `label(u) = 3u + 1`.
macro_rules! test_graph_ops {
    (@case GraphNew, $graph:ty, $weight:expr) => {
        #[test]
        fn graph_new() {
            for n in 1..50 {
                let mut graph = <$graph>::with_capacity(n as usize);
                assert!(graph.is_empty());

                assert_eq!(graph.insert_all((0..n).map(label)), n);
                assert_eq!(graph.insert_all((0..n).map(label)), 0);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                assert_eq!(graph.iter().copied().collect_vec(), (0..n).map(label).collect_vec());
                assert!((0..n).all(|u| graph.position_of(&label(u)) == Some(u)));
                assert!(!graph.contains(&label(n)));
            }
        }
    };
    (@case AdjacencyList, $graph:ty, $weight:expr) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);
            let weight = $weight;

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);

                        let mut adj_matrix: Vec<NodeBitSet> = vec![NodeBitSet::new(n); n as usize];
                        let mut graph = new_graph(n);
                        for &Edge(u, v) in &edges {
                            adj_matrix[u as usize].set_bit(v);
                            assert!(graph.insert_edge_with(&label(u), &label(v), weight(rng)));
                        }

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                        assert_eq!(graph.edges().collect_vec(), edges);

                        for u in 0..n {
                            assert_eq!(graph.degree_of(u), adj_matrix[u as usize].cardinality());
                            assert!(graph.neighbors_of(u).all(|v| adj_matrix[u as usize].get_bit(v)));
                            assert_eq!(graph.neighbors(&label(u)).len(), graph.degree_of(u) as usize);
                        }
                    }
                }
            }
        }
    };
    (@case EdgeEditing, $graph:ty, $weight:expr) => {
        #[test]
        fn test_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);
            let weight = $weight;

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    let mut graph = new_graph(n);
                    let mut model = FxHashMap::default();

                    for _ in 0..m_ub {
                        let u = rng.random_range(0..n);
                        let v = rng.random_range(0..n);

                        if rng.random_bool(0.7) {
                            let w = weight(rng);
                            let inserted = graph.insert_edge_with(&label(u), &label(v), w);
                            assert_eq!(inserted, model.insert((u, v), w).is_none());
                        } else {
                            assert!(graph.erase_edge(&label(u), &label(v)));
                            model.remove(&(u, v));
                        }

                        assert_eq!(graph.number_of_edges() as usize, model.len());
                    }

                    for u in 0..n {
                        for v in 0..n {
                            assert_eq!(
                                graph.neighborhood_of(u).weight_of(v),
                                model.get(&(u, v)).copied()
                            );
                            assert_eq!(
                                graph.contains_edge(&label(u), &label(v)),
                                model.contains_key(&(u, v))
                            );
                        }
                    }

                    let m = graph.number_of_edges();
                    assert!(!graph.insert_edge_with(&label(n), &label(0), weight(rng)));
                    assert!(!graph.erase_edge(&label(0), &label(n)));
                    assert_eq!(graph.number_of_edges(), m);
                }
            }
        }
    };
    (@case NodeErasure, $graph:ty, $weight:expr) => {
        #[test]
        fn test_node_erasure() {
            let rng = &mut Pcg64Mcg::seed_from_u64(5);
            let weight = $weight;

            for n in [10 as NumNodes, 20, 50] {
                for _ in 0..10 {
                    let mut graph = new_graph(n);
                    let mut values = (0..n).map(label).collect_vec();
                    let mut model = FxHashMap::default();
                    for Edge(u, v) in random_edges(rng, n, 4 * n) {
                        let w = weight(rng);
                        graph.insert_edge_with(&label(u), &label(v), w);
                        model.insert((label(u), label(v)), w);
                    }

                    while !values.is_empty() {
                        let value = if rng.random_bool(0.2) {
                            label(n + rng.random_range(0..n))
                        } else {
                            values[rng.random_range(0..values.len())]
                        };

                        assert_eq!(graph.erase(&value), values.contains(&value));
                        values.retain(|&x| x != value);
                        model.retain(|&(a, b), _| a != value && b != value);

                        assert_eq!(graph.as_slice(), values);
                        assert_eq!(graph.number_of_edges() as usize, model.len());
                        for Edge(u, v) in graph.edges() {
                            assert!(v < graph.number_of_nodes());
                            assert_eq!(
                                graph.neighborhood_of(u).weight_of(v),
                                model.get(&(graph[u], graph[v])).copied()
                            );
                        }
                        assert_eq!(
                            graph.iter().rev().collect_vec(),
                            graph.iter().collect_vec().into_iter().rev().collect_vec()
                        );
                    }

                    assert!(graph.is_empty());
                    assert!(graph.has_no_edges());
                }
            }
        }
    };
    (@case RangeErasure, $graph:ty, $weight:expr) => {
        #[test]
        fn test_range_erasure() {
            let rng = &mut Pcg64Mcg::seed_from_u64(7);
            let weight = $weight;

            for n in [10 as NumNodes, 20, 50] {
                for _ in 0..20 {
                    let mut graph = new_graph(n);
                    for Edge(u, v) in random_edges(rng, n, 4 * n) {
                        graph.insert_edge_with(&label(u), &label(v), weight(rng));
                    }

                    let start = rng.random_range(0..n + 5);
                    let end = rng.random_range(start..n + 10);
                    let erased = (start.min(n)..end.min(n)).map(label).collect_vec();

                    let expected = graph
                        .edges()
                        .map(|Edge(u, v)| (graph[u], graph[v], graph.neighborhood_of(u).weight_of(v)))
                        .filter(|(a, b, _)| !erased.contains(a) && !erased.contains(b))
                        .collect_vec();

                    assert_eq!(graph.erase_range(start..end), start.min(n));
                    assert_eq!(graph.len(), n as usize - erased.len());
                    assert_eq!(
                        graph
                            .edges()
                            .map(|Edge(u, v)| (graph[u], graph[v], graph.neighborhood_of(u).weight_of(v)))
                            .collect_vec(),
                        expected
                    );
                    assert_eq!(graph.number_of_edges() as usize, expected.len());
                }
            }
        }
    };
    (@case Equality, $graph:ty, $weight:expr) => {
        #[test]
        fn test_equality() {
            let rng = &mut Pcg64Mcg::seed_from_u64(11);
            let weight = $weight;

            for n in [10 as NumNodes, 20, 50] {
                for _ in 0..10 {
                    let edges = random_edges(rng, n, 3 * n);
                    let weights = edges.iter().map(|_| weight(rng)).collect_vec();

                    let mut graph = new_graph(n);
                    for (&Edge(u, v), &w) in edges.iter().zip(&weights) {
                        graph.insert_edge_with(&label(u), &label(v), w);
                    }

                    let mut order = (0..n).collect_vec();
                    order.shuffle(rng);
                    let mut shuffled = <$graph>::new();
                    shuffled.insert_all(order.into_iter().map(label));
                    for (&Edge(u, v), &w) in edges.iter().zip(&weights).rev() {
                        shuffled.insert_edge_with(&label(u), &label(v), w);
                    }

                    assert_eq!(graph, shuffled);
                    assert_eq!(shuffled, graph);
                    assert!(graph.eq_with_weights(&shuffled));

                    if let Some(&Edge(u, v)) = edges.first() {
                        shuffled.erase_edge(&label(u), &label(v));
                        assert_ne!(graph, shuffled);
                        assert_ne!(shuffled, graph);
                    }
                }
            }
        }
    };
    ($env:ident, $graph:ty, $weight:expr, ($($case:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{prelude::*, testing::test_graph_ops};
            use fxhash::FxHashMap;
            use itertools::Itertools;
            use rand::{seq::SliceRandom, Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            fn label(u: Node) -> u32 {
                3 * u + 1
            }

            /// Creates a graph holding `label(0), ..., label(n - 1)` without edges
            fn new_graph(n: NumNodes) -> $graph {
                let mut graph = <$graph>::new();
                graph.insert_all((0..n).map(label));
                graph
            }

            /// Creates a sorted list of at most `m_ub` distinct random edges for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
                let mut edges: Vec<Edge> = (0..m_ub).map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    Edge(u, v)
                }).collect_vec();
                edges.sort_unstable();
                edges.dedup();

                edges
            }

            $(
                test_graph_ops!(@case $case, $graph, $weight);
            )*
        }
    };
}

pub(crate) use test_graph_ops;
