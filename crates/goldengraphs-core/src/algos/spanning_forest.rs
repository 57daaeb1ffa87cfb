//! Kruskal's minimum spanning forest

use crate::algos::union_find::UnionFind;
use crate::graph::{DirectedGraph, UndirectedGraph, Weight};
use crate::trace_time;
use std::hash::Hash;
use std::time::Instant;

/// Kruskal's algorithm over every stored edge of `graph`.
///
/// Edges are taken in ascending weight order. An edge is kept iff its
/// endpoints are still in different components. Equal weights keep the order
/// of [`DirectedGraph::edges`], so the result is deterministic.
///
/// The output holds only accepted edges (and their endpoints). On a mirrored
/// graph each undirected edge is accepted in its first stored direction.
#[tracing::instrument(level = "debug", skip_all)]
pub fn kruskal<N: Clone + Eq + Hash>(graph: &DirectedGraph<N>) -> DirectedGraph<N> {
    let start = Instant::now();

    let mut edges: Vec<(&N, &N, Weight)> = graph.edges().collect();
    edges.sort_by(|a, b| a.2.total_cmp(&b.2));

    let mut components = UnionFind::new();
    let mut forest = DirectedGraph::new();
    for (src, dst, weight) in edges {
        if components.union(src, dst) {
            forest.add_edge(src.clone(), dst.clone(), weight);
        }
    }

    tracing::debug!(
        candidates = graph.edge_count(),
        accepted = forest.edge_count(),
        weight = forest.total_weight(),
        "spanning forest built"
    );
    trace_time!(start, "kruskal");
    forest
}

/// Minimum spanning forest of an undirected graph, as an undirected graph.
pub fn minimum_spanning_forest<N: Clone + Eq + Hash>(
    graph: &UndirectedGraph<N>,
) -> UndirectedGraph<N> {
    let forest = kruskal(graph.as_directed());
    let mut undirected = UndirectedGraph::new();
    for (a, b, weight) in forest.edges() {
        undirected.add_edge(a.clone(), b.clone(), weight);
    }
    undirected
}
