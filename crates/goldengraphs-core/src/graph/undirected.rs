use std::fmt::Debug;
use std::hash::Hash;

use crate::algos::{ShortestPath, ShortestPathTree};
use crate::error::Result;
use crate::graph::{DirectedGraph, Weight};

/// Undirected weighted graph.
///
/// Stored as a [`DirectedGraph`] in which every edge `(a, b)` is mirrored by
/// `(b, a)` with the same weight. Every mutation keeps that symmetry.
#[derive(Debug, Clone, PartialEq)]
pub struct UndirectedGraph<N: Eq + Hash> {
    inner: DirectedGraph<N>,
}

impl<N: Eq + Hash> Default for UndirectedGraph<N> {
    fn default() -> Self {
        Self {
            inner: DirectedGraph::default(),
        }
    }
}

impl<N: Clone + Eq + Hash> UndirectedGraph<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts<I, E>(nodes: I, edges: E) -> Self
    where
        I: IntoIterator<Item = N>,
        E: IntoIterator<Item = (N, N, Weight)>,
    {
        let mut graph = Self::new();
        for node in nodes {
            graph.add_node(node);
        }
        for (a, b, weight) in edges {
            graph.add_edge(a, b, weight);
        }
        graph
    }

    pub fn add_edge(&mut self, a: N, b: N, weight: Weight) {
        self.inner.add_edge(a.clone(), b.clone(), weight);
        self.inner.add_edge(b, a, weight);
    }

    pub fn try_add_edge(&mut self, a: N, b: N, weight: Weight) -> Result<()>
    where
        N: Debug,
    {
        self.inner.try_add_edge(a.clone(), b.clone(), weight)?;
        self.inner.add_edge(b, a, weight);
        Ok(())
    }

    /// Remove the edge in both directions. True if either direction existed.
    pub fn remove_edge(&mut self, a: &N, b: &N) -> bool {
        let forward = self.inner.remove_edge(a, b);
        let backward = self.inner.remove_edge(b, a);
        forward || backward
    }

    pub fn add_node(&mut self, node: N) -> bool {
        self.inner.add_node(node)
    }

    pub fn remove_node(&mut self, node: &N) -> bool {
        self.inner.remove_node(node)
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.inner.contains_node(node)
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.inner.nodes()
    }

    pub fn neighbors<'a>(&'a self, node: &N) -> impl Iterator<Item = (&'a N, Weight)> + 'a {
        self.inner.neighbors(node)
    }

    pub fn adjacent(&self, node: &N) -> Vec<(N, Weight)> {
        self.inner.adjacent(node)
    }

    pub fn has_edge(&self, a: &N, b: &N) -> bool {
        self.inner.has_edge(a, b)
    }

    pub fn weight(&self, a: &N, b: &N) -> Option<Weight> {
        self.inner.weight(a, b)
    }

    /// Number of incident edges; a self-loop counts once.
    pub fn degree(&self, node: &N) -> usize {
        self.inner.out_degree(node)
    }

    pub fn in_degree(&self, node: &N) -> usize {
        self.degree(node)
    }

    pub fn out_degree(&self, node: &N) -> usize {
        self.degree(node)
    }

    /// Number of undirected edges.
    ///
    /// Mirrored pairs are stored twice and self-loops once, so self-loops are
    /// added back before halving.
    pub fn edge_count(&self) -> usize {
        (self.inner.edge_count() + self.inner.self_loops().count()) / 2
    }

    /// Every stored directed edge; each undirected edge appears in both directions.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, Weight)> + '_ {
        self.inner.edges()
    }

    /// Sum of weights, counting each undirected edge once.
    pub fn total_weight(&self) -> Weight {
        let loops: Weight = self.inner.self_loops().sum();
        (self.inner.total_weight() + loops) / 2.0
    }

    /// The symmetric directed storage.
    pub fn as_directed(&self) -> &DirectedGraph<N> {
        &self.inner
    }

    pub fn shortest_path(&self, a: &N, b: &N) -> ShortestPath<N> {
        self.inner.shortest_path(a, b)
    }

    pub fn shortest_path_tree(&self, src: &N) -> ShortestPathTree<N> {
        self.inner.shortest_path_tree(src)
    }
}

impl<N: Eq + Hash> From<UndirectedGraph<N>> for DirectedGraph<N> {
    fn from(graph: UndirectedGraph<N>) -> Self {
        graph.inner
    }
}
