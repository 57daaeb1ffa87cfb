use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::algos::{dijkstra, dijkstra_all_paths, kahn, ShortestPath, ShortestPathTree};
use crate::error::{GraphError, Result};
use crate::graph::Weight;

/// Directed weighted graph.
///
/// At most one edge is stored per ordered `(src, dst)` pair; adding an edge
/// again overwrites its weight. Adding an edge creates missing endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectedGraph<N: Eq + Hash> {
    adjacency: IndexMap<N, IndexMap<N, Weight>>,
}

impl<N: Eq + Hash> Default for DirectedGraph<N> {
    fn default() -> Self {
        Self {
            adjacency: IndexMap::new(),
        }
    }
}

impl<N: Clone + Eq + Hash> DirectedGraph<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for a known node count.
    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            adjacency: IndexMap::with_capacity(node_count),
        }
    }

    /// Build a graph from an initial node set and edge set.
    ///
    /// Nodes are inserted first, so isolated nodes keep their position.
    pub fn from_parts<I, E>(nodes: I, edges: E) -> Self
    where
        I: IntoIterator<Item = N>,
        E: IntoIterator<Item = (N, N, Weight)>,
    {
        let mut graph = Self::new();
        for node in nodes {
            graph.add_node(node);
        }
        for (src, dst, weight) in edges {
            graph.add_edge(src, dst, weight);
        }
        graph
    }

    /// Add (or overwrite) the edge `src -> dst`. Weight sign is not checked.
    pub fn add_edge(&mut self, src: N, dst: N, weight: Weight) {
        let entry = self.adjacency.entry(src);
        let src_index = entry.index();
        entry.or_default();
        self.adjacency.entry(dst.clone()).or_default();
        if let Some((_, targets)) = self.adjacency.get_index_mut(src_index) {
            targets.insert(dst, weight);
        }
    }

    /// Like [`add_edge`](Self::add_edge), but rejects NaN and infinite weights.
    pub fn try_add_edge(&mut self, src: N, dst: N, weight: Weight) -> Result<()>
    where
        N: Debug,
    {
        if !weight.is_finite() {
            return Err(GraphError::invalid_weight(&src, &dst, weight));
        }
        self.add_edge(src, dst, weight);
        Ok(())
    }

    /// Remove the edge `src -> dst`. Returns false if it was not present.
    pub fn remove_edge(&mut self, src: &N, dst: &N) -> bool {
        self.adjacency
            .get_mut(src)
            .is_some_and(|targets| targets.shift_remove(dst).is_some())
    }

    /// Add an isolated node. Returns false if it already exists.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, IndexMap::new());
        true
    }

    /// Remove a node and every edge into or out of it.
    pub fn remove_node(&mut self, node: &N) -> bool {
        if self.adjacency.shift_remove(node).is_none() {
            return false;
        }
        for targets in self.adjacency.values_mut() {
            targets.shift_remove(node);
        }
        true
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.adjacency.keys()
    }

    /// Outgoing `(neighbor, weight)` pairs. Empty for an unknown node.
    pub fn neighbors<'a>(&'a self, node: &N) -> impl Iterator<Item = (&'a N, Weight)> + 'a {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|targets| targets.iter().map(|(dst, &weight)| (dst, weight)))
    }

    /// Outgoing pairs with owned nodes, in the shape the algorithms consume.
    pub fn adjacent(&self, node: &N) -> Vec<(N, Weight)> {
        self.neighbors(node)
            .map(|(dst, weight)| (dst.clone(), weight))
            .collect()
    }

    pub fn has_edge(&self, src: &N, dst: &N) -> bool {
        self.adjacency
            .get(src)
            .is_some_and(|targets| targets.contains_key(dst))
    }

    pub fn weight(&self, src: &N, dst: &N) -> Option<Weight> {
        self.adjacency.get(src)?.get(dst).copied()
    }

    pub fn in_degree(&self, node: &N) -> usize {
        self.adjacency
            .values()
            .filter(|targets| targets.contains_key(node))
            .count()
    }

    pub fn out_degree(&self, node: &N) -> usize {
        self.adjacency.get(node).map_or(0, |targets| targets.len())
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|targets| targets.len()).sum()
    }

    /// Every stored edge as `(src, dst, weight)`, grouped by source.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, Weight)> + '_ {
        self.adjacency.iter().flat_map(|(src, targets)| {
            targets
                .iter()
                .map(move |(dst, &weight)| (src, dst, weight))
        })
    }

    /// Sum of all stored edge weights.
    pub fn total_weight(&self) -> Weight {
        self.edges().map(|(_, _, weight)| weight).sum()
    }

    pub(crate) fn self_loops(&self) -> impl Iterator<Item = Weight> + '_ {
        self.edges()
            .filter(|(src, dst, _)| src == dst)
            .map(|(_, _, weight)| weight)
    }

    /// Dijkstra from `src` to `dst` over this graph.
    pub fn shortest_path(&self, src: &N, dst: &N) -> ShortestPath<N> {
        dijkstra(
            src.clone(),
            |node: &N, _| node == dst,
            |node: &N| self.adjacent(node),
            None,
        )
    }

    /// Shortest distances and predecessors from `src` to every reachable node.
    pub fn shortest_path_tree(&self, src: &N) -> ShortestPathTree<N> {
        dijkstra_all_paths(src.clone(), |node: &N| self.adjacent(node), None)
    }

    /// Kahn ordering of all nodes; shorter than `node_count()` if cyclic.
    pub fn topological_order(&self) -> Vec<N> {
        kahn(
            self.nodes().cloned(),
            |node: &N| {
                self.neighbors(node)
                    .map(|(dst, _)| dst.clone())
                    .collect::<Vec<_>>()
            },
            None,
        )
    }
}
