//! Goldengraphs Core Library
//!
//! Generic weighted-graph algorithms over caller-defined node types:
//! Dijkstra and A* shortest paths, Kahn topological ordering, union-find,
//! and Kruskal minimum spanning forests. Every algorithm is synchronous and
//! deterministic for a fixed input and adjacency order, and accepts an
//! optional observer that sees a read-only view of each step.

pub mod algos;
pub mod config;
pub mod error;
pub mod graph;
pub mod logging;

pub use algos::{
    a_star, dijkstra, dijkstra_all_paths, kahn, kahn_strict, kruskal, minimum_spanning_forest,
    reconstruct_path, try_reconstruct_path, SearchObserver, SearchSnapshot, SearchStep,
    ShortestPath, ShortestPathTree, SortObserver, SortSnapshot, SortStep, UnionFind,
};
pub use config::LoggingConfig;
pub use error::{GraphError, Result};
pub use graph::{DirectedGraph, UndirectedGraph, Weight};
