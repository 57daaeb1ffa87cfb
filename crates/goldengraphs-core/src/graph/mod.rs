//! Weighted graph data model
//!
//! Provides the adjacency storage the algorithms consume:
//! - `DirectedGraph`: node -> (neighbor -> weight), one edge per ordered pair
//! - `UndirectedGraph`: a directed graph kept symmetric on every mutation
//!
//! Both store nodes and neighbors in insertion order, so iteration (and with
//! it every algorithm run over them) is deterministic.

mod directed;
mod undirected;

pub use directed::DirectedGraph;
pub use undirected::UndirectedGraph;

/// Edge weight. Shortest-path searches assume finite, non-negative weights.
pub type Weight = f64;
