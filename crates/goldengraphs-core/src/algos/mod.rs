//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `shortest_path`: Dijkstra and A* over one shared frontier expansion
//! - `topological`: Kahn's in-degree ordering
//! - `union_find`: disjoint-set forest
//! - `spanning_forest`: Kruskal's minimum spanning forest
//! - `observer`: read-only step snapshots handed to instrumentation callbacks
//! - `path`: predecessor-map path reconstruction

mod frontier;
pub mod observer;
pub mod path;
pub mod shortest_path;
pub mod spanning_forest;
pub mod topological;
pub mod union_find;

pub use observer::{SearchObserver, SearchSnapshot, SearchStep, SortObserver, SortSnapshot, SortStep};
pub use path::{reconstruct_path, try_reconstruct_path};
pub use shortest_path::{a_star, dijkstra, dijkstra_all_paths, ShortestPath, ShortestPathTree};
pub use spanning_forest::{kruskal, minimum_spanning_forest};
pub use topological::{kahn, kahn_strict};
pub use union_find::UnionFind;
