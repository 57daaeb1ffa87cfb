//! Goldengraphs
//!
//! Generic graph algorithms with step-level instrumentation. This crate
//! re-exports the public API of `goldengraphs-core`:
//!
//! - [`DirectedGraph`] / [`UndirectedGraph`]: insertion-ordered weighted graphs
//! - [`dijkstra`], [`a_star`], [`dijkstra_all_paths`]: shortest paths over any
//!   adjacency function, with an optional [`SearchObserver`]
//! - [`kahn`]: topological order, with an optional [`SortObserver`]
//! - [`UnionFind`] and [`kruskal`]: disjoint sets and minimum spanning forests
//!
//! ```
//! use goldengraphs::UndirectedGraph;
//!
//! let graph = UndirectedGraph::from_parts(
//!     ["A", "B", "C", "D"],
//!     [("A", "B", 1.0), ("B", "D", 5.0), ("A", "C", 2.0), ("C", "D", 1.0)],
//! );
//! let route = graph.shortest_path(&"A", &"D");
//! assert_eq!(route.path, vec!["A", "C", "D"]);
//! assert_eq!(route.distance, 3.0);
//! ```

pub use goldengraphs_core::*;
