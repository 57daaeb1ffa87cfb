//! Dijkstra and A* over a caller-supplied adjacency function
//!
//! All three entry points run the same frontier expansion:
//! - priority = distance (+ heuristic estimate for A*)
//! - ties pop in push order via a per-search sequence counter
//! - stale frontier entries are skipped on extraction (lazy deletion)
//! - relaxation only on a strictly shorter candidate

use crate::algos::frontier::FrontierEntry;
use crate::algos::observer::{SearchObserver, SearchStep};
use crate::algos::path::reconstruct_path;
use crate::graph::Weight;
use crate::trace_time;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::hash::Hash;
use std::time::Instant;

/// Result of a goal-seeking search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath<N> {
    /// Nodes from source to goal inclusive; empty when no goal was reached
    pub path: Vec<N>,
    /// Total weight of `path`; `+inf` when no goal was reached
    pub distance: Weight,
}

impl<N> ShortestPath<N> {
    pub fn unreachable() -> Self {
        ShortestPath {
            path: Vec::new(),
            distance: Weight::INFINITY,
        }
    }

    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges on the path.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Result of an exhaustive search: the full shortest-path tree
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathTree<N: Eq + Hash> {
    pub source: N,
    /// Shortest distance to every reachable node (source included, at 0)
    pub distances: HashMap<N, Weight>,
    /// Tree parent of every reachable node except the source
    pub predecessors: HashMap<N, N>,
}

impl<N: Clone + Eq + Hash> ShortestPathTree<N> {
    /// Distance to `node`, `+inf` if unreachable.
    pub fn distance_to(&self, node: &N) -> Weight {
        self.distances.get(node).copied().unwrap_or(Weight::INFINITY)
    }

    pub fn is_reachable(&self, node: &N) -> bool {
        self.distances.contains_key(node)
    }

    /// Path from the source to `node`, or `None` if unreachable.
    pub fn path_to(&self, node: &N) -> Option<Vec<N>> {
        self.is_reachable(node)
            .then(|| reconstruct_path(&self.source, node, &self.predecessors))
    }

    /// Number of reachable nodes, source included.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

/// Counters reported when a search finishes
#[derive(Debug, Default, Clone, Copy)]
struct SearchStats {
    settled: usize,
    stale: usize,
    pushed: usize,
}

/// State tracked during a frontier expansion
struct SearchState<'o, N> {
    distances: HashMap<N, Weight>,
    predecessors: HashMap<N, N>,
    visited: HashSet<N>,
    frontier: BinaryHeap<Reverse<FrontierEntry<N>>>,
    sequence: u64,
    observer: Option<&'o mut dyn SearchObserver<N>>,
    stats: SearchStats,
}

impl<'o, N: Clone + Eq + Hash> SearchState<'o, N> {
    fn new(source: N, priority: Weight, observer: Option<&'o mut dyn SearchObserver<N>>) -> Self {
        let mut state = Self {
            distances: HashMap::new(),
            predecessors: HashMap::new(),
            visited: HashSet::new(),
            frontier: BinaryHeap::new(),
            sequence: 0,
            observer,
            stats: SearchStats::default(),
        };
        state.distances.insert(source.clone(), 0.0);
        state.push(priority, source);
        state
    }

    fn distance(&self, node: &N) -> Weight {
        self.distances.get(node).copied().unwrap_or(Weight::INFINITY)
    }

    fn push(&mut self, priority: Weight, node: N) {
        self.frontier.push(Reverse(FrontierEntry {
            priority,
            sequence: self.sequence,
            node,
        }));
        self.sequence += 1;
        self.stats.pushed += 1;
    }

    /// Pop the next unvisited node, mark it visited and notify the observer.
    fn settle_next(&mut self) -> Option<(N, Weight)> {
        while let Some(Reverse(entry)) = self.frontier.pop() {
            if self.visited.contains(&entry.node) {
                self.stats.stale += 1;
                continue;
            }
            self.visited.insert(entry.node.clone());
            self.stats.settled += 1;

            if let Some(observer) = self.observer.as_mut() {
                observer.on_step(&SearchStep::new(
                    &entry.node,
                    &self.visited,
                    &self.distances,
                    &self.predecessors,
                    &self.frontier,
                ));
            }

            let distance = self.distance(&entry.node);
            tracing::trace!(distance, frontier = self.frontier.len(), "settled node");
            return Some((entry.node, distance));
        }
        None
    }

    /// Record a strictly better distance to `node` via `via` and queue it.
    fn improve(&mut self, via: &N, node: N, distance: Weight, priority: Weight) {
        self.distances.insert(node.clone(), distance);
        self.predecessors.insert(node.clone(), via.clone());
        self.push(priority, node);
    }
}

enum SearchOutcome<N> {
    Reached(N, Weight),
    Exhausted,
}

fn estimate<N, H: FnMut(&N) -> Weight>(heuristic: &mut Option<H>, node: &N) -> Weight {
    match heuristic {
        Some(h) => h(node),
        None => 0.0,
    }
}

/// Shared frontier expansion.
///
/// Without a goal the search runs until the frontier is empty.
fn expand<'o, N, A, I, G, H>(
    state: &mut SearchState<'o, N>,
    mut adjacent: A,
    mut is_goal: Option<G>,
    mut heuristic: Option<H>,
) -> SearchOutcome<N>
where
    N: Clone + Eq + Hash,
    A: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, Weight)>,
    G: FnMut(&N, Weight) -> bool,
    H: FnMut(&N) -> Weight,
{
    while let Some((current, distance)) = state.settle_next() {
        if let Some(goal) = is_goal.as_mut() {
            if goal(&current, distance) {
                return SearchOutcome::Reached(current, distance);
            }
        }

        for (neighbor, weight) in adjacent(&current) {
            let candidate = distance + weight;
            if candidate < state.distance(&neighbor) {
                let priority = candidate + estimate(&mut heuristic, &neighbor);
                state.improve(&current, neighbor, candidate, priority);
            }
        }
    }
    SearchOutcome::Exhausted
}

/// Goal-seeking search shared by `dijkstra` and `a_star`.
fn seek<N, G, A, I, H>(
    source: N,
    is_goal: G,
    adjacent: A,
    mut heuristic: Option<H>,
    observer: Option<&mut dyn SearchObserver<N>>,
) -> ShortestPath<N>
where
    N: Clone + Eq + Hash,
    G: FnMut(&N, Weight) -> bool,
    A: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, Weight)>,
    H: FnMut(&N) -> Weight,
{
    let start = Instant::now();
    let priority = estimate(&mut heuristic, &source);
    let mut state = SearchState::new(source.clone(), priority, observer);

    let result = match expand(&mut state, adjacent, Some(is_goal), heuristic) {
        SearchOutcome::Reached(goal, distance) => ShortestPath {
            path: reconstruct_path(&source, &goal, &state.predecessors),
            distance,
        },
        SearchOutcome::Exhausted => ShortestPath::unreachable(),
    };

    let stats = state.stats;
    tracing::debug!(
        found = result.is_found(),
        distance = result.distance,
        settled = stats.settled,
        stale = stats.stale,
        pushed = stats.pushed,
        "search finished"
    );
    trace_time!(start, "seek");
    result
}

/// Dijkstra's shortest path from `source` to the first node satisfying
/// `is_goal(node, distance)`.
///
/// `adjacent(node)` yields `(neighbor, weight)` pairs; weights must be
/// non-negative. If no reachable node is a goal the result is empty with an
/// infinite distance.
#[tracing::instrument(level = "debug", skip_all)]
pub fn dijkstra<N, G, A, I>(
    source: N,
    is_goal: G,
    adjacent: A,
    observer: Option<&mut dyn SearchObserver<N>>,
) -> ShortestPath<N>
where
    N: Clone + Eq + Hash,
    G: FnMut(&N, Weight) -> bool,
    A: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, Weight)>,
{
    seek(source, is_goal, adjacent, None::<fn(&N) -> Weight>, observer)
}

/// A* search: Dijkstra with frontier priority `distance + heuristic(node)`.
///
/// The result is optimal only if `heuristic` never overestimates the remaining
/// distance to a goal. A heuristic that is always 0 makes this Dijkstra.
#[tracing::instrument(level = "debug", skip_all)]
pub fn a_star<N, G, A, I, H>(
    source: N,
    is_goal: G,
    adjacent: A,
    heuristic: H,
    observer: Option<&mut dyn SearchObserver<N>>,
) -> ShortestPath<N>
where
    N: Clone + Eq + Hash,
    G: FnMut(&N, Weight) -> bool,
    A: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, Weight)>,
    H: FnMut(&N) -> Weight,
{
    seek(source, is_goal, adjacent, Some(heuristic), observer)
}

/// Shortest distances and predecessors from `source` to every reachable node.
#[tracing::instrument(level = "debug", skip_all)]
pub fn dijkstra_all_paths<N, A, I>(
    source: N,
    adjacent: A,
    observer: Option<&mut dyn SearchObserver<N>>,
) -> ShortestPathTree<N>
where
    N: Clone + Eq + Hash,
    A: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, Weight)>,
{
    let start = Instant::now();
    let mut state = SearchState::new(source.clone(), 0.0, observer);
    expand(
        &mut state,
        adjacent,
        None::<fn(&N, Weight) -> bool>,
        None::<fn(&N) -> Weight>,
    );

    let stats = state.stats;
    tracing::debug!(
        reachable = state.distances.len(),
        settled = stats.settled,
        stale = stats.stale,
        pushed = stats.pushed,
        "search finished"
    );
    trace_time!(start, "dijkstra_all_paths");

    ShortestPathTree {
        source,
        distances: state.distances,
        predecessors: state.predecessors,
    }
}
