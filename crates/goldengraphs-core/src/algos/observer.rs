//! Instrumentation hooks for step-by-step algorithm observation
//!
//! After each processed node an algorithm hands its observer a step value
//! borrowing the live search state. Steps only expose shared references, so an
//! observer can read everything but mutate nothing, and it cannot keep a step
//! past the call. Observers that need history (a visualizer replaying a run,
//! a test recording events) take an owned copy with `to_snapshot()`.
//!
//! Observers run inline on the algorithm's thread, before the next iteration.

use crate::algos::frontier::FrontierEntry;
use crate::graph::Weight;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};
use std::hash::Hash;

/// Search state right after a node was settled and before its neighbors are
/// relaxed.
pub struct SearchStep<'a, N> {
    current: &'a N,
    visited: &'a HashSet<N>,
    distances: &'a HashMap<N, Weight>,
    predecessors: &'a HashMap<N, N>,
    frontier: &'a BinaryHeap<Reverse<FrontierEntry<N>>>,
}

impl<'a, N: Clone + Eq + Hash> SearchStep<'a, N> {
    pub(crate) fn new(
        current: &'a N,
        visited: &'a HashSet<N>,
        distances: &'a HashMap<N, Weight>,
        predecessors: &'a HashMap<N, N>,
        frontier: &'a BinaryHeap<Reverse<FrontierEntry<N>>>,
    ) -> Self {
        Self {
            current,
            visited,
            distances,
            predecessors,
            frontier,
        }
    }

    /// The node just extracted and marked visited.
    pub fn current(&self) -> &'a N {
        self.current
    }

    /// Nodes whose distance is final, including `current`.
    pub fn visited(&self) -> &'a HashSet<N> {
        self.visited
    }

    /// Best known distance for every node reached so far.
    pub fn distances(&self) -> &'a HashMap<N, Weight> {
        self.distances
    }

    /// Best known distance to `node`, `+inf` if not reached yet.
    pub fn distance(&self, node: &N) -> Weight {
        self.distances.get(node).copied().unwrap_or(Weight::INFINITY)
    }

    pub fn predecessors(&self) -> &'a HashMap<N, N> {
        self.predecessors
    }

    /// Frontier contents as `(priority, node)` in underlying heap order.
    ///
    /// Only the heap invariant holds; the sequence is not sorted. Stale
    /// entries for already-visited nodes are included.
    pub fn frontier(&self) -> impl Iterator<Item = (Weight, &'a N)> + 'a {
        self.frontier
            .iter()
            .map(|Reverse(entry)| (entry.priority, &entry.node))
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Deep copy of this step.
    pub fn to_snapshot(&self) -> SearchSnapshot<N> {
        SearchSnapshot {
            current: self.current.clone(),
            visited: self.visited.clone(),
            distances: self.distances.clone(),
            predecessors: self.predecessors.clone(),
            frontier: self
                .frontier()
                .map(|(priority, node)| (priority, node.clone()))
                .collect(),
        }
    }
}

/// Owned copy of a [`SearchStep`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSnapshot<N: Eq + Hash> {
    pub current: N,
    pub visited: HashSet<N>,
    pub distances: HashMap<N, Weight>,
    pub predecessors: HashMap<N, N>,
    pub frontier: Vec<(Weight, N)>,
}

/// Observer for shortest-path searches.
pub trait SearchObserver<N> {
    fn on_step(&mut self, step: &SearchStep<'_, N>);
}

impl<N, F> SearchObserver<N> for F
where
    F: FnMut(&SearchStep<'_, N>),
{
    fn on_step(&mut self, step: &SearchStep<'_, N>) {
        self(step)
    }
}

/// Kahn state right after a node was appended to the order and before its
/// successors' in-degrees are decremented.
pub struct SortStep<'a, N> {
    current: &'a N,
    order: &'a [N],
    in_degree: &'a HashMap<N, usize>,
    queue: &'a VecDeque<N>,
}

impl<'a, N: Clone + Eq + Hash> SortStep<'a, N> {
    pub(crate) fn new(
        current: &'a N,
        order: &'a [N],
        in_degree: &'a HashMap<N, usize>,
        queue: &'a VecDeque<N>,
    ) -> Self {
        Self {
            current,
            order,
            in_degree,
            queue,
        }
    }

    /// The node just appended; always the last element of `order()`.
    pub fn current(&self) -> &'a N {
        self.current
    }

    pub fn order(&self) -> &'a [N] {
        self.order
    }

    /// Remaining in-degree of every node that is the target of some edge.
    pub fn in_degree(&self) -> &'a HashMap<N, usize> {
        self.in_degree
    }

    /// Remaining in-degree of `node`; 0 for nodes no edge points at.
    pub fn in_degree_of(&self, node: &N) -> usize {
        self.in_degree.get(node).copied().unwrap_or(0)
    }

    /// Queued nodes, front first.
    pub fn queue(&self) -> impl Iterator<Item = &'a N> + 'a {
        self.queue.iter()
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Deep copy of this step.
    pub fn to_snapshot(&self) -> SortSnapshot<N> {
        SortSnapshot {
            current: self.current.clone(),
            order: self.order.to_vec(),
            in_degree: self.in_degree.clone(),
            queue: self.queue.iter().cloned().collect(),
        }
    }
}

/// Owned copy of a [`SortStep`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSnapshot<N: Eq + Hash> {
    pub current: N,
    pub order: Vec<N>,
    pub in_degree: HashMap<N, usize>,
    pub queue: Vec<N>,
}

/// Observer for topological sorting.
pub trait SortObserver<N> {
    fn on_step(&mut self, step: &SortStep<'_, N>);
}

impl<N, F> SortObserver<N> for F
where
    F: FnMut(&SortStep<'_, N>),
{
    fn on_step(&mut self, step: &SortStep<'_, N>) {
        self(step)
    }
}
