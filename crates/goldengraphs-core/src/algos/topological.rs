//! Kahn's algorithm for topological ordering

use crate::algos::observer::{SortObserver, SortStep};
use crate::error::{GraphError, Result};
use crate::trace_time;
use indexmap::IndexSet;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::time::Instant;

/// Topologically order `nodes`, where `adjacent(node)` yields the targets of
/// the node's outgoing edges.
///
/// In-degrees count only edges leaving the input nodes. Nodes with no incoming
/// edges start the queue in input order (duplicates in `nodes` are dropped).
/// An edge target missing from `nodes` is ordered once its in-degree from the
/// input drops to zero; its own outgoing edges were never counted, so only
/// input-counted targets can be queued from it.
///
/// A cycle is reported only by length: nodes on or behind a cycle never reach
/// in-degree 0, so the result is shorter than the input. Use [`kahn_strict`]
/// to get an error instead.
#[tracing::instrument(level = "debug", skip_all)]
pub fn kahn<N, A, I>(
    nodes: impl IntoIterator<Item = N>,
    adjacent: A,
    observer: Option<&mut dyn SortObserver<N>>,
) -> Vec<N>
where
    N: Clone + Eq + Hash,
    A: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    let nodes: IndexSet<N> = nodes.into_iter().collect();
    order_nodes(&nodes, adjacent, observer)
}

/// Like [`kahn`], but a cyclic input is an error.
pub fn kahn_strict<N, A, I>(
    nodes: impl IntoIterator<Item = N>,
    adjacent: A,
    observer: Option<&mut dyn SortObserver<N>>,
) -> Result<Vec<N>>
where
    N: Clone + Eq + Hash,
    A: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    let nodes: IndexSet<N> = nodes.into_iter().collect();
    let order = order_nodes(&nodes, adjacent, observer);

    let total = nodes.len();
    let sorted = order.iter().filter(|node| nodes.contains(*node)).count();
    if sorted < total {
        return Err(GraphError::CycleDetected { sorted, total });
    }
    Ok(order)
}

fn order_nodes<N, A, I>(
    nodes: &IndexSet<N>,
    mut adjacent: A,
    mut observer: Option<&mut dyn SortObserver<N>>,
) -> Vec<N>
where
    N: Clone + Eq + Hash,
    A: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    let start = Instant::now();

    let mut in_degree: HashMap<N, usize> = HashMap::new();
    for node in nodes {
        for target in adjacent(node) {
            *in_degree.entry(target).or_insert(0) += 1;
        }
    }

    let mut queue: VecDeque<N> = nodes
        .iter()
        .filter(|node| in_degree.get(*node).copied().unwrap_or(0) == 0)
        .cloned()
        .collect();
    let mut order: Vec<N> = Vec::with_capacity(nodes.len());

    while let Some(node) = queue.pop_front() {
        order.push(node.clone());

        if let Some(observer) = observer.as_mut() {
            observer.on_step(&SortStep::new(&node, &order, &in_degree, &queue));
        }

        for target in adjacent(&node) {
            // Uncounted targets never become ready, and a degree that already
            // reached zero is not queued twice.
            if let Some(degree) = in_degree.get_mut(&target) {
                if *degree > 0 {
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(target);
                    }
                }
            }
        }
        tracing::trace!(ordered = order.len(), queued = queue.len(), "ordered node");
    }

    tracing::debug!(
        ordered = order.len(),
        input = nodes.len(),
        acyclic = order.len() >= nodes.len(),
        "topological sort finished"
    );
    trace_time!(start, "kahn");
    order
}
