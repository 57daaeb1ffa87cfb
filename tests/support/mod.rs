use std::collections::HashSet;

use goldengraphs::{DirectedGraph, UndirectedGraph, Weight};
use proptest::prelude::*;

/// Upper bound on generated node counts, small enough for exhaustive path checks
pub const MAX_NODES: u32 = 8;

/// One edge-mask slot: no edge, or an integer weight in `1..=10` so sums stay exact
fn edge_slot(density: f64) -> impl Strategy<Value = Option<u32>> {
    proptest::option::weighted(density, 1u32..=10)
}

/// Directed graph on nodes `0..n` with `n` in `2..=MAX_NODES`, one mask slot per ordered pair
#[allow(dead_code)]
pub fn directed_graph() -> impl Strategy<Value = DirectedGraph<u32>> {
    (2..=MAX_NODES)
        .prop_flat_map(|n| {
            (
                Just(n),
                proptest::collection::vec(edge_slot(0.35), (n * n) as usize),
            )
        })
        .prop_map(|(n, mask)| {
            let mut graph = DirectedGraph::with_capacity(n as usize);
            for node in 0..n {
                graph.add_node(node);
            }
            for (slot, weight) in mask.into_iter().enumerate() {
                let (src, dst) = (slot as u32 / n, slot as u32 % n);
                if let Some(weight) = weight.filter(|_| src != dst) {
                    graph.add_edge(src, dst, Weight::from(weight));
                }
            }
            graph
        })
}

/// Undirected graph on nodes `0..n` with `n` in `2..=MAX_NODES`, one mask slot per pair
#[allow(dead_code)]
pub fn undirected_graph() -> impl Strategy<Value = UndirectedGraph<u32>> {
    (2..=MAX_NODES)
        .prop_flat_map(|n| {
            let pairs = (n * (n - 1) / 2) as usize;
            (Just(n), proptest::collection::vec(edge_slot(0.4), pairs))
        })
        .prop_map(|(n, mask)| {
            let mut graph = UndirectedGraph::new();
            for node in 0..n {
                graph.add_node(node);
            }
            let pairs = (0..n).flat_map(|a| ((a + 1)..n).map(move |b| (a, b)));
            for ((a, b), weight) in pairs.zip(mask) {
                if let Some(weight) = weight {
                    graph.add_edge(a, b, Weight::from(weight));
                }
            }
            graph
        })
}

/// Minimum weight over all simple paths `src -> dst`; `+inf` if there is none.
///
/// Exhaustive, so only meant for graphs of up to `MAX_NODES` nodes.
#[allow(dead_code)]
pub fn brute_force_distance(graph: &DirectedGraph<u32>, src: u32, dst: u32) -> Weight {
    fn walk(
        graph: &DirectedGraph<u32>,
        node: u32,
        dst: u32,
        on_path: &mut Vec<u32>,
        so_far: Weight,
        best: &mut Weight,
    ) {
        if node == dst {
            *best = best.min(so_far);
            return;
        }
        for (&next, weight) in graph.neighbors(&node) {
            if on_path.contains(&next) {
                continue;
            }
            on_path.push(next);
            walk(graph, next, dst, on_path, so_far + weight, best);
            on_path.pop();
        }
    }

    let mut best = Weight::INFINITY;
    walk(graph, src, dst, &mut vec![src], 0.0, &mut best);
    best
}

/// Total weight of a minimum spanning forest, by O(n^2) Prim.
#[allow(dead_code)]
pub fn prim_forest_weight(graph: &UndirectedGraph<u32>) -> Weight {
    let nodes: Vec<u32> = graph.nodes().copied().collect();
    let mut key = vec![Weight::INFINITY; nodes.len()];
    let mut in_tree = vec![false; nodes.len()];
    let mut total = 0.0;

    for _ in 0..nodes.len() {
        let Some(next) = (0..nodes.len())
            .filter(|&i| !in_tree[i])
            .min_by(|&a, &b| key[a].total_cmp(&key[b]))
        else {
            break;
        };
        // An unreached node starts a new tree.
        if key[next].is_finite() {
            total += key[next];
        }
        in_tree[next] = true;

        for (neighbor, weight) in graph.neighbors(&nodes[next]) {
            if let Some(i) = nodes.iter().position(|n| n == neighbor) {
                if !in_tree[i] && weight < key[i] {
                    key[i] = weight;
                }
            }
        }
    }
    total
}

/// Number of connected components, by repeated flood fill.
#[allow(dead_code)]
pub fn component_count(graph: &UndirectedGraph<u32>) -> usize {
    let mut seen = HashSet::new();
    let mut components = 0;
    for &start in graph.nodes() {
        if !seen.insert(start) {
            continue;
        }
        components += 1;
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            for (&next, _) in graph.neighbors(&node) {
                if seen.insert(next) {
                    stack.push(next);
                }
            }
        }
    }
    components
}
