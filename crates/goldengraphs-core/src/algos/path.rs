//! Path reconstruction from predecessor maps

use crate::error::{GraphError, Result};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Walk predecessor links from `target` back to `source`.
///
/// Returns `None` if the chain breaks (or loops) before reaching `source`.
fn walk_back<N: Clone + Eq + Hash>(
    source: &N,
    target: &N,
    predecessors: &HashMap<N, N>,
) -> Option<Vec<N>> {
    let mut path = vec![target.clone()];
    let mut current = target;

    while current != source {
        // A well-formed chain visits each predecessor entry at most once.
        if path.len() > predecessors.len() {
            return None;
        }
        current = predecessors.get(current)?;
        path.push(current.clone());
    }

    path.reverse();
    Some(path)
}

/// Rebuild the node sequence `source ..= target` from a predecessor map.
///
/// Only call this for targets known to be reachable, e.g. nodes settled by a
/// shortest-path search from `source`.
///
/// # Panics
///
/// Panics if no predecessor chain leads from `target` back to `source`.
pub fn reconstruct_path<N: Clone + Eq + Hash>(
    source: &N,
    target: &N,
    predecessors: &HashMap<N, N>,
) -> Vec<N> {
    match walk_back(source, target, predecessors) {
        Some(path) => path,
        None => panic!("reconstruct_path: target has no predecessor chain back to source"),
    }
}

/// Checked form of [`reconstruct_path`].
pub fn try_reconstruct_path<N: Clone + Eq + Hash + Debug>(
    source: &N,
    target: &N,
    predecessors: &HashMap<N, N>,
) -> Result<Vec<N>> {
    walk_back(source, target, predecessors).ok_or_else(|| GraphError::unreachable(source, target))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> HashMap<&'static str, &'static str> {
        [("B", "A"), ("C", "B"), ("D", "C")].into_iter().collect()
    }

    /// Test that a full chain is rebuilt source-first
    #[test]
    fn test_reconstruct_chain() {
        assert_eq!(reconstruct_path(&"A", &"D", &chain()), vec!["A", "B", "C", "D"]);
    }

    /// Test that source == target yields a single-node path
    #[test]
    fn test_reconstruct_source_itself() {
        assert_eq!(reconstruct_path(&"A", &"A", &HashMap::new()), vec!["A"]);
    }

    /// Test that an intermediate source cuts the walk short
    #[test]
    fn test_reconstruct_from_intermediate_source() {
        assert_eq!(reconstruct_path(&"B", &"D", &chain()), vec!["B", "C", "D"]);
    }

    /// Test that a missing link is a loud failure
    #[test]
    #[should_panic(expected = "no predecessor chain")]
    fn test_reconstruct_unreachable_panics() {
        reconstruct_path(&"A", &"Z", &chain());
    }

    /// Test that the checked form reports unreachable targets
    #[test]
    fn test_try_reconstruct_unreachable() {
        let err = try_reconstruct_path(&"A", &"Z", &chain()).unwrap_err();
        assert!(matches!(err, GraphError::Unreachable { .. }));
    }

    /// Test that a predecessor cycle not containing the source terminates
    #[test]
    fn test_try_reconstruct_cycle_terminates() {
        let looped: HashMap<_, _> = [("X", "Y"), ("Y", "X")].into_iter().collect();
        assert!(try_reconstruct_path(&"A", &"X", &looped).is_err());
    }
}
