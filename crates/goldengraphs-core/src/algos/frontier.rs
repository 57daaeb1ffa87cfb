use crate::graph::Weight;
use std::cmp::Ordering;

/// Frontier entry, ordered by `(priority, sequence)`.
///
/// `sequence` is unique per push, so the node itself is never compared and
/// the first-pushed of two equal priorities pops first. Wrap in
/// `std::cmp::Reverse` to use with `BinaryHeap` as a min-heap.
#[derive(Debug, Clone)]
pub(crate) struct FrontierEntry<N> {
    pub priority: Weight,
    pub sequence: u64,
    pub node: N,
}

impl<N> PartialEq for FrontierEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for FrontierEntry<N> {}

impl<N> PartialOrd for FrontierEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for FrontierEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;

    fn entry(priority: Weight, sequence: u64, node: &'static str) -> FrontierEntry<&'static str> {
        FrontierEntry {
            priority,
            sequence,
            node,
        }
    }

    /// Test that lower priority compares as less regardless of sequence
    #[test]
    fn test_priority_dominates_sequence() {
        assert_eq!(entry(1.0, 9, "A").cmp(&entry(2.0, 0, "B")), Ordering::Less);
        assert_eq!(entry(2.0, 0, "B").cmp(&entry(1.0, 9, "A")), Ordering::Greater);
    }

    /// Test that equal priorities fall back to insertion sequence
    #[test]
    fn test_sequence_breaks_ties() {
        assert_eq!(entry(1.0, 1, "A").cmp(&entry(1.0, 2, "B")), Ordering::Less);
        assert_ne!(entry(1.0, 1, "A"), entry(1.0, 2, "A"));
        assert_eq!(entry(1.0, 1, "A"), entry(1.0, 1, "Z"));
    }

    /// Test that the reversed heap pops first-inserted among equal priorities
    #[test]
    fn test_min_heap_pop_order() {
        let mut heap = BinaryHeap::new();
        heap.push(Reverse(entry(3.0, 0, "C")));
        heap.push(Reverse(entry(1.0, 1, "A1")));
        heap.push(Reverse(entry(1.0, 2, "A2")));
        heap.push(Reverse(entry(f64::INFINITY, 3, "far")));
        heap.push(Reverse(entry(0.5, 4, "B")));

        let order: Vec<_> = std::iter::from_fn(|| heap.pop().map(|Reverse(e)| e.node)).collect();
        assert_eq!(order, vec!["B", "A1", "A2", "C", "far"]);
    }
}
