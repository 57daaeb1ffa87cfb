//! Disjoint-set forest with path compression and union by rank

use indexmap::IndexMap;
use std::hash::Hash;

/// Union-find over arbitrary hashable elements.
///
/// Elements are created lazily: `find` or `union` on an unseen element makes
/// it a singleton root with rank 0. Nothing here can fail.
#[derive(Debug, Clone)]
pub struct UnionFind<T: Eq + Hash> {
    /// Parent index of each element, by position in the map
    parent: IndexMap<T, usize>,
    rank: Vec<u32>,
    components: usize,
}

impl<T: Eq + Hash> Default for UnionFind<T> {
    fn default() -> Self {
        Self {
            parent: IndexMap::new(),
            rank: Vec::new(),
            components: 0,
        }
    }
}

impl<T: Clone + Eq + Hash> UnionFind<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with every element of `elements` as its own singleton set.
    pub fn with_elements(elements: impl IntoIterator<Item = T>) -> Self {
        let mut sets = Self::new();
        for element in elements {
            sets.index_of(element);
        }
        sets
    }

    /// Position of `element`, registering it as a new singleton if unseen.
    fn index_of(&mut self, element: T) -> usize {
        let next = self.parent.len();
        let entry = self.parent.entry(element);
        let index = entry.index();
        if index == next {
            entry.or_insert(next);
            self.rank.push(0);
            self.components += 1;
        }
        index
    }

    /// Root index of `index` without rewriting any links.
    fn root(&self, mut index: usize) -> usize {
        while let Some((_, &parent)) = self.parent.get_index(index) {
            if parent == index {
                break;
            }
            index = parent;
        }
        index
    }

    /// Root index of `index`, pointing every node on the way directly at it.
    fn compress(&mut self, index: usize) -> usize {
        let root = self.root(index);

        let mut current = index;
        while current != root {
            let Some((_, parent)) = self.parent.get_index_mut(current) else {
                break;
            };
            let next = *parent;
            *parent = root;
            current = next;
        }
        root
    }

    /// Representative of the set containing `x`.
    ///
    /// Two passes: walk up to the root, then walk the same chain again and
    /// relink each node to the root. Stack use is constant.
    pub fn find(&mut self, x: &T) -> T {
        let index = self.index_of(x.clone());
        let root = self.compress(index);
        self.parent
            .get_index(root)
            .map_or_else(|| x.clone(), |(element, _)| element.clone())
    }

    /// Merge the sets containing `x` and `y`. Returns false if they were
    /// already the same set.
    ///
    /// The lower-rank root goes under the higher-rank one. On a tie `y`'s root
    /// goes under `x`'s root, whose rank grows by one.
    pub fn union(&mut self, x: &T, y: &T) -> bool {
        let x_index = self.index_of(x.clone());
        let y_index = self.index_of(y.clone());
        let x_root = self.compress(x_index);
        let y_root = self.compress(y_index);
        if x_root == y_root {
            return false;
        }

        let (parent, child) = if self.rank[x_root] < self.rank[y_root] {
            (y_root, x_root)
        } else {
            (x_root, y_root)
        };
        if self.rank[x_root] == self.rank[y_root] {
            self.rank[parent] += 1;
        }
        if let Some((_, link)) = self.parent.get_index_mut(child) {
            *link = parent;
        }
        self.components -= 1;
        tracing::trace!(components = self.components, "merged sets");
        true
    }

    /// Whether `x` and `y` are in the same set. Unseen elements are registered.
    pub fn connected(&mut self, x: &T, y: &T) -> bool {
        let x_index = self.index_of(x.clone());
        let y_index = self.index_of(y.clone());
        self.compress(x_index) == self.compress(y_index)
    }

    /// Whether `x` has been seen. Unlike `find`, this never registers it.
    pub fn contains(&self, x: &T) -> bool {
        self.parent.contains_key(x)
    }

    /// Number of elements seen so far.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Members of every set. Sets and members both come in first-seen order.
    pub fn groups(&self) -> Vec<Vec<T>> {
        let mut groups: IndexMap<usize, Vec<T>> = IndexMap::new();
        for (index, element) in self.parent.keys().enumerate() {
            groups
                .entry(self.root(index))
                .or_default()
                .push(element.clone());
        }
        groups.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Test the worked example: three unions leave one component
    #[test]
    fn test_union_find_example() {
        let mut sets = UnionFind::with_elements([1, 2, 3, 4]);
        assert!(sets.union(&1, &2));
        assert!(sets.union(&3, &4));
        assert!(sets.union(&2, &3));

        assert_eq!(sets.find(&1), sets.find(&4));
        assert_eq!(sets.component_count(), 1);
    }

    /// Test that find on an unseen element creates a singleton
    #[test]
    fn test_find_creates_singleton() {
        let mut sets = UnionFind::new();
        assert!(!sets.contains(&"a"));
        assert_eq!(sets.find(&"a"), "a");
        assert!(sets.contains(&"a"));
        assert_eq!(sets.len(), 1);
        assert_eq!(sets.component_count(), 1);
    }

    /// Test that joining an already joined pair reports false
    #[test]
    fn test_union_same_set_returns_false() {
        let mut sets = UnionFind::new();
        assert!(sets.union(&"a", &"b"));
        assert!(!sets.union(&"b", &"a"));
        assert!(!sets.union(&"a", &"a"));
        assert_eq!(sets.component_count(), 1);
    }

    /// Test that find is idempotent and agrees across a set
    #[test]
    fn test_find_idempotent() {
        let mut sets = UnionFind::new();
        for i in 0..10u32 {
            sets.union(&i, &(i + 1));
        }
        let root = sets.find(&7);
        assert_eq!(sets.find(&7), root);
        for i in 0..=10u32 {
            assert_eq!(sets.find(&i), root);
        }
    }

    /// Test that equal ranks keep x's root and higher rank wins otherwise
    #[test]
    fn test_union_by_rank() {
        let mut sets = UnionFind::new();
        sets.union(&"a", &"b");
        assert_eq!(sets.find(&"b"), "a");

        // {a, b} has rank 1, so it absorbs the singleton c even as y.
        sets.union(&"c", &"a");
        assert_eq!(sets.find(&"c"), "a");
    }

    /// Test that a single find points the whole chain at the root
    #[test]
    fn test_path_compression_flattens_chain() {
        let mut sets = UnionFind::with_elements(0..10u32);
        for i in 1..10usize {
            sets.parent[i] = i - 1;
        }

        assert_eq!(sets.find(&9), 0);
        for i in 0..10usize {
            assert_eq!(sets.parent[i], 0, "element {i} should link to the root");
        }
    }

    /// Test that deep chains do not grow the stack
    #[test]
    fn test_long_chain_iterative() {
        let mut sets = UnionFind::with_elements(0..100_000u32);
        // Link by hand into one long chain to bypass union by rank.
        for i in 1..100_000usize {
            sets.parent[i] = i - 1;
        }
        assert_eq!(sets.find(&99_999), 0);
        assert_eq!(sets.find(&50_000), 0);
    }

    /// Test k groups over n elements give exactly k distinct roots
    #[test]
    fn test_distinct_roots_match_components() {
        let mut sets = UnionFind::with_elements(0..12u32);
        for (x, y) in [(0, 1), (1, 2), (3, 4), (5, 6), (6, 7), (7, 8), (10, 11)] {
            sets.union(&x, &y);
        }

        let roots: HashSet<u32> = (0..12u32).map(|i| sets.find(&i)).collect();
        assert_eq!(roots.len(), 5);
        assert_eq!(sets.component_count(), 5);
    }

    /// Test that connected checks membership without merging
    #[test]
    fn test_connected() {
        let mut sets = UnionFind::new();
        sets.union(&"x", &"y");
        assert!(sets.connected(&"x", &"y"));
        assert!(!sets.connected(&"x", &"z"));
        assert_eq!(sets.component_count(), 2);
    }

    /// Test that groups list members in first-seen order
    #[test]
    fn test_groups() {
        let mut sets = UnionFind::with_elements(["a", "b", "c", "d", "e"]);
        sets.union(&"d", &"b");
        sets.union(&"e", &"a");

        assert_eq!(
            sets.groups(),
            vec![vec!["a", "e"], vec!["b", "d"], vec!["c"]]
        );
    }

    /// Test the empty structure
    #[test]
    fn test_empty() {
        let sets: UnionFind<u8> = UnionFind::new();
        assert!(sets.is_empty());
        assert_eq!(sets.component_count(), 0);
        assert!(sets.groups().is_empty());
    }
}
