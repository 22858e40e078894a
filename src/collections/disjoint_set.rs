//! Disjoint set forest (union-find) over the integers `[0, n)`.
//!
//! Each element stores a parent index and a rank in parallel vectors.
//! `find` applies full path compression and `union` links roots by rank;
//! together they give inverse-Ackermann amortized cost per operation.
//!
//! # Performance
//!
//! - Parent pointers live in `Cell<usize>` so `find` can compress paths through
//!   a shared reference.
//! - Ranks are upper bounds on tree height. Compression never lowers them.

use std::cell::Cell;

/// A disjoint set forest over a fixed universe `[0, n)`.
///
/// Indices outside the universe are a contract violation and panic.
#[derive(Debug, Clone)]
pub struct DisjointSetForest {
    /// Parent pointers. A root is its own parent.
    parent: Vec<Cell<usize>>,
    /// Rank (height upper bound) for union-by-rank.
    rank: Vec<u8>,
    /// Number of disjoint sets currently in the forest.
    sets: usize,
}

impl DisjointSetForest {
    /// Creates a forest of `n` singleton sets `{0}, {1}, ..., {n-1}`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).map(Cell::new).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    /// Returns the number of elements in the universe.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if the universe is empty.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Finds the representative of the set containing `x`, with path compression.
    ///
    /// Every node visited on the way to the root is re-pointed directly at the
    /// root. Ranks are left untouched.
    ///
    /// # Panics
    /// Panics if `x >= self.len()`.
    pub fn find(&self, x: usize) -> usize {
        // 1. Find root
        let mut root = x;
        loop {
            let parent = self.parent[root].get();
            if parent == root {
                break;
            }
            root = parent;
        }

        // 2. Compress path
        let mut curr = x;
        while curr != root {
            let cell = &self.parent[curr];
            let next = cell.get();
            cell.set(root);
            curr = next;
        }

        root
    }

    /// Returns true if `x` and `y` belong to the same set.
    pub fn same_set(&self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Unites the sets containing `x` and `y`.
    ///
    /// Returns `true` if they were in different sets, `false` if already united.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        let rank_x = self.rank[root_x];
        let rank_y = self.rank[root_y];

        if rank_x < rank_y {
            self.parent[root_x].set(root_y);
        } else if rank_x > rank_y {
            self.parent[root_y].set(root_x);
        } else {
            // Same rank: y goes under x and x grows.
            self.parent[root_y].set(root_x);
            self.rank[root_x] += 1;
        }

        self.sets -= 1;
        true
    }

    /// Returns the representative of every element, indexed by element.
    pub fn representatives(&self) -> Vec<usize> {
        (0..self.len()).map(|x| self.find(x)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disjoint_set() {
        let mut ds = DisjointSetForest::new(3);

        assert_eq!(ds.find(0), 0);
        assert_eq!(ds.find(1), 1);

        assert!(ds.union(0, 1));
        assert_eq!(ds.find(0), ds.find(1));
        assert_ne!(ds.find(0), ds.find(2));

        assert!(ds.union(1, 2));
        assert_eq!(ds.find(0), ds.find(2));

        // Already united
        assert!(!ds.union(0, 2));
        assert_eq!(ds.set_count(), 1);
    }

    #[test]
    fn test_five_element_scenario() {
        let mut ds = DisjointSetForest::new(5);
        ds.union(0, 1);
        ds.union(2, 3);
        ds.union(1, 2);

        assert_eq!(ds.find(0), ds.find(3));
        assert_eq!(ds.find(4), 4);
        assert_ne!(ds.find(4), ds.find(0));
        assert_eq!(ds.set_count(), 2);
    }

    #[test]
    fn test_union_by_rank() {
        let mut ds = DisjointSetForest::new(4);

        // Tie: 1 goes under 0, rank of 0 becomes 1.
        ds.union(0, 1);
        assert_eq!(ds.find(1), 0);
        assert_eq!(ds.rank[0], 1);

        // Smaller rank root (2) goes under the larger one (0), no rank change.
        ds.union(2, 0);
        assert_eq!(ds.find(2), 0);
        assert_eq!(ds.rank[0], 1);
        assert_eq!(ds.rank[2], 0);
    }

    #[test]
    fn test_full_path_compression() {
        let mut ds = DisjointSetForest::new(4);
        // Build a chain 3 -> 2 -> 1 -> 0 by hand.
        ds.parent[1].set(0);
        ds.parent[2].set(1);
        ds.parent[3].set(2);
        ds.sets = 1;

        assert_eq!(ds.find(3), 0);
        for x in 1..4 {
            assert_eq!(ds.parent[x].get(), 0, "node {x} not compressed");
        }
        // Compression leaves ranks alone.
        assert!(ds.rank.iter().all(|&r| r == 0));
    }

    #[test]
    fn test_find_is_stable() {
        let mut ds = DisjointSetForest::new(6);
        ds.union(0, 5);
        ds.union(3, 4);
        for x in 0..6 {
            assert_eq!(ds.find(x), ds.find(x));
        }
        assert!(ds.same_set(5, 0));
        assert!(!ds.same_set(5, 4));
    }

    #[test]
    fn test_representatives() {
        let mut ds = DisjointSetForest::new(4);
        ds.union(0, 2);
        let reps = ds.representatives();
        assert_eq!(reps[0], reps[2]);
        assert_eq!(reps[1], 1);
        assert_eq!(reps[3], 3);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_panics() {
        let ds = DisjointSetForest::new(2);
        ds.find(2);
    }
}
