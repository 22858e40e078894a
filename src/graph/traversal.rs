//! Breadth-first and depth-first traversals.
//!
//! `bfs` and `dfs` produce full per-vertex records; `Bfs` and `Dfs` are lazy
//! iterators yielding vertex ids in visit order. DFS uses an explicit stack of
//! `(vertex, cursor)` frames, so deep graphs cannot overflow the call stack,
//! while discovery/finish timestamps match the recursive formulation exactly.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::access::visited::VisitedSet;
use super::adjacency::AdjacencyStore;

/// Result of a breadth-first search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BfsTree {
    /// The source vertex.
    pub source: usize,
    /// Hop distance from the source; `None` if unreachable.
    pub distance: Vec<Option<usize>>,
    /// Predecessor on a shortest path from the source.
    pub predecessor: Vec<Option<usize>>,
}

impl BfsTree {
    /// Hop distance of `vertex` from the source.
    pub fn distance(&self, vertex: usize) -> Option<usize> {
        self.distance[vertex]
    }

    /// Returns true if `vertex` was reached.
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance[vertex].is_some()
    }

    /// Vertices on a shortest path from the source to `vertex`, both included.
    ///
    /// Returns `None` if `vertex` is unreachable.
    pub fn path_to(&self, vertex: usize) -> Option<Vec<usize>> {
        let hops = self.distance[vertex]?;
        let mut path = Vec::with_capacity(hops + 1);
        let mut cur = vertex;
        path.push(cur);
        while let Some(p) = self.predecessor[cur] {
            path.push(p);
            cur = p;
        }
        path.reverse();
        Some(path)
    }
}

/// Result of a depth-first search over all vertices.
///
/// Timestamps start at 1 and share one clock: every vertex gets a discovery
/// time and a later finish time, and the clock ends at `2 * n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DfsForest {
    /// Discovery time of each vertex.
    pub discovery: Vec<usize>,
    /// Finish time of each vertex.
    pub finish: Vec<usize>,
    /// Parent in the depth-first forest; `None` for tree roots.
    pub predecessor: Vec<Option<usize>>,
}

impl DfsForest {
    /// Roots of the depth-first forest, in the order they were started.
    pub fn roots(&self) -> Vec<usize> {
        let mut roots: Vec<usize> = (0..self.predecessor.len())
            .filter(|&v| self.predecessor[v].is_none())
            .collect();
        roots.sort_by_key(|&v| self.discovery[v]);
        roots
    }

    /// Returns true if `descendant` lies in the subtree of `ancestor`
    /// (parenthesis theorem).
    pub fn is_descendant(&self, descendant: usize, ancestor: usize) -> bool {
        self.discovery[ancestor] <= self.discovery[descendant]
            && self.finish[descendant] <= self.finish[ancestor]
    }
}

/// Breadth-first search over `store` from `source`.
///
/// # Panics
/// Panics if `source` is out of range.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(store)))]
pub(crate) fn bfs<W: Copy>(store: &AdjacencyStore<W>, source: usize) -> BfsTree {
    let n = store.vertex_count();
    assert!(source < n, "source vertex {source} out of bounds for n={n}");

    let mut distance = vec![None; n];
    let mut predecessor = vec![None; n];
    let mut queue = VecDeque::new();

    distance[source] = Some(0);
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        let next = distance[u].map(|d: usize| d + 1);
        for v in store.neighbors(u) {
            if distance[v].is_none() {
                distance[v] = next;
                predecessor[v] = Some(u);
                queue.push_back(v);
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        reached = distance.iter().filter(|d| d.is_some()).count(),
        "bfs complete"
    );

    BfsTree {
        source,
        distance,
        predecessor,
    }
}

/// Depth-first search over every vertex of `store`.
///
/// Outer roots are taken in increasing vertex order; neighbors are explored
/// in insertion order. `on_finish` runs once per vertex, after all of its
/// descendants have finished.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
pub(crate) fn dfs<W, F>(store: &AdjacencyStore<W>, mut on_finish: F) -> DfsForest
where
    W: Copy,
    F: FnMut(usize),
{
    let n = store.vertex_count();
    let mut discovery = vec![0usize; n];
    let mut finish = vec![0usize; n];
    let mut predecessor = vec![None; n];
    let mut time = 0usize;

    // (vertex, index of the next neighbor to examine)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..n {
        if discovery[root] != 0 {
            continue;
        }
        time += 1;
        discovery[root] = time;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (u, cursor) = *frame;
            let entries = store.entries(u);
            if let Some(entry) = entries.get(cursor) {
                frame.1 += 1;
                let v = entry.target;
                if discovery[v] == 0 {
                    predecessor[v] = Some(u);
                    time += 1;
                    discovery[v] = time;
                    stack.push((v, 0));
                }
            } else {
                stack.pop();
                time += 1;
                finish[u] = time;
                on_finish(u);
            }
        }
    }

    DfsForest {
        discovery,
        finish,
        predecessor,
    }
}

/// An iterator for Breadth-First Search (BFS).
///
/// Yields vertex ids in BFS order from a single start vertex.
pub struct Bfs<'a, W> {
    store: &'a AdjacencyStore<W>,
    visited: VisitedSet,
    queue: VecDeque<usize>,
}

impl<'a, W: Copy> Bfs<'a, W> {
    /// Creates a new BFS iterator starting from `start`.
    ///
    /// An out-of-range start yields nothing.
    pub fn new(store: &'a AdjacencyStore<W>, start: usize) -> Self {
        let len = store.vertex_count();
        let mut visited = VisitedSet::new(len);
        let mut queue = VecDeque::new();

        if start < len {
            visited.try_visit(start);
            queue.push_back(start);
        }

        Self {
            store,
            visited,
            queue,
        }
    }
}

impl<W: Copy> Iterator for Bfs<'_, W> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for v in self.store.neighbors(u) {
            if self.visited.try_visit(v) {
                self.queue.push_back(v);
            }
        }

        Some(u)
    }
}

/// An iterator for Depth-First Search (DFS).
///
/// Yields vertex ids in discovery (preorder) from a single start vertex,
/// following the same neighbor order as [`DfsForest`] timestamps.
pub struct Dfs<'a, W> {
    store: &'a AdjacencyStore<W>,
    visited: VisitedSet,
    stack: Vec<(usize, usize)>,
    pending: Option<usize>,
}

impl<'a, W: Copy> Dfs<'a, W> {
    /// Creates a new DFS iterator starting from `start`.
    ///
    /// An out-of-range start yields nothing.
    pub fn new(store: &'a AdjacencyStore<W>, start: usize) -> Self {
        let len = store.vertex_count();
        let mut visited = VisitedSet::new(len);
        let mut stack = Vec::new();
        let mut pending = None;

        if start < len {
            visited.try_visit(start);
            stack.push((start, 0));
            pending = Some(start);
        }

        Self {
            store,
            visited,
            stack,
            pending,
        }
    }
}

impl<W: Copy> Iterator for Dfs<'_, W> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.pending.take() {
            return Some(start);
        }

        while let Some(frame) = self.stack.last_mut() {
            let (u, cursor) = *frame;
            match self.store.entries(u).get(cursor) {
                Some(entry) => {
                    frame.1 += 1;
                    let v = entry.target;
                    if self.visited.try_visit(v) {
                        self.stack.push((v, 0));
                        return Some(v);
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_from(n: usize, arcs: &[(usize, usize)]) -> AdjacencyStore<()> {
        let mut store = AdjacencyStore::new(n);
        for &(u, v) in arcs {
            store.push(u, v, ());
        }
        store
    }

    #[test]
    fn test_bfs_distances() {
        // 0 -> 1 -> 2, 0 -> 3, 4 isolated
        let store = store_from(5, &[(0, 1), (1, 2), (0, 3)]);
        let tree = bfs(&store, 0);

        assert_eq!(tree.distance, vec![Some(0), Some(1), Some(2), Some(1), None]);
        assert_eq!(tree.predecessor, vec![None, Some(0), Some(1), Some(0), None]);
        assert_eq!(tree.path_to(2), Some(vec![0, 1, 2]));
        assert_eq!(tree.path_to(0), Some(vec![0]));
        assert_eq!(tree.path_to(4), None);
        assert!(!tree.is_reachable(4));
    }

    #[test]
    fn test_dfs_timestamps() {
        // 0 -> 1, 0 -> 2, 1 -> 2 ; 3 -> 0
        let store = store_from(4, &[(0, 1), (0, 2), (1, 2), (3, 0)]);
        let mut finished = Vec::new();
        let forest = dfs(&store, |v| finished.push(v));

        // 0:d1 1:d2 2:d3 f4, 1:f5, 0:f6, 3:d7 f8
        assert_eq!(forest.discovery, vec![1, 2, 3, 7]);
        assert_eq!(forest.finish, vec![6, 5, 4, 8]);
        assert_eq!(forest.predecessor, vec![None, Some(0), Some(1), None]);
        assert_eq!(finished, vec![2, 1, 0, 3]);
        assert_eq!(forest.roots(), vec![0, 3]);
        assert!(forest.is_descendant(2, 0));
        assert!(!forest.is_descendant(0, 3));
    }

    #[test]
    fn test_dfs_empty() {
        let store = store_from(0, &[]);
        let forest = dfs(&store, |_| unreachable!());
        assert!(forest.discovery.is_empty());
    }

    #[test]
    fn test_dfs_deep_chain_no_overflow() {
        let n = 200_000;
        let arcs: Vec<_> = (0..n - 1).map(|i| (i, i + 1)).collect();
        let store = store_from(n, &arcs);
        let forest = dfs(&store, |_| {});
        assert_eq!(forest.finish[0], 2 * n);
        assert_eq!(forest.discovery[n - 1], n);
    }

    #[test]
    fn test_bfs_iter_order() {
        let store = store_from(5, &[(0, 1), (0, 2), (1, 3), (2, 4)]);
        let order: Vec<_> = Bfs::new(&store, 0).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
        assert_eq!(Bfs::new(&store, 9).count(), 0);
    }

    #[test]
    fn test_dfs_iter_preorder() {
        let store = store_from(5, &[(0, 1), (0, 2), (1, 3), (2, 4)]);
        let order: Vec<_> = Dfs::new(&store, 0).collect();
        assert_eq!(order, vec![0, 1, 3, 2, 4]);
        assert_eq!(Dfs::new(&store, 3).collect::<Vec<_>>(), vec![3]);
    }
}
