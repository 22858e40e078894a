//! Per-vertex adjacency sequences shared by every graph variant.
//!
//! The store is a vector of vectors indexed by vertex id. Entries keep their
//! insertion order and are never removed. Unweighted graphs use `W = ()`, so an
//! entry is exactly as large as a `usize`.

/// One adjacency entry: the neighbor vertex and the weight of the edge to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjEntry<W> {
    /// The neighbor vertex.
    pub target: usize,
    /// Edge weight (`()` for unweighted graphs).
    pub weight: W,
}

/// Append-only adjacency lists over the vertex range `[0, n)`.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyStore<W> {
    lists: Vec<Vec<AdjEntry<W>>>,
}

impl<W: Copy> AdjacencyStore<W> {
    /// Creates `vertex_count` empty adjacency lists.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            lists: (0..vertex_count).map(|_| Vec::new()).collect(),
        }
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.lists.len()
    }

    /// Appends `target` to the list of `source`.
    ///
    /// # Panics
    /// Panics if either endpoint is out of range.
    pub fn push(&mut self, source: usize, target: usize, weight: W) {
        let n = self.lists.len();
        assert!(source < n, "vertex {source} out of bounds for n={n}");
        assert!(target < n, "vertex {target} out of bounds for n={n}");
        self.lists[source].push(AdjEntry { target, weight });
    }

    /// Number of entries stored for `vertex`.
    #[inline]
    pub fn len_of(&self, vertex: usize) -> usize {
        self.lists[vertex].len()
    }

    /// Total number of stored entries across all vertices.
    pub fn entry_count(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    /// The entries of `vertex`, in insertion order.
    #[inline]
    pub fn entries(&self, vertex: usize) -> &[AdjEntry<W>] {
        &self.lists[vertex]
    }

    /// Neighbors of `vertex`, in insertion order.
    #[inline]
    pub fn neighbors(&self, vertex: usize) -> Neighbors<'_, W> {
        Neighbors {
            inner: self.lists[vertex].iter(),
        }
    }

    /// Iterates `(source, entry)` over every stored entry, source by source.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &AdjEntry<W>)> + '_ {
        self.lists
            .iter()
            .enumerate()
            .flat_map(|(u, list)| list.iter().map(move |entry| (u, entry)))
    }
}

/// Iterator over the neighbor ids of one vertex.
#[derive(Debug, Clone)]
pub struct Neighbors<'a, W> {
    inner: core::slice::Iter<'a, AdjEntry<W>>,
}

impl<W> Iterator for Neighbors<'_, W> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        self.inner.next().map(|entry| entry.target)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<W> ExactSizeIterator for Neighbors<'_, W> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_insertion_order() {
        let mut store = AdjacencyStore::new(3);
        store.push(0, 2, 1.5);
        store.push(0, 1, 0.5);
        store.push(2, 0, 1.5);

        assert_eq!(store.neighbors(0).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(store.entries(0)[1], AdjEntry { target: 1, weight: 0.5 });
        assert_eq!(store.len_of(1), 0);
        assert_eq!(store.entry_count(), 3);
        assert_eq!(store.neighbors(0).len(), 2);
    }

    #[test]
    fn test_store_iter() {
        let mut store = AdjacencyStore::new(2);
        store.push(1, 0, ());
        store.push(0, 1, ());
        let pairs: Vec<_> = store.iter().map(|(u, e)| (u, e.target)).collect();
        assert_eq!(pairs, vec![(0, 1), (1, 0)]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_push_out_of_bounds() {
        let mut store = AdjacencyStore::new(2);
        store.push(0, 2, ());
    }
}
