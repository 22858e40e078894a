//! Minimum spanning trees of weighted undirected graphs.
//!
//! Kruskal's algorithm sorts the edges and merges components with a
//! [`DisjointSetForest`]; Prim's algorithm grows a tree from a root using an
//! [`IndexedPriorityQueue`] keyed by the cheapest known connecting edge.
//! Both allocate their helper structure per call and drop it on return.
//!
//! On a disconnected graph both return a minimum spanning forest.

use num_traits::float::TotalOrder;
use num_traits::Float;
use serde::{Deserialize, Serialize};

use super::math_assert::math_assert_msg;
use super::traits::{AdjacencySource, WeightedAdjacency, WeightedEdge};
use super::undirected::UndirectedGraph;
use crate::collections::{DisjointSetForest, IndexedPriorityQueue};

/// The edges of a minimum spanning tree (or forest).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimumSpanningTree<W> {
    /// Chosen edges, in the order the algorithm selected or recorded them.
    pub edges: Vec<WeightedEdge<W>>,
}

impl<W: Float> MinimumSpanningTree<W> {
    /// Sum of the chosen edge weights.
    pub fn total_weight(&self) -> W {
        self.edges.iter().fold(W::zero(), |acc, edge| acc + edge.weight)
    }

    /// Number of chosen edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if no edge was chosen.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// The chosen edges as endpoint pairs.
    pub fn edge_pairs(&self) -> Vec<(usize, usize)> {
        self.edges.iter().map(WeightedEdge::pair).collect()
    }
}

impl<W: Float + TotalOrder> UndirectedGraph<W> {
    /// Minimum spanning tree by Kruskal's algorithm.
    ///
    /// Edges are stably sorted by weight, so ties keep the order of
    /// [`WeightedAdjacency::weighted_edge_list`]. The sort uses the IEEE 754
    /// total order, which places `NaN` weights after every other weight. Each pair is reported as
    /// `(u, v)` with `u < v`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub fn mst_kruskal(&self) -> MinimumSpanningTree<W> {
        let mut forest = DisjointSetForest::new(self.num_vertices());
        let mut edges = self.weighted_edge_list();
        edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));

        let mut chosen = Vec::with_capacity(self.num_vertices().saturating_sub(1));
        for edge in edges {
            if forest.find(edge.source) != forest.find(edge.target) {
                chosen.push(edge);
                forest.union(edge.source, edge.target);
            }
        }

        math_assert_msg(
            chosen.len() + forest.set_count() == self.num_vertices(),
            "a spanning forest has n - c edges",
        );

        #[cfg(feature = "tracing")]
        tracing::debug!(edges = chosen.len(), "kruskal complete");

        MinimumSpanningTree { edges: chosen }
    }

    /// Minimum spanning tree by Prim's algorithm, grown from `root`.
    ///
    /// Each edge is reported as `(parent, child)`, ordered by child id.
    /// An empty graph yields an empty tree.
    ///
    /// # Panics
    /// Panics if the graph is non-empty and `root` is out of range.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub fn mst_prim(&self, root: usize) -> MinimumSpanningTree<W> {
        let n = self.num_vertices();
        if n == 0 {
            return MinimumSpanningTree { edges: Vec::new() };
        }
        assert!(root < n, "root vertex {root} out of bounds for n={n}");

        let mut parent: Vec<Option<(usize, W)>> = vec![None; n];
        let mut queue = IndexedPriorityQueue::new(n);
        queue.insert_all((0..n).map(|v| (v, if v == root { W::zero() } else { W::infinity() })));

        while let Some(u) = queue.extract_min() {
            for entry in self.adjacency().entries(u) {
                let v = entry.target;
                if let Some(key) = queue.priority(v) {
                    if entry.weight < key {
                        parent[v] = Some((u, entry.weight));
                        queue.change_priority(v, entry.weight);
                    }
                }
            }
        }

        let edges: Vec<_> = parent
            .into_iter()
            .enumerate()
            .filter_map(|(child, link)| {
                link.map(|(source, weight)| WeightedEdge {
                    source,
                    target: child,
                    weight,
                })
            })
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(edges = edges.len(), "prim complete");

        MinimumSpanningTree { edges }
    }
}
