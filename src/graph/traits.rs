//! Capability traits shared by the graph variants.
//!
//! Every graph exposes its [`AdjacencyStore`] through [`AdjacencySource`];
//! traversals and edge enumeration are written once against that trait.
//! Direction is a type-level marker so edge enumeration can tell stored
//! duplicates of undirected edges apart from genuine arcs.

use num_traits::{Float, Zero};
use serde::{Deserialize, Serialize};

use super::adjacency::{AdjacencyStore, Neighbors};
use super::traversal::{self, Bfs, BfsTree, Dfs, DfsForest};

/// Marker trait for graph edge directionality.
pub trait EdgeType {
    /// Returns true if the graph is directed.
    fn is_directed() -> bool;
}

/// Marker for directed graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directed;
/// Marker for undirected graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Undirected;

impl EdgeType for Directed {
    fn is_directed() -> bool {
        true
    }
}
impl EdgeType for Undirected {
    fn is_directed() -> bool {
        false
    }
}

/// An edge together with its weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge<W> {
    /// Source endpoint (the smaller id for undirected edges).
    pub source: usize,
    /// Target endpoint.
    pub target: usize,
    /// Edge weight.
    pub weight: W,
}

impl<W> WeightedEdge<W> {
    /// The endpoint pair `(source, target)`.
    pub fn pair(&self) -> (usize, usize) {
        (self.source, self.target)
    }
}

/// A vertex-indexed adjacency source over the dense range `[0, n)`.
///
/// Implementors provide the store and their degree semantics; everything else
/// is derived.
pub trait AdjacencySource {
    /// Directionality marker.
    type Direction: EdgeType;
    /// Edge weight type (`()` when unweighted).
    type Weight: Copy;

    /// The underlying adjacency lists.
    fn adjacency(&self) -> &AdjacencyStore<Self::Weight>;

    /// Degree of `vertex` (in + out for directed graphs).
    fn degree(&self, vertex: usize) -> usize;

    /// Number of edges, each undirected edge counted once.
    fn edge_count(&self) -> usize;

    /// Number of vertices.
    fn vertex_count(&self) -> usize {
        self.adjacency().vertex_count()
    }

    /// Returns true if the graph has no vertices.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Neighbors of `vertex` in insertion order.
    fn neighbors(&self, vertex: usize) -> Neighbors<'_, Self::Weight> {
        self.adjacency().neighbors(vertex)
    }

    /// Every edge as an endpoint pair.
    ///
    /// Directed graphs report each stored arc once. Undirected graphs report
    /// each edge once as `(u, v)` with `u < v`; self-loops are not reported.
    fn edge_list(&self) -> Vec<(usize, usize)> {
        let directed = Self::Direction::is_directed();
        self.adjacency()
            .iter()
            .filter(|(u, entry)| directed || entry.target > *u)
            .map(|(u, entry)| (u, entry.target))
            .collect()
    }

    /// Breadth-first search from `source`.
    ///
    /// # Panics
    /// Panics if `source` is out of range.
    fn bfs(&self, source: usize) -> BfsTree {
        traversal::bfs(self.adjacency(), source)
    }

    /// Depth-first search over every vertex.
    fn dfs(&self) -> DfsForest {
        traversal::dfs(self.adjacency(), |_| {})
    }

    /// Depth-first search over every vertex, calling `on_finish` as each
    /// vertex finishes.
    fn dfs_with<F>(&self, on_finish: F) -> DfsForest
    where
        F: FnMut(usize),
    {
        traversal::dfs(self.adjacency(), on_finish)
    }

    /// Lazy breadth-first visit order from `start`.
    fn bfs_iter(&self, start: usize) -> Bfs<'_, Self::Weight> {
        Bfs::new(self.adjacency(), start)
    }

    /// Lazy depth-first (preorder) visit order from `start`.
    fn dfs_iter(&self, start: usize) -> Dfs<'_, Self::Weight> {
        Dfs::new(self.adjacency(), start)
    }
}

/// Weighted edge enumeration, available whenever the weight is a float.
pub trait WeightedAdjacency: AdjacencySource {
    /// Every edge with its weight, in the same order as
    /// [`AdjacencySource::edge_list`].
    fn weighted_edge_list(&self) -> Vec<WeightedEdge<Self::Weight>> {
        let directed = Self::Direction::is_directed();
        self.adjacency()
            .iter()
            .filter(|(u, entry)| directed || entry.target > *u)
            .map(|(u, entry)| WeightedEdge {
                source: u,
                target: entry.target,
                weight: entry.weight,
            })
            .collect()
    }

    /// Sum of all edge weights.
    fn total_weight(&self) -> Self::Weight
    where
        Self::Weight: Float,
    {
        self.weighted_edge_list()
            .iter()
            .fold(<Self::Weight as Zero>::zero(), |acc, edge| acc + edge.weight)
    }
}

impl<G> WeightedAdjacency for G
where
    G: AdjacencySource,
    G::Weight: Float,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_type_markers() {
        assert!(Directed::is_directed());
        assert!(!Undirected::is_directed());
    }

    #[test]
    fn test_weighted_edge_pair() {
        let edge = WeightedEdge {
            source: 1,
            target: 4,
            weight: 2.5,
        };
        assert_eq!(edge.pair(), (1, 4));
    }

    fn weight_of<G: WeightedAdjacency>(graph: &G) -> G::Weight
    where
        G::Weight: Float,
    {
        graph.total_weight()
    }

    #[test]
    fn test_total_weight_through_trait() {
        use crate::graph::{WeightedDigraph, WeightedGraph};

        let g = WeightedGraph::from_weighted_edges(3, &[(0, 1), (1, 2)], &[1.5, 2.0]).unwrap();
        assert_eq!(weight_of(&g), 3.5);

        let d = WeightedDigraph::from_weighted_edges(2, &[(0, 1), (1, 0)], &[0.25f32, 0.5]).unwrap();
        assert_eq!(weight_of(&d), 0.75);
        assert_eq!(weight_of(&WeightedGraph::<f64>::new(4)), 0.0);
    }
}
