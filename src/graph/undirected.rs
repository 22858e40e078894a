//! Undirected graphs, unweighted and weighted.
//!
//! Each edge is stored twice, once in each endpoint's adjacency list, and both
//! halves are written by the same `add_edge` call. A self-loop therefore shows
//! up twice in its vertex's list and contributes 2 to its degree.

use num_traits::Float;

use super::adjacency::AdjacencyStore;
use super::traits::{AdjacencySource, Undirected};
use crate::collections::DisjointSetForest;
use crate::error::{check_endpoints, GraphError, Result};

/// An undirected graph over the vertices `[0, n)`.
///
/// ### Performance Characteristics
/// | Operation | Complexity |
/// |-----------|------------|
/// | `add_edge` | \(O(1)\) amortized |
/// | `degree` | \(O(1)\) |
/// | `bfs` / `dfs` | \(O(n + m)\) |
/// | `connected_components` | \(O((n + m)\,\alpha(n))\) |
#[derive(Debug, Clone, PartialEq)]
pub struct UndirectedGraph<W> {
    adjacency: AdjacencyStore<W>,
    edges: usize,
}

/// An unweighted undirected graph.
pub type Graph = UndirectedGraph<()>;

/// A weighted undirected graph.
pub type WeightedGraph<W = f64> = UndirectedGraph<W>;

impl<W: Copy> UndirectedGraph<W> {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: AdjacencyStore::new(vertex_count),
            edges: 0,
        }
    }

    /// Alias of [`AdjacencySource::vertex_count`].
    pub fn num_vertices(&self) -> usize {
        self.adjacency.vertex_count()
    }

    /// Adds the edge `{a, b}` with weight `weight` to both endpoints' lists.
    ///
    /// # Panics
    /// Panics if either endpoint is out of range.
    pub fn add_weighted_edge(&mut self, a: usize, b: usize, weight: W) {
        let n = self.adjacency.vertex_count();
        assert!(a < n && b < n, "edge {a}-{b} out of bounds for n={n}");
        self.adjacency.push(a, b, weight);
        self.adjacency.push(b, a, weight);
        self.edges += 1;
    }

    /// Builds a weighted graph from parallel edge and weight lists.
    ///
    /// # Errors
    /// Returns [`GraphError::WeightCountMismatch`] if the lists differ in
    /// length and [`GraphError::VertexOutOfRange`] for a bad endpoint.
    pub fn from_weighted_edges(
        vertex_count: usize,
        edges: &[(usize, usize)],
        weights: &[W],
    ) -> Result<Self> {
        if edges.len() != weights.len() {
            return Err(GraphError::WeightCountMismatch {
                edges: edges.len(),
                weights: weights.len(),
            });
        }
        check_endpoints(vertex_count, edges)?;

        let mut graph = Self::new(vertex_count);
        for (&(u, v), &w) in edges.iter().zip(weights) {
            graph.add_weighted_edge(u, v, w);
        }
        Ok(graph)
    }

    /// Labels every vertex with the representative of its connected component.
    ///
    /// Two vertices share a label iff they are connected.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub fn connected_components(&self) -> Vec<usize> {
        let forest = self.component_forest();

        #[cfg(feature = "tracing")]
        tracing::debug!(components = forest.set_count(), "components labelled");

        forest.representatives()
    }

    /// Number of connected components.
    pub fn component_count(&self) -> usize {
        self.component_forest().set_count()
    }

    /// Returns true if the graph has at most one connected component.
    pub fn is_connected(&self) -> bool {
        self.component_count() <= 1
    }

    /// One union per stored adjacency entry.
    fn component_forest(&self) -> DisjointSetForest {
        let mut forest = DisjointSetForest::new(self.num_vertices());
        for (u, entry) in self.adjacency.iter() {
            forest.union(u, entry.target);
        }
        forest
    }
}

impl Graph {
    /// Builds an unweighted graph from an edge list.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for a bad endpoint.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self> {
        check_endpoints(vertex_count, edges)?;
        let mut graph = Self::new(vertex_count);
        for &(u, v) in edges {
            graph.add_edge(u, v);
        }
        Ok(graph)
    }

    /// Adds the edge `{a, b}`.
    ///
    /// # Panics
    /// Panics if either endpoint is out of range.
    pub fn add_edge(&mut self, a: usize, b: usize) {
        self.add_weighted_edge(a, b, ());
    }
}

impl<W: Float> UndirectedGraph<W> {
    /// Adds the edge `{a, b}` with unit weight.
    pub fn add_unit_edge(&mut self, a: usize, b: usize) {
        self.add_weighted_edge(a, b, W::one());
    }
}

impl<W: Copy> AdjacencySource for UndirectedGraph<W> {
    type Direction = Undirected;
    type Weight = W;

    fn adjacency(&self) -> &AdjacencyStore<W> {
        &self.adjacency
    }

    fn degree(&self, vertex: usize) -> usize {
        self.adjacency.len_of(vertex)
    }

    fn edge_count(&self) -> usize {
        self.edges
    }
}
