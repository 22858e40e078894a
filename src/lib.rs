//! # `indexgraph` - Vertex-Indexed Graph Algorithms
//!
//! An in-memory graph toolkit over dense integer vertex ids `[0, n)`:
//! adjacency-list graphs (undirected, directed, weighted variants) together
//! with the two supporting structures their algorithms need, a disjoint-set
//! forest and an indexed binary-heap priority queue.
//!
//! ## Key Features
//!
//! - **Traversals**: BFS (hop distances + predecessors) and whole-graph DFS
//!   (discovery/finish timestamps, finish callbacks), both iterative
//! - **Orderings**: topological sort and Kosaraju strongly connected components
//! - **Spanning trees**: Kruskal (sort + union-find) and Prim (indexed heap)
//! - **Amortized guarantees**: near-O(1) union-find, O(log n) priority changes
//!
//! ## Architecture
//!
//! ### Core Abstractions
//!
//! 1. **Adjacency store** (`AdjacencyStore<W>`):
//!    - One insertion-ordered entry list per vertex, append-only
//!    - `W = ()` for unweighted graphs
//!
//! 2. **Capability trait** (`AdjacencySource`):
//!    - Exposes the store plus degree semantics
//!    - Traversals and edge enumeration are provided once for every variant
//!
//! 3. **Concrete graphs** (`UndirectedGraph<W>`, `DirectedGraph<W>`):
//!    - `Graph`, `WeightedGraph`, `Digraph`, `WeightedDigraph` aliases
//!    - Directed graphs track in-degrees; undirected graphs own MST construction
//!
//! 4. **Per-call helpers** (`DisjointSetForest`, `IndexedPriorityQueue`):
//!    - Allocated inside an algorithm call and dropped on return
//!
//! Queries take `&self` and keep all scratch state local, so a fully built
//! graph can be queried from several threads at once.
//!
//! ## Example
//!
//! ```rust
//! use indexgraph::WeightedGraph;
//!
//! let graph = WeightedGraph::from_weighted_edges(
//!     4,
//!     &[(0, 1), (1, 2), (2, 3), (0, 3)],
//!     &[1.0, 2.0, 1.0, 4.0],
//! )
//! .unwrap();
//!
//! assert_eq!(graph.mst_kruskal().total_weight(), 4.0);
//! assert_eq!(graph.mst_prim(0).total_weight(), 4.0);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod graph;

pub use collections::{DisjointSetForest, IndexedPriorityQueue};
pub use error::{GraphError, Result};
pub use graph::{
    AdjacencySource, BfsTree, Digraph, DfsForest, DirectedGraph, Graph, MinimumSpanningTree,
    UndirectedGraph, WeightedAdjacency, WeightedDigraph, WeightedEdge, WeightedGraph,
};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // Unweighted adjacency entries carry no weight payload.
    assert!(mem::size_of::<graph::AdjEntry<()>>() == mem::size_of::<usize>());
};
