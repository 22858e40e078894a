//! Vertex-indexed graphs and their algorithms.
//!
//! Graph implementations are organized by concern:
//! - `adjacency`: the append-only adjacency store every variant is built on
//! - `traits`: the `AdjacencySource` capability shared by all variants
//! - `undirected` / `directed`: the concrete graph types
//! - `traversal`, `ordering`, `mst`: algorithms over those types

pub mod adjacency;
pub mod directed;
pub mod mst;
pub mod ordering;
pub mod traits;
pub mod traversal;
pub mod undirected;
pub(crate) mod access;
mod math_assert;

// Re-export commonly used types from submodules
pub use adjacency::{AdjEntry, AdjacencyStore, Neighbors};
pub use directed::{Digraph, DirectedGraph, WeightedDigraph};
pub use mst::MinimumSpanningTree;
pub use traits::{AdjacencySource, Directed, EdgeType, Undirected, WeightedAdjacency, WeightedEdge};
pub use traversal::{Bfs, BfsTree, Dfs, DfsForest};
pub use undirected::{Graph, UndirectedGraph, WeightedGraph};
