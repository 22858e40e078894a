//! Supporting collections for the graph algorithms.
//!
//! Both structures work over a fixed integer universe `[0, n)` chosen at
//! construction:
//! - `disjoint_set`: union-find forest with path compression and union by rank
//! - `indexed_heap`: binary min-heap with an element-to-slot index

pub mod disjoint_set;
pub mod indexed_heap;

pub use disjoint_set::DisjointSetForest;
pub use indexed_heap::IndexedPriorityQueue;
