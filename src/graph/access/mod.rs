//! Internal graph accessors and low-level building blocks.
//!
//! Scratch structures shared by the traversal and ordering code.

pub(crate) mod visited;
