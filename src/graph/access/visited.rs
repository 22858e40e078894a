//! Visited sets for graph traversals.
//!
//! Every traversal allocates its own set, so the graph itself stays immutable
//! while queries run and several queries may share one graph.

const WORD_BITS: usize = u64::BITS as usize;

/// A dense, word-packed visited set for a fixed vertex range.
#[derive(Debug, Clone)]
pub(crate) struct VisitedSet {
    words: Vec<u64>,
    len: usize,
}

impl VisitedSet {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    /// Returns `true` iff `node` was not yet visited, marking it visited.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, node: usize) -> bool {
        debug_assert!(node < self.len, "node {node} out of bounds");
        let word = &mut self.words[node / WORD_BITS];
        let mask = 1u64 << (node % WORD_BITS);
        let fresh = *word & mask == 0;
        *word |= mask;
        fresh
    }

    #[cfg(test)]
    pub(crate) fn is_visited(&self, node: usize) -> bool {
        self.words[node / WORD_BITS] & (1u64 << (node % WORD_BITS)) != 0
    }
}
