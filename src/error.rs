//! Error types for graph construction.
//!
//! Only input handed over by an adapter layer is validated here. Contract
//! violations inside the algorithms (an out-of-range vertex passed to a query,
//! for instance) panic instead.

/// Errors produced while building a graph from an external edge list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An edge endpoint lies outside `[0, vertex_count)`.
    #[error("vertex {vertex} out of range for graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending endpoint.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },

    /// The weight list does not line up with the edge list.
    #[error("weight count mismatch: {edges} edges but {weights} weights")]
    WeightCountMismatch {
        /// Number of edges supplied.
        edges: usize,
        /// Number of weights supplied.
        weights: usize,
    },
}

/// Result type for graph construction.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Checks that every endpoint of `edges` is a valid vertex id.
pub(crate) fn check_endpoints(vertex_count: usize, edges: &[(usize, usize)]) -> Result<()> {
    for &(u, v) in edges {
        for vertex in [u, v] {
            if vertex >= vertex_count {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    vertex_count,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_endpoints() {
        assert!(check_endpoints(3, &[(0, 1), (2, 2)]).is_ok());
        assert_eq!(
            check_endpoints(3, &[(0, 1), (1, 3)]),
            Err(GraphError::VertexOutOfRange {
                vertex: 3,
                vertex_count: 3
            })
        );
    }

    #[test]
    fn test_error_display() {
        let err = GraphError::WeightCountMismatch { edges: 4, weights: 3 };
        assert_eq!(err.to_string(), "weight count mismatch: 4 edges but 3 weights");
    }
}
