//! Orderings and decompositions of directed graphs.
//!
//! `topological_sort` is the DFS finish-order formulation and performs no
//! cycle check; `is_acyclic` is the separate Kahn's-algorithm test callers
//! can run first. `strongly_connected_components` is Kosaraju's algorithm.

use std::collections::VecDeque;

use super::access::visited::VisitedSet;
use super::directed::DirectedGraph;
use super::math_assert::math_assert_msg;
use super::traits::AdjacencySource;

impl<W: Copy> DirectedGraph<W> {
    /// Vertices in reverse DFS finish order.
    ///
    /// For an acyclic graph every arc `u -> v` has `u` before `v`. On a cyclic
    /// graph the result is still a permutation of the vertices but not a
    /// topological order.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub fn topological_sort(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.num_vertices());
        self.dfs_with(|u| order.push(u));
        order.reverse();

        math_assert_msg(
            order.len() == self.num_vertices(),
            "DFS must finish every vertex exactly once",
        );
        order
    }

    /// Returns true if the digraph has no directed cycle.
    ///
    /// Uses Kahn's algorithm over the maintained in-degree counts.
    pub fn is_acyclic(&self) -> bool {
        let n = self.num_vertices();
        let mut indeg: Vec<usize> = (0..n).map(|v| self.in_degree(v)).collect();

        // Sources in increasing order for determinism.
        let mut q: VecDeque<usize> = (0..n).filter(|&u| indeg[u] == 0).collect();

        let mut removed = 0usize;
        while let Some(u) = q.pop_front() {
            removed += 1;
            for v in self.neighbors(u) {
                indeg[v] -= 1;
                if indeg[v] == 0 {
                    q.push_back(v);
                }
            }
        }

        removed == n
    }

    /// Strongly connected components, by Kosaraju's algorithm.
    ///
    /// Vertices are ordered by decreasing DFS finish time on this graph, then
    /// the transpose is searched from each still-undiscovered vertex in that
    /// order; each search tree is one component. Components are returned in
    /// the order they are found, each listing its vertices in discovery order.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub fn strongly_connected_components(&self) -> Vec<Vec<usize>> {
        let ordered = self.topological_sort();
        let transposed = self.transpose();

        let mut discovered = VisitedSet::new(transposed.num_vertices());
        let mut components = Vec::new();
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for &root in &ordered {
            if !discovered.try_visit(root) {
                continue;
            }
            let mut component = vec![root];
            stack.push((root, 0));

            while let Some(frame) = stack.last_mut() {
                let (u, cursor) = *frame;
                match transposed.adjacency().entries(u).get(cursor) {
                    Some(entry) => {
                        frame.1 += 1;
                        if discovered.try_visit(entry.target) {
                            component.push(entry.target);
                            stack.push((entry.target, 0));
                        }
                    }
                    None => {
                        stack.pop();
                    }
                }
            }
            components.push(component);
        }

        math_assert_msg(
            components.iter().map(Vec::len).sum::<usize>() == self.num_vertices(),
            "components must partition the vertex set",
        );

        #[cfg(feature = "tracing")]
        tracing::debug!(components = components.len(), "scc complete");

        components
    }

    /// Labels every vertex with the index of its strongly connected component
    /// in [`Self::strongly_connected_components`].
    pub fn component_labels(&self) -> Vec<usize> {
        let mut labels = vec![0; self.num_vertices()];
        for (label, component) in self.strongly_connected_components().iter().enumerate() {
            for &v in component {
                labels[v] = label;
            }
        }
        labels
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::Digraph;

    #[test]
    fn test_topological_sort_diamond() {
        // Diamond shape: 0 -> 1, 0 -> 2, 1 -> 3, 2 -> 3
        let g = Digraph::from_edges(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
        let topo = g.topological_sort();

        // Finish order 3, 1, 2, 0 reversed.
        assert_eq!(topo, vec![0, 2, 1, 3]);
        assert!(g.is_acyclic());
    }

    #[test]
    fn test_topological_sort_respects_every_arc() {
        let arcs = [(5, 2), (5, 0), (4, 0), (4, 1), (2, 3), (3, 1)];
        let g = Digraph::from_edges(6, &arcs).unwrap();
        let topo = g.topological_sort();

        let mut pos = vec![0; 6];
        for (i, &v) in topo.iter().enumerate() {
            pos[v] = i;
        }
        for (u, v) in arcs {
            assert!(pos[u] < pos[v], "arc {u}->{v} goes backwards");
        }
    }

    #[test]
    fn test_cycle_detection() {
        // Cycle: 0 -> 1 -> 2 -> 0
        let g = Digraph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
        assert!(!g.is_acyclic());
        // Still a permutation, just not meaningful.
        let mut topo = g.topological_sort();
        topo.sort_unstable();
        assert_eq!(topo, vec![0, 1, 2]);
    }

    #[test]
    fn test_scc_kosaraju() {
        // {0,1,2} cycle, 2 -> 3, {3,4} cycle, 5 alone
        let g = Digraph::from_edges(6, &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 3)])
            .unwrap();
        let sccs = g.strongly_connected_components();

        assert_eq!(sccs, vec![vec![5], vec![0, 2, 1], vec![3, 4]]);

        let labels = g.component_labels();
        assert_eq!(labels[0], labels[1]);
        assert_eq!(labels[3], labels[4]);
        assert_ne!(labels[0], labels[3]);
        assert_ne!(labels[5], labels[0]);
    }

    #[test]
    fn test_scc_of_dag_is_singletons() {
        let g = Digraph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        assert_eq!(g.strongly_connected_components(), vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn test_empty_digraph() {
        let g = Digraph::new(0);
        assert!(g.topological_sort().is_empty());
        assert!(g.strongly_connected_components().is_empty());
        assert!(g.is_acyclic());
    }
}
