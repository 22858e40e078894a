use indexgraph::{
    AdjacencySource, BfsTree, DfsForest, Digraph, Graph, GraphError, WeightedAdjacency,
    WeightedDigraph, WeightedGraph,
};

fn square() -> WeightedGraph {
    WeightedGraph::from_weighted_edges(4, &[(0, 1), (1, 2), (2, 3), (0, 3)], &[1.0, 2.0, 1.0, 4.0])
        .unwrap()
}

#[test]
fn mst_square_scenario() {
    let g = square();

    let kruskal = g.mst_kruskal();
    let prim = g.mst_prim(0);
    assert_eq!(kruskal.total_weight(), 4.0);
    assert_eq!(prim.total_weight(), 4.0);

    let mut k = kruskal.edge_pairs();
    k.sort_unstable();
    assert_eq!(k, vec![(0, 1), (1, 2), (2, 3)]);
    assert_eq!(prim.edge_pairs(), vec![(0, 1), (1, 2), (2, 3)]);
}

#[test]
fn weighted_digraph_keeps_directed_degree() {
    let g = WeightedDigraph::from_weighted_edges(3, &[(0, 1), (0, 2), (1, 2)], &[1.0, 2.0, 3.0])
        .unwrap();
    // in + out
    assert_eq!(g.degree(0), 2);
    assert_eq!(g.degree(2), 2);
    assert_eq!(g.degree(1), 2);
    assert_eq!(g.weighted_edge_list().len(), 3);
    assert_eq!(g.total_weight(), 6.0);
}

#[test]
fn digraph_scc_and_topological_sort() {
    let g = Digraph::from_edges(5, &[(0, 1), (1, 0), (1, 2), (2, 3), (3, 2), (4, 3)]).unwrap();
    assert!(!g.is_acyclic());

    let mut sccs: Vec<Vec<usize>> = g
        .strongly_connected_components()
        .into_iter()
        .map(|mut c| {
            c.sort_unstable();
            c
        })
        .collect();
    sccs.sort();
    assert_eq!(sccs, vec![vec![0, 1], vec![2, 3], vec![4]]);
}

#[test]
fn traversal_iterators() {
    let g = Graph::from_edges(6, &[(0, 1), (0, 2), (1, 3), (2, 4), (4, 5)]).unwrap();
    assert_eq!(g.bfs_iter(0).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(g.dfs_iter(0).collect::<Vec<_>>(), vec![0, 1, 3, 2, 4, 5]);
    assert_eq!(g.bfs(5).path_to(3), Some(vec![5, 4, 2, 0, 1, 3]));
}

#[test]
fn incremental_construction() {
    let mut g = Graph::new(3);
    assert_eq!(g.edge_count(), 0);
    g.add_edge(0, 1);
    g.add_edge(1, 2);
    assert_eq!(g.num_vertices(), 3);
    assert_eq!(g.vertex_count(), 3);
    assert!(g.is_connected());
    assert!(!g.is_empty());
}

#[test]
fn adapter_input_is_validated() {
    let err = Graph::from_edges(3, &[(0, 1), (3, 0)]).unwrap_err();
    assert_eq!(
        err,
        GraphError::VertexOutOfRange {
            vertex: 3,
            vertex_count: 3
        }
    );
    assert_eq!(err.to_string(), "vertex 3 out of range for graph with 3 vertices");
}

#[test]
#[should_panic(expected = "out of bounds")]
fn add_edge_out_of_range_panics() {
    let mut g = Digraph::new(2);
    g.add_edge(0, 2);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn prim_root_out_of_range_panics() {
    square().mst_prim(4);
}

#[test]
fn results_round_trip_through_json() {
    let g = Digraph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();

    let tree = g.bfs(0);
    let json = serde_json::to_string(&tree).unwrap();
    let back: BfsTree = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tree);

    let forest = g.dfs();
    let value = serde_json::to_value(&forest).unwrap();
    assert_eq!(value["discovery"], serde_json::json!([1, 2, 3]));
    let back: DfsForest = serde_json::from_value(value).unwrap();
    assert_eq!(back, forest);
}

#[test]
fn queries_run_concurrently_on_a_built_graph() {
    let n = 200;
    let edges: Vec<_> = (0..n).map(|i| (i, (i * 7 + 3) % n)).collect();
    let weights: Vec<f64> = (0..n).map(|i| (i % 13) as f64).collect();
    let g = WeightedGraph::from_weighted_edges(n, &edges, &weights).unwrap();

    let expected = g.mst_kruskal().total_weight();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let g = &g;
                s.spawn(move || (g.mst_prim(t).total_weight(), g.mst_kruskal().total_weight()))
            })
            .collect();
        for handle in handles {
            let (prim, kruskal) = handle.join().unwrap();
            // Both yield a minimum spanning forest, connected or not.
            assert_eq!(kruskal, expected);
            assert_eq!(prim, expected);
        }
    });
}
