use std::collections::BTreeSet;

use proptest::prelude::*;
use srg_core::rng::RngHandle;
use srg_core::{Edge, NodeLabel, SimpleGraph};
use srg_graph::{
    build_from_adjacency_matrix, build_from_sparse_chain, canonical_hash, gen_random_graph,
    render_model, GraphicalStructure, build_from_graphical_structure,
};

fn check_invariants(graph: &dyn SimpleGraph) {
    for edge in graph.edges() {
        let (a, b) = edge.endpoints();
        assert_ne!(a, b);
        assert!(graph.contains_node(a) && graph.contains_node(b));
        assert!(graph.neighbors(a).unwrap().contains(b));
        assert!(graph.neighbors(b).unwrap().contains(a));
    }
    let degree_sum: usize = graph.nodes().map(|node| graph.degree(node).unwrap()).sum();
    assert_eq!(degree_sum, 2 * graph.edge_count());
}

fn symmetric_matrix(n: usize, bits: &[bool]) -> Vec<Vec<u8>> {
    let mut matrix = vec![vec![0u8; n]; n];
    let mut next = bits.iter().copied().cycle();
    for i in 0..n {
        for j in i + 1..n {
            if next.next().unwrap_or(false) {
                matrix[i][j] = 1;
                matrix[j][i] = 1;
            }
        }
    }
    matrix
}

proptest! {
    #[test]
    fn adjacency_matrix_round_trip(n in 0usize..9, bits in proptest::collection::vec(any::<bool>(), 1..40)) {
        let matrix = symmetric_matrix(n, &bits);
        let labels: Vec<String> = (0..n).map(|i| format!("v{i}")).collect();
        let graph = build_from_adjacency_matrix(&matrix, &labels).unwrap();
        check_invariants(&graph);
        prop_assert_eq!(graph.node_count(), labels.len());

        let mut expected = BTreeSet::new();
        for (i, row) in matrix.iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                if *value == 1 {
                    expected.insert(Edge::new(
                        NodeLabel::new(labels[i].as_str()),
                        NodeLabel::new(labels[j].as_str()),
                    ));
                }
            }
        }
        let actual: BTreeSet<Edge> = graph.edges().cloned().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn random_graphs_survive_editor_round_trip(seed in any::<u64>(), n in 0usize..12) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = gen_random_graph(n, 0.5, &mut rng).unwrap();
        check_invariants(&graph);
        let structure = GraphicalStructure::from(&render_model(&graph));
        let rebuilt = build_from_graphical_structure(&structure).unwrap();
        prop_assert_eq!(canonical_hash(&graph), canonical_hash(&rebuilt));
    }

    #[test]
    fn sparse_chain_links_stay_in_range(
        g in proptest::collection::vec(100i64..200, 1..12),
        p in proptest::collection::vec(0usize..15, 1..8),
    ) {
        let graph = build_from_sparse_chain(&g, &p).unwrap();
        check_invariants(&graph);
        let distinct: BTreeSet<i64> = g.iter().copied().collect();
        prop_assert_eq!(graph.node_count(), distinct.len() + p.len());
        for edge in graph.edges() {
            let (a, b) = edge.endpoints();
            // Chain labels are three digits, synthetic ones at most one.
            let synthetic = if a.as_str().len() < b.as_str().len() { a } else { b };
            let index: usize = synthetic.as_str().parse().unwrap();
            prop_assert!((1..=p.len()).contains(&index));
        }
    }
}
