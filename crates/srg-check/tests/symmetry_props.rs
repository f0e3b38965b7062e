use proptest::prelude::*;
use srg_check::{analyse, common_neighbors, is_strongly_regular, CheckOpts};
use srg_core::rng::RngHandle;
use srg_core::{NodeLabel, SimpleGraph};
use srg_graph::gen_random_graph;

proptest! {
    #[test]
    fn common_neighbor_counts_are_symmetric(seed in any::<u64>(), n in 1usize..10) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = gen_random_graph(n, 0.5, &mut rng).unwrap();
        let nodes: Vec<NodeLabel> = graph.nodes().cloned().collect();
        for a in &nodes {
            for b in &nodes {
                prop_assert_eq!(
                    common_neighbors(&graph, a, b).unwrap(),
                    common_neighbors(&graph, b, a).unwrap()
                );
            }
        }
    }

    #[test]
    fn verdicts_agree_across_entry_points(seed in any::<u64>(), n in 0usize..10, p in 0.0f64..=1.0) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = gen_random_graph(n, p, &mut rng).unwrap();
        let lenient = analyse(&graph, &CheckOpts::default());
        let strict = analyse(&graph, &CheckOpts::strict());
        prop_assert_eq!(lenient.strongly_regular, is_strongly_regular(&graph));
        prop_assert!(!strict.strongly_regular || lenient.strongly_regular);
        prop_assert_eq!(lenient.lambda.samples, graph.edge_count());
        prop_assert_eq!(lenient.mu.consistent, lenient.mu.mismatch.is_none());
        prop_assert_eq!(lenient.graph_hash, strict.graph_hash);
    }
}

#[test]
fn unknown_labels_are_graph_errors() {
    let mut rng = RngHandle::from_seed(3);
    let graph = gen_random_graph(3, 1.0, &mut rng).unwrap();
    let err = common_neighbors(&graph, &NodeLabel::from("0"), &NodeLabel::from("nope")).unwrap_err();
    assert_eq!(err.info().code, "unknown-node");
    assert_eq!(common_neighbors(&graph, &NodeLabel::from("0"), &NodeLabel::from("1")).unwrap(), 1);
}
