use srg_check::{analyse, is_strongly_regular, lambda_check, mu_check, srg_parameters, CheckOpts, PairCount, SrgParameters};
use srg_core::{NodeLabel, SrgError};
use srg_graph::{
    build_from_graphical_structure, complete_bipartite_graph, complete_graph, cycle_graph,
    empty_graph, paley_graph, petersen_graph, GraphicalStructure, LabelGraph,
};

fn structure(labels: &[&str], edges: &[(&str, &str)]) -> Result<LabelGraph, SrgError> {
    build_from_graphical_structure(&GraphicalStructure {
        labels: labels.iter().map(|label| label.to_string()).collect(),
        edges: edges
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect(),
    })
}

#[test]
fn degenerate_graphs_pass_vacuously() -> Result<(), SrgError> {
    let empty = LabelGraph::new();
    assert!(is_strongly_regular(&empty));

    let single = empty_graph(1);
    assert!(is_strongly_regular(&single));
    assert_eq!(mu_check(&single).samples, 0);
    assert_eq!(lambda_check(&single).samples, 0);

    for n in 2..7 {
        let complete = complete_graph(n)?;
        assert!(is_strongly_regular(&complete), "K{n}");
        let mu = mu_check(&complete);
        assert_eq!(mu.samples, 0);
        assert_eq!(mu.value, None);
        assert_eq!(lambda_check(&complete).value, Some(n - 2));
    }
    Ok(())
}

#[test]
fn edgeless_graph_has_no_mu_samples() {
    let graph = empty_graph(3);
    let mu = mu_check(&graph);
    assert!(mu.consistent);
    assert_eq!(mu.samples, 0);
    assert!(is_strongly_regular(&graph));
}

#[test]
fn isolated_vertex_only_appears_as_partner() -> Result<(), SrgError> {
    let graph = structure(&["a", "b", "c"], &[("a", "b")])?;
    let mu = mu_check(&graph);
    assert_eq!(mu.samples, 2);
    assert_eq!(mu.value, Some(0));
    assert!(is_strongly_regular(&graph));
    Ok(())
}

#[test]
fn five_cycle_is_strongly_regular() -> Result<(), SrgError> {
    let graph = structure(
        &["a", "b", "c", "d", "e"],
        &[("a", "b"), ("b", "c"), ("c", "d"), ("d", "e"), ("e", "a")],
    )?;
    let report = analyse(&graph, &CheckOpts::default());
    assert!(report.strongly_regular);
    assert_eq!(report.lambda.value, Some(0));
    assert_eq!(report.lambda.samples, 5);
    assert_eq!(report.mu.value, Some(1));
    assert_eq!(report.mu.samples, 10);
    assert_eq!(
        report.parameters(),
        Some(SrgParameters {
            vertices: 5,
            degree: 2,
            lambda: Some(0),
            mu: Some(1),
        })
    );
    Ok(())
}

#[test]
fn four_path_is_not_strongly_regular() -> Result<(), SrgError> {
    let graph = structure(
        &["A", "B", "C", "D"],
        &[("A", "B"), ("B", "C"), ("C", "D")],
    )?;
    assert!(!is_strongly_regular(&graph));

    let mu = mu_check(&graph);
    assert!(!mu.consistent);
    assert_eq!(mu.value, Some(1));
    assert_eq!(
        mu.mismatch,
        Some(PairCount {
            a: NodeLabel::from("A"),
            b: NodeLabel::from("D"),
            common: 0,
        })
    );
    assert!(lambda_check(&graph).consistent);
    assert_eq!(srg_parameters(&graph), None);
    Ok(())
}

#[test]
fn classical_families_report_their_parameters() -> Result<(), SrgError> {
    let cases = [
        (petersen_graph()?, (10, 3, 0, 1)),
        (paley_graph(13)?, (13, 6, 2, 3)),
        (paley_graph(5)?, (5, 2, 0, 1)),
        (complete_bipartite_graph(3, 3)?, (6, 3, 0, 3)),
        (cycle_graph(5)?, (5, 2, 0, 1)),
    ];
    for (graph, (n, k, lambda, mu)) in cases {
        assert_eq!(
            srg_parameters(&graph),
            Some(SrgParameters {
                vertices: n,
                degree: k,
                lambda: Some(lambda),
                mu: Some(mu),
            })
        );
    }
    Ok(())
}

#[test]
fn disjoint_triangles_pass() -> Result<(), SrgError> {
    let graph = structure(
        &["a", "b", "c", "x", "y", "z"],
        &[("a", "b"), ("b", "c"), ("c", "a"), ("x", "y"), ("y", "z"), ("z", "x")],
    )?;
    let params = srg_parameters(&graph).expect("two triangles are strongly regular");
    assert_eq!(params.lambda, Some(1));
    assert_eq!(params.mu, Some(0));
    Ok(())
}

#[test]
fn longer_cycles_fail() -> Result<(), SrgError> {
    for n in 6..10 {
        let graph = cycle_graph(n)?;
        assert!(!is_strongly_regular(&graph), "C{n}");
    }
    assert!(is_strongly_regular(&cycle_graph(4)?));
    Ok(())
}
