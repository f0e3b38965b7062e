use srg_check::{analyse, is_degree_regular, is_strongly_regular, srg_parameters, CheckOpts, DegreeProfile};
use srg_core::SrgError;
use srg_graph::{complete_bipartite_graph, star_graph};

#[test]
fn star_passes_default_check_but_not_strict() -> Result<(), SrgError> {
    let star = star_graph(3)?;
    assert!(is_strongly_regular(&star));
    assert!(!is_degree_regular(&star));

    let lenient = analyse(&star, &CheckOpts::default());
    assert!(lenient.strongly_regular);
    assert_eq!(lenient.lambda.value, Some(0));
    assert_eq!(lenient.mu.value, Some(1));
    assert_eq!(
        lenient.degree,
        DegreeProfile {
            min: Some(1),
            max: Some(3),
        }
    );

    let strict = analyse(&star, &CheckOpts::strict());
    assert!(!strict.strongly_regular);
    assert_eq!(strict.parameters(), None);
    assert_eq!(srg_parameters(&star), None);
    Ok(())
}

#[test]
fn unbalanced_bipartite_graph_shows_the_same_gap() -> Result<(), SrgError> {
    let graph = complete_bipartite_graph(2, 4)?;
    let lenient = analyse(&graph, &CheckOpts::default());
    // Same-side pairs share the whole other side: 4 on the left, 2 on the right.
    assert!(!lenient.mu.consistent);
    assert!(!lenient.strongly_regular);

    let balanced = complete_bipartite_graph(4, 4)?;
    assert!(analyse(&balanced, &CheckOpts::strict()).strongly_regular);
    Ok(())
}

#[test]
fn opts_deserialize_with_lenient_default() {
    let opts: CheckOpts = serde_json::from_str("{}").unwrap();
    assert_eq!(opts, CheckOpts::default());
    assert!(!opts.require_degree_regular);
}
