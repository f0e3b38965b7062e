use std::collections::BTreeSet;

use rand::Rng;
use srg_core::rng::RngHandle;
use srg_core::{NodeLabel, SrgError};

use crate::graph::LabelGraph;

/// Graph on `0..n` with no edges.
pub fn empty_graph(n: usize) -> LabelGraph {
    let mut graph = LabelGraph::new();
    for index in 0..n {
        graph.add_node(index_label(index));
    }
    graph
}

/// Complete graph `K_n`.
pub fn complete_graph(n: usize) -> Result<LabelGraph, SrgError> {
    from_index_pairs(n, (0..n).flat_map(|a| (a + 1..n).map(move |b| (a, b))))
}

/// Path `0 - 1 - ... - (n-1)`.
pub fn path_graph(n: usize) -> Result<LabelGraph, SrgError> {
    from_index_pairs(n, (1..n).map(|b| (b - 1, b)))
}

/// Cycle `C_n`; requires `n >= 3`.
pub fn cycle_graph(n: usize) -> Result<LabelGraph, SrgError> {
    if n < 3 {
        return Err(
            SrgError::invalid_input("cycle-too-short", "a simple cycle needs at least 3 nodes")
                .with_context("nodes", n),
        );
    }
    from_index_pairs(n, (0..n).map(|a| (a, (a + 1) % n)))
}

/// Star `K_{1,leaves}` with centre `0`.
pub fn star_graph(leaves: usize) -> Result<LabelGraph, SrgError> {
    from_index_pairs(leaves + 1, (1..=leaves).map(|leaf| (0, leaf)))
}

/// Complete bipartite graph `K_{a,b}`; the first part is `0..a`.
pub fn complete_bipartite_graph(a: usize, b: usize) -> Result<LabelGraph, SrgError> {
    from_index_pairs(
        a + b,
        (0..a).flat_map(|left| (a..a + b).map(move |right| (left, right))),
    )
}

/// The Petersen graph, SRG(10, 3, 0, 1).
pub fn petersen_graph() -> Result<LabelGraph, SrgError> {
    let outer = (0..5).map(|i| (i, (i + 1) % 5));
    let spokes = (0..5).map(|i| (i, i + 5));
    let inner = (0..5).map(|i| (i + 5, (i + 2) % 5 + 5));
    from_index_pairs(10, outer.chain(spokes).chain(inner))
}

/// Paley graph on the prime field of order `q`; requires `q` prime with
/// `q % 4 == 1`.
pub fn paley_graph(q: usize) -> Result<LabelGraph, SrgError> {
    if !is_prime(q) || q % 4 != 1 {
        return Err(SrgError::invalid_input(
            "paley-order",
            "paley graphs need a prime order congruent to 1 mod 4",
        )
        .with_context("order", q));
    }
    let residues: BTreeSet<usize> = (1..q).map(|x| x * x % q).collect();
    from_index_pairs(
        q,
        (0..q).flat_map(|a| {
            let residues = residues.clone();
            (a + 1..q)
                .filter(move |b| residues.contains(&(b - a)))
                .map(move |b| (a, b))
        }),
    )
}

/// Erdős–Rényi `G(n, p)` sample drawn from `rng`.
pub fn gen_random_graph(
    n: usize,
    edge_probability: f64,
    rng: &mut RngHandle,
) -> Result<LabelGraph, SrgError> {
    if !(0.0..=1.0).contains(&edge_probability) {
        return Err(SrgError::invalid_input(
            "edge-probability",
            "edge probability must lie in [0, 1]",
        )
        .with_context("probability", edge_probability));
    }
    let mut pairs = Vec::new();
    for a in 0..n {
        for b in a + 1..n {
            if rng.gen_bool(edge_probability) {
                pairs.push((a, b));
            }
        }
    }
    from_index_pairs(n, pairs)
}

/// Label used by the generators for vertex `index`.
pub fn index_label(index: usize) -> NodeLabel {
    NodeLabel::new(index.to_string())
}

fn from_index_pairs(
    n: usize,
    pairs: impl IntoIterator<Item = (usize, usize)>,
) -> Result<LabelGraph, SrgError> {
    let mut graph = empty_graph(n);
    for (a, b) in pairs {
        graph.add_edge(&index_label(a), &index_label(b))?;
    }
    Ok(graph)
}

fn is_prime(value: usize) -> bool {
    if value < 2 {
        return false;
    }
    (2..)
        .take_while(|divisor| divisor * divisor <= value)
        .all(|divisor| value % divisor != 0)
}
