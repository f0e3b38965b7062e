#![deny(missing_docs)]
#![doc = "Strong regularity checks for undirected simple graphs. A graph passes when \
every edge has the same number of common neighbours (λ) and every non-adjacent \
pair has the same number of common neighbours (μ). Degree regularity is only \
enforced when [`CheckOpts::require_degree_regular`] is set."]

/// Degree statistics.
pub mod degree;
/// Common-neighbour counting and the μ/λ consistency checks.
pub mod params;
/// JSON helpers for regularity reports.
#[path = "serde.rs"]
pub mod serde_io;

use serde::{Deserialize, Serialize};
use srg_core::SimpleGraph;
use srg_graph::canonical_hash;

pub use degree::{is_degree_regular, DegreeProfile};
pub use params::{common_neighbors, lambda_check, mu_check, PairCount, ParameterCheck};
pub use serde_io::{report_from_json, report_to_json};

use params::{lambda_check_in, mu_check_in, Neighbourhoods};

/// Options controlling the regularity verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CheckOpts {
    /// Also require every vertex to have the same degree.
    #[serde(default)]
    pub require_degree_regular: bool,
}

impl CheckOpts {
    /// Options for the textbook definition, including degree regularity.
    pub fn strict() -> Self {
        Self {
            require_degree_regular: true,
        }
    }
}

/// Parameters `(n, k, λ, μ)` of a strongly regular graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SrgParameters {
    /// Number of vertices.
    pub vertices: usize,
    /// Common degree.
    pub degree: usize,
    /// Common neighbours of adjacent pairs; `None` without edges.
    pub lambda: Option<usize>,
    /// Common neighbours of non-adjacent pairs; `None` without such pairs.
    pub mu: Option<usize>,
}

/// Full diagnostic outcome of a regularity check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegularityReport {
    /// Number of vertices.
    pub nodes: usize,
    /// Number of edges.
    pub edges: usize,
    /// Canonical structural hash of the checked graph.
    pub graph_hash: String,
    /// λ consistency over all edges.
    pub lambda: ParameterCheck,
    /// μ consistency over all non-adjacent pairs.
    pub mu: ParameterCheck,
    /// Minimum and maximum degree.
    pub degree: DegreeProfile,
    /// Options the verdict was computed with.
    pub opts: CheckOpts,
    /// Final verdict under `opts`.
    pub strongly_regular: bool,
}

impl RegularityReport {
    /// Returns `(n, k, λ, μ)` when the graph passed and is degree regular.
    pub fn parameters(&self) -> Option<SrgParameters> {
        if !self.lambda.consistent || !self.mu.consistent || !self.degree.is_regular() {
            return None;
        }
        Some(SrgParameters {
            vertices: self.nodes,
            degree: self.degree.min.unwrap_or(0),
            lambda: self.lambda.value,
            mu: self.mu.value,
        })
    }
}

/// Returns whether `graph` is μ- and λ-consistent. Never fails; graphs with
/// no edges or no non-adjacent pairs pass vacuously.
pub fn is_strongly_regular(graph: &dyn SimpleGraph) -> bool {
    let hoods = Neighbourhoods::of(graph);
    mu_check_in(&hoods).consistent && lambda_check_in(&hoods).consistent
}

/// Runs every check on `graph` and returns the diagnostic report.
pub fn analyse(graph: &dyn SimpleGraph, opts: &CheckOpts) -> RegularityReport {
    let hoods = Neighbourhoods::of(graph);
    let mu = mu_check_in(&hoods);
    let lambda = lambda_check_in(&hoods);
    let degree = DegreeProfile::from_hoods(&hoods);

    let mut strongly_regular = mu.consistent && lambda.consistent;
    if opts.require_degree_regular {
        strongly_regular &= degree.is_regular();
    }

    RegularityReport {
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        graph_hash: canonical_hash(graph),
        lambda,
        mu,
        degree,
        opts: *opts,
        strongly_regular,
    }
}

/// Returns `(n, k, λ, μ)` when `graph` is strongly regular including degree
/// regularity.
pub fn srg_parameters(graph: &dyn SimpleGraph) -> Option<SrgParameters> {
    analyse(graph, &CheckOpts::strict()).parameters()
}
