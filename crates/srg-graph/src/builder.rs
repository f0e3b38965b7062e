use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use srg_core::{BuildEvent, BuildObserver, NodeLabel, SimpleGraph, SourceKind, SrgError};

use crate::graph::LabelGraph;
use crate::sparse_chain::build_from_sparse_chain;

/// Label set plus edge pairs as produced by an interactive editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphicalStructure {
    /// Node labels; duplicates collapse.
    pub labels: Vec<String>,
    /// Edge endpoints; every label must appear in `labels`.
    #[serde(default)]
    pub edges: Vec<(String, String)>,
}

/// One fully specified external graph representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GraphSource {
    /// Square matrix where entry `(i, j) == 1` connects `labels[i]` and `labels[j]`.
    AdjacencyMatrix {
        /// Row-major 0/1 matrix.
        matrix: Vec<Vec<u8>>,
        /// One label per row.
        labels: Vec<String>,
    },
    /// Edge-by-vertex matrix with exactly two `1` entries per row.
    IncidenceMatrix {
        /// One row per edge, one column per label.
        matrix: Vec<Vec<u8>>,
        /// One label per column.
        labels: Vec<String>,
    },
    /// Pre-materialised labels and edges.
    GraphicalStructure(GraphicalStructure),
    /// Two-array sparse chain encoding.
    SparseChain {
        /// Raw node identifiers.
        g: Vec<i64>,
        /// Threshold per synthetic vertex.
        p: Vec<usize>,
    },
}

impl GraphSource {
    /// Returns the tag of this representation.
    pub fn kind(&self) -> SourceKind {
        match self {
            GraphSource::AdjacencyMatrix { .. } => SourceKind::AdjacencyMatrix,
            GraphSource::IncidenceMatrix { .. } => SourceKind::IncidenceMatrix,
            GraphSource::GraphicalStructure(_) => SourceKind::GraphicalStructure,
            GraphSource::SparseChain { .. } => SourceKind::SparseChain,
        }
    }
}

/// Materialises [`LabelGraph`]s and reports each build to an observer.
#[derive(Clone)]
pub struct GraphBuilder {
    observer: Option<Arc<dyn BuildObserver>>,
}

impl GraphBuilder {
    /// Creates a builder that reports builds through `tracing`.
    pub fn new() -> Self {
        Self {
            observer: Some(Arc::new(srg_core::TracingObserver)),
        }
    }

    /// Creates a builder that reports to nobody.
    pub fn silent() -> Self {
        Self { observer: None }
    }

    /// Replaces the observer notified after every successful build.
    pub fn with_observer(mut self, observer: Arc<dyn BuildObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Builds the graph described by `source`.
    pub fn build(&self, source: &GraphSource) -> Result<LabelGraph, SrgError> {
        let kind = source.kind();
        let graph = match source {
            GraphSource::AdjacencyMatrix { matrix, labels } => {
                build_from_adjacency_matrix(matrix, labels)
            }
            GraphSource::IncidenceMatrix { matrix, labels } => {
                build_from_incidence_matrix(matrix, labels)
            }
            GraphSource::GraphicalStructure(structure) => {
                build_from_graphical_structure(structure)
            }
            GraphSource::SparseChain { g, p } => build_from_sparse_chain(g, p),
        }
        .map_err(|err| {
            tracing::debug!(source = kind.as_str(), code = %err.info().code, "graph build rejected");
            err.with_context("source", kind)
        })?;

        if let Some(observer) = &self.observer {
            observer.on_build(&BuildEvent {
                source: kind,
                nodes: graph.node_count(),
                edges: graph.edge_count(),
            });
        }
        Ok(graph)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GraphBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphBuilder")
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

/// Builds a graph from a square adjacency matrix.
///
/// All labels become nodes before any edge is added, so isolated vertices are
/// kept. Entries other than `1` mean "no edge".
pub fn build_from_adjacency_matrix(
    matrix: &[Vec<u8>],
    labels: &[String],
) -> Result<LabelGraph, SrgError> {
    if labels.len() != matrix.len() {
        return Err(SrgError::invalid_input(
            "label-count",
            "adjacency matrix needs exactly one label per row",
        )
        .with_context("rows", matrix.len())
        .with_context("labels", labels.len()));
    }
    if let Some((row, width)) = matrix
        .iter()
        .enumerate()
        .map(|(row, values)| (row, values.len()))
        .find(|(_, width)| *width != matrix.len())
    {
        return Err(
            SrgError::invalid_input("non-square", "adjacency matrix must be square")
                .with_context("row", row)
                .with_context("width", width)
                .with_context("expected", matrix.len()),
        );
    }

    let nodes = node_labels(labels)?;
    let mut graph = LabelGraph::new();
    for label in &nodes {
        graph.add_node(label.clone());
    }
    for (i, row) in matrix.iter().enumerate() {
        for (j, value) in row.iter().enumerate() {
            if *value == 1 {
                graph
                    .add_edge(&nodes[i], &nodes[j])
                    .map_err(|err| err.with_context("row", i).with_context("column", j))?;
            }
        }
    }
    Ok(graph)
}

/// Builds a graph from an edge-by-vertex incidence matrix.
pub fn build_from_incidence_matrix(
    matrix: &[Vec<u8>],
    labels: &[String],
) -> Result<LabelGraph, SrgError> {
    let nodes = node_labels(labels)?;
    let mut graph = LabelGraph::new();
    for label in &nodes {
        graph.add_node(label.clone());
    }
    for (row, values) in matrix.iter().enumerate() {
        if values.len() != nodes.len() {
            return Err(SrgError::invalid_input(
                "row-width",
                "incidence row needs exactly one column per label",
            )
            .with_context("row", row)
            .with_context("width", values.len())
            .with_context("labels", nodes.len()));
        }
        let endpoints: Vec<usize> = values
            .iter()
            .enumerate()
            .filter(|(_, value)| **value == 1)
            .map(|(column, _)| column)
            .collect();
        let [a, b] = endpoints[..] else {
            return Err(SrgError::invalid_input(
                "incidence-row",
                "incidence row must mark exactly two endpoints",
            )
            .with_context("row", row)
            .with_context("marked", endpoints.len()));
        };
        graph.add_edge(&nodes[a], &nodes[b])?;
    }
    Ok(graph)
}

/// Builds a graph from an editor's label set and edge pairs.
///
/// Repeated edges and self-loops collapse silently. An edge naming an unknown
/// label is rejected.
pub fn build_from_graphical_structure(
    structure: &GraphicalStructure,
) -> Result<LabelGraph, SrgError> {
    let mut graph = LabelGraph::new();
    for label in &structure.labels {
        graph.add_node(NodeLabel::new(label.as_str()));
    }
    for (index, (a, b)) in structure.edges.iter().enumerate() {
        if a == b {
            if !graph.contains_node(&NodeLabel::new(a.as_str())) {
                return Err(SrgError::invalid_input(
                    "unknown-node",
                    "edge references a node that does not exist",
                )
                .with_context("node", a)
                .with_context("edge", index));
            }
            continue;
        }
        graph
            .add_edge(&NodeLabel::new(a.as_str()), &NodeLabel::new(b.as_str()))
            .map_err(|err| err.with_context("edge", index))?;
    }
    Ok(graph)
}

fn node_labels(labels: &[String]) -> Result<Vec<NodeLabel>, SrgError> {
    let mut seen = BTreeSet::new();
    let mut nodes = Vec::with_capacity(labels.len());
    for (index, label) in labels.iter().enumerate() {
        if !seen.insert(label.as_str()) {
            return Err(
                SrgError::invalid_input("duplicate-label", "vertex labels must be unique")
                    .with_context("label", label)
                    .with_context("index", index),
            );
        }
        nodes.push(NodeLabel::new(label.as_str()));
    }
    Ok(nodes)
}
