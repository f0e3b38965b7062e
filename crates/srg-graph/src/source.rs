//! Loosely populated builder input as supplied by configuration layers.

use serde::{Deserialize, Serialize};
use srg_core::{ErrorInfo, SourceKind, SrgError};

use crate::builder::{GraphSource, GraphicalStructure};

/// Optional-field input record. Each representation reads only the fields it
/// needs; [`RawSource::select`] turns the record into a [`GraphSource`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSource {
    /// Adjacency or incidence matrix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matrix: Option<Vec<Vec<u8>>>,
    /// Vertex labels for matrix sources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    /// Editor output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<GraphicalStructure>,
    /// Sparse chain identifiers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub g: Option<Vec<i64>>,
    /// Sparse chain thresholds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p: Option<Vec<usize>>,
}

impl RawSource {
    /// Picks the representation named by `kind`, failing with
    /// [`SrgError::MissingInput`] when one of its fields is absent.
    pub fn select(self, kind: SourceKind) -> Result<GraphSource, SrgError> {
        match kind {
            SourceKind::AdjacencyMatrix => Ok(GraphSource::AdjacencyMatrix {
                matrix: require(self.matrix, kind, "matrix")?,
                labels: require(self.labels, kind, "labels")?,
            }),
            SourceKind::IncidenceMatrix => Ok(GraphSource::IncidenceMatrix {
                matrix: require(self.matrix, kind, "matrix")?,
                labels: require(self.labels, kind, "labels")?,
            }),
            SourceKind::GraphicalStructure => Ok(GraphSource::GraphicalStructure(require(
                self.structure,
                kind,
                "structure",
            )?)),
            SourceKind::SparseChain => Ok(GraphSource::SparseChain {
                g: require(self.g, kind, "g")?,
                p: require(self.p, kind, "p")?,
            }),
        }
    }
}

fn require<T>(value: Option<T>, kind: SourceKind, field: &str) -> Result<T, SrgError> {
    value.ok_or_else(|| {
        SrgError::MissingInput(
            ErrorInfo::new("missing-field", "selected source lacks a required field")
                .with_context("source", kind)
                .with_context("field", field)
                .with_hint(format!("populate `{field}` or select another source")),
        )
    })
}

/// Parses a [`RawSource`] from JSON text.
pub fn raw_source_from_json(json: &str) -> Result<RawSource, SrgError> {
    serde_json::from_str(json)
        .map_err(|err| SrgError::Serde(ErrorInfo::new("raw-source-deserialize", err.to_string())))
}

/// Parses a fully tagged [`GraphSource`] from JSON text.
pub fn graph_source_from_json(json: &str) -> Result<GraphSource, SrgError> {
    serde_json::from_str(json)
        .map_err(|err| SrgError::Serde(ErrorInfo::new("source-deserialize", err.to_string())))
}
