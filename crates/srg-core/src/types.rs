use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Unique string identifier of a graph node.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeLabel(String);

impl NodeLabel {
    /// Creates a label from anything string-like.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the label and returns the owned text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeLabel {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for NodeLabel {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for NodeLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Undirected edge stored with its endpoints in label order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    lo: NodeLabel,
    hi: NodeLabel,
}

impl Edge {
    /// Creates the unordered pair `{a, b}`.
    pub fn new(a: NodeLabel, b: NodeLabel) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// Returns the endpoints, smaller label first.
    pub fn endpoints(&self) -> (&NodeLabel, &NodeLabel) {
        (&self.lo, &self.hi)
    }

    /// Returns whether both endpoints are the same node.
    pub fn is_loop(&self) -> bool {
        self.lo == self.hi
    }

    /// Returns whether `node` is one of the endpoints.
    pub fn touches(&self, node: &NodeLabel) -> bool {
        &self.lo == node || &self.hi == node
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.lo, self.hi)
    }
}

/// Tag naming one of the external graph representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Square 0/1 adjacency matrix with a label per row.
    AdjacencyMatrix,
    /// Edge-by-vertex incidence matrix with a label per column.
    IncidenceMatrix,
    /// Label set plus edge pairs handed over by an editor.
    GraphicalStructure,
    /// Two-array sparse chain encoding.
    SparseChain,
}

impl SourceKind {
    /// Stable name used in logs and error contexts.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::AdjacencyMatrix => "adjacency_matrix",
            SourceKind::IncidenceMatrix => "incidence_matrix",
            SourceKind::GraphicalStructure => "graphical_structure",
            SourceKind::SparseChain => "sparse_chain",
        }
    }
}

impl Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
