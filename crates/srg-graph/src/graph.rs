use std::collections::{BTreeMap, BTreeSet};

use srg_core::{Edge, ErrorInfo, NodeLabel, SimpleGraph, SrgError};

/// Canonical undirected simple graph keyed by node label.
///
/// Instances are produced by the builder and the generators and are read-only
/// for everybody else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelGraph {
    adjacency: BTreeMap<NodeLabel, BTreeSet<NodeLabel>>,
    edges: BTreeSet<Edge>,
}

impl LabelGraph {
    /// Creates a graph with no nodes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Adds `label` as an isolated node. Returns `false` if it already existed.
    pub(crate) fn add_node(&mut self, label: NodeLabel) -> bool {
        if self.adjacency.contains_key(&label) {
            return false;
        }
        self.adjacency.insert(label, BTreeSet::new());
        true
    }

    /// Connects `a` and `b`. Returns `false` when the edge was already present.
    pub(crate) fn add_edge(&mut self, a: &NodeLabel, b: &NodeLabel) -> Result<bool, SrgError> {
        if a == b {
            return Err(
                SrgError::invalid_input("self-loop", "edge endpoints must be distinct")
                    .with_context("node", a),
            );
        }
        self.ensure_node(a)?;
        self.ensure_node(b)?;
        let edge = Edge::new(a.clone(), b.clone());
        if !self.edges.insert(edge) {
            return Ok(false);
        }
        if let Some(neighbours) = self.adjacency.get_mut(a) {
            neighbours.insert(b.clone());
        }
        if let Some(neighbours) = self.adjacency.get_mut(b) {
            neighbours.insert(a.clone());
        }
        Ok(true)
    }

    fn ensure_node(&self, label: &NodeLabel) -> Result<(), SrgError> {
        if self.adjacency.contains_key(label) {
            Ok(())
        } else {
            Err(
                SrgError::invalid_input("unknown-node", "edge references a node that does not exist")
                    .with_context("node", label),
            )
        }
    }
}

impl SimpleGraph for LabelGraph {
    fn nodes(&self) -> Box<dyn ExactSizeIterator<Item = &NodeLabel> + '_> {
        Box::new(self.adjacency.keys())
    }

    fn edges(&self) -> Box<dyn ExactSizeIterator<Item = &Edge> + '_> {
        Box::new(self.edges.iter())
    }

    fn adjacency(
        &self,
    ) -> Box<dyn ExactSizeIterator<Item = (&NodeLabel, &BTreeSet<NodeLabel>)> + '_> {
        Box::new(self.adjacency.iter())
    }

    fn neighbors(&self, node: &NodeLabel) -> Result<&BTreeSet<NodeLabel>, SrgError> {
        self.adjacency.get(node).ok_or_else(|| {
            SrgError::Graph(
                ErrorInfo::new("unknown-node", "node does not exist").with_context("node", node),
            )
        })
    }

    fn contains_node(&self, node: &NodeLabel) -> bool {
        self.adjacency.contains_key(node)
    }

    fn has_edge(&self, a: &NodeLabel, b: &NodeLabel) -> bool {
        self.edges.contains(&Edge::new(a.clone(), b.clone()))
    }

    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
