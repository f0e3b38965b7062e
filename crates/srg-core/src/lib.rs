#![deny(missing_docs)]
#![doc = "Core traits and data types shared by the graph builder and the regularity checker."]

use std::collections::BTreeSet;
use std::iter::ExactSizeIterator;

pub mod errors;
pub mod observer;
pub mod rng;
mod types;

pub use errors::{ErrorInfo, SrgError};
pub use observer::{BuildEvent, BuildObserver, TracingObserver};
pub use rng::{derive_substream_seed, RngHandle};
pub use types::{Edge, NodeLabel, SourceKind};

/// Read-only view of an undirected simple graph.
///
/// Implementations guarantee there are no self-loops, no duplicate edges and
/// that both endpoints of every edge are nodes of the graph. Iteration order
/// is deterministic.
pub trait SimpleGraph: Send + Sync {
    /// Returns an iterator over all node labels.
    fn nodes(&self) -> Box<dyn ExactSizeIterator<Item = &NodeLabel> + '_>;

    /// Returns an iterator over all undirected edges.
    fn edges(&self) -> Box<dyn ExactSizeIterator<Item = &Edge> + '_>;

    /// Returns every node paired with its neighbour set.
    fn adjacency(
        &self,
    ) -> Box<dyn ExactSizeIterator<Item = (&NodeLabel, &BTreeSet<NodeLabel>)> + '_>;

    /// Returns the neighbour set of `node`.
    fn neighbors(&self, node: &NodeLabel) -> Result<&BTreeSet<NodeLabel>, SrgError>;

    /// Returns whether `node` belongs to the graph.
    fn contains_node(&self, node: &NodeLabel) -> bool;

    /// Returns whether `a` and `b` are adjacent.
    fn has_edge(&self, a: &NodeLabel, b: &NodeLabel) -> bool {
        self.neighbors(a)
            .map(|neighbours| neighbours.contains(b))
            .unwrap_or(false)
    }

    /// Returns the degree of `node`.
    fn degree(&self, node: &NodeLabel) -> Result<usize, SrgError> {
        Ok(self.neighbors(node)?.len())
    }

    /// Returns the number of nodes.
    fn node_count(&self) -> usize {
        self.nodes().len()
    }

    /// Returns the number of edges.
    fn edge_count(&self) -> usize {
        self.edges().len()
    }
}
