//! Build notifications emitted by graph builders.
//!
//! Builders never log through a global handle. Instead they hand a
//! [`BuildEvent`] to whichever [`BuildObserver`] the caller injected. The
//! default [`TracingObserver`] forwards events to the `tracing` facade, so an
//! application that installs a subscriber sees them without extra wiring.

use serde::{Deserialize, Serialize};

use crate::types::SourceKind;

/// Summary of a completed graph build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildEvent {
    /// Representation the graph was materialised from.
    pub source: SourceKind,
    /// Number of nodes in the resulting graph.
    pub nodes: usize,
    /// Number of undirected edges in the resulting graph.
    pub edges: usize,
}

/// Receives build notifications. Observers cannot influence the build result.
pub trait BuildObserver: Send + Sync {
    /// Called once per successful build.
    fn on_build(&self, event: &BuildEvent);
}

/// Observer that emits every event as a `tracing` record at `info` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl BuildObserver for TracingObserver {
    fn on_build(&self, event: &BuildEvent) {
        tracing::info!(
            source = event.source.as_str(),
            nodes = event.nodes,
            edges = event.edges,
            "built graph"
        );
    }
}

impl<F> BuildObserver for F
where
    F: Fn(&BuildEvent) + Send + Sync,
{
    fn on_build(&self, event: &BuildEvent) {
        self(event)
    }
}
