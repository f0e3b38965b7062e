//! Decoder for the two-array sparse chain encoding.
//!
//! `g` lists raw node identifiers and `p` holds one threshold per synthetic
//! vertex. Synthetic vertex `i + 1` attaches to `g[cursor]` for as long as
//! `p[i] >= cursor`, with the cursor shared across all positions. The cursor
//! never moves past the last entry of `g`.

use srg_core::{NodeLabel, SrgError};

use crate::graph::LabelGraph;

/// One decoded attachment between a synthetic vertex and a chain entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ChainLink {
    /// 1-based index of the synthetic vertex (position in `p` plus one).
    pub vertex: usize,
    /// Raw identifier read from `g` at the cursor.
    pub target: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PositionState {
    /// The current position may still attach entries.
    Open,
    /// The cursor sits on the last entry of `g`; move to the next position.
    ChainExhausted,
}

/// Iterator performing the two-cursor walk over `(g, p)`.
#[derive(Debug, Clone)]
pub struct SparseChainDecoder<'a> {
    g: &'a [i64],
    p: &'a [usize],
    position: usize,
    cursor: usize,
    state: PositionState,
}

impl<'a> SparseChainDecoder<'a> {
    /// Starts a walk with both cursors at zero.
    pub fn new(g: &'a [i64], p: &'a [usize]) -> Self {
        Self {
            g,
            p,
            position: 0,
            cursor: 0,
            state: PositionState::Open,
        }
    }

    fn next_position(&mut self) {
        self.position += 1;
        self.state = PositionState::Open;
    }
}

impl Iterator for SparseChainDecoder<'_> {
    type Item = ChainLink;

    fn next(&mut self) -> Option<ChainLink> {
        loop {
            let threshold = *self.p.get(self.position)?;
            let target = *self.g.get(self.cursor)?;
            if self.state == PositionState::ChainExhausted || threshold < self.cursor {
                self.next_position();
                continue;
            }
            let link = ChainLink {
                vertex: self.position + 1,
                target,
            };
            if self.cursor + 1 < self.g.len() {
                self.cursor += 1;
            } else {
                self.state = PositionState::ChainExhausted;
            }
            return Some(link);
        }
    }
}

/// Label of the synthetic vertex for 1-based position `vertex`.
pub fn synthetic_label(vertex: usize) -> NodeLabel {
    NodeLabel::new(vertex.to_string())
}

/// Label of a raw chain identifier.
pub fn chain_label(value: i64) -> NodeLabel {
    NodeLabel::new(value.to_string())
}

/// Builds a graph from the sparse chain arrays `g` and `p`.
///
/// Nodes are the distinct values of `g` together with the synthetic labels
/// `"1"..="len(p)"`; edges come from [`SparseChainDecoder`]. A link whose two
/// labels coincide would be a self-loop and is rejected.
pub fn build_from_sparse_chain(g: &[i64], p: &[usize]) -> Result<LabelGraph, SrgError> {
    if g.is_empty() {
        return Err(
            SrgError::invalid_input("empty-chain", "sparse chain requires a non-empty `g` array")
                .with_context("array", "g"),
        );
    }
    if p.is_empty() {
        return Err(
            SrgError::invalid_input("empty-chain", "sparse chain requires a non-empty `p` array")
                .with_context("array", "p"),
        );
    }

    let mut graph = LabelGraph::new();
    for value in g {
        graph.add_node(chain_label(*value));
    }
    for vertex in 1..=p.len() {
        graph.add_node(synthetic_label(vertex));
    }
    for link in SparseChainDecoder::new(g, p) {
        graph
            .add_edge(&synthetic_label(link.vertex), &chain_label(link.target))
            .map_err(|err| err.with_context("position", link.vertex))?;
    }
    Ok(graph)
}
