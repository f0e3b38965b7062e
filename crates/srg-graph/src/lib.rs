#![deny(missing_docs)]

//! Canonical undirected graph model and the builder that materialises it from
//! adjacency matrices, incidence matrices, editor output and sparse chain
//! encodings.

mod builder;
mod generators;
mod graph;
mod hash;
pub mod render;
mod source;
pub mod sparse_chain;

pub use builder::{
    build_from_adjacency_matrix, build_from_graphical_structure, build_from_incidence_matrix,
    GraphBuilder, GraphSource, GraphicalStructure,
};
pub use generators::{
    complete_bipartite_graph, complete_graph, cycle_graph, empty_graph, gen_random_graph,
    index_label, paley_graph, path_graph, petersen_graph, star_graph,
};
pub use graph::LabelGraph;
pub use hash::canonical_hash;
pub use render::{render_model, GraphRenderer, RenderModel};
pub use source::{graph_source_from_json, raw_source_from_json, RawSource};
pub use sparse_chain::{build_from_sparse_chain, SparseChainDecoder};
