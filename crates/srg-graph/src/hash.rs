use sha2::{Digest, Sha256};
use srg_core::SimpleGraph;

/// Computes the canonical structural hash of `graph`.
///
/// Two graphs hash equal exactly when they have the same labels and the same
/// edge set.
pub fn canonical_hash(graph: &dyn SimpleGraph) -> String {
    let mut hasher = Sha256::new();
    hasher.update(b"srg-graph:v1");

    hasher.update((graph.node_count() as u64).to_le_bytes());
    for label in graph.nodes() {
        update_str(label.as_str(), &mut hasher);
    }

    hasher.update((graph.edge_count() as u64).to_le_bytes());
    for edge in graph.edges() {
        let (a, b) = edge.endpoints();
        update_str(a.as_str(), &mut hasher);
        update_str(b.as_str(), &mut hasher);
    }

    format!("{:x}", hasher.finalize())
}

fn update_str(value: &str, hasher: &mut Sha256) {
    hasher.update((value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}
