//! Shared helpers for the layout passes.

use crate::graph::Graph;
use crate::{EdgeLabel, GraphLabel, NodeLabel};

/// Groups node ids by rank. Layer `r` lists the ids whose `rank == r` in node
/// insertion order; unranked nodes land in layer 0.
pub fn build_layer_matrix(g: &Graph<NodeLabel, EdgeLabel, GraphLabel>) -> Vec<Vec<String>> {
    let max_rank = g
        .nodes()
        .filter_map(|id| g.node(id).and_then(|n| n.rank))
        .max()
        .unwrap_or(0)
        .max(0);

    let mut layers: Vec<Vec<String>> = vec![Vec::new(); max_rank as usize + 1];
    for id in g.node_ids() {
        let r = g.node(&id).and_then(|n| n.rank).unwrap_or(0).max(0) as usize;
        layers[r].push(id);
    }
    layers
}
