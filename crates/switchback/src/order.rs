//! In-rank ordering.

use crate::graph::Graph;
use crate::util;
use crate::{EdgeLabel, GraphLabel, NodeLabel};

/// Assigns `NodeLabel::order`: the position of each node within its rank.
/// Nodes keep the order they were inserted in, so the document order of the
/// input survives into the layout unchanged.
pub fn order(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>) {
    for layer in util::build_layer_matrix(g) {
        for (i, id) in layer.iter().enumerate() {
            if let Some(label) = g.node_mut(id) {
                label.order = Some(i);
            }
        }
    }
}
