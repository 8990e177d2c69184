//! Coordinate assignment.

use crate::graph::Graph;
use crate::util;
use crate::{EdgeLabel, GraphLabel, NodeLabel, Point, RankDir};

/// Assigns center coordinates to every node and attachment points to every
/// edge.
///
/// The layout is computed in a top-to-bottom frame: the rank index fixes the
/// main-axis offset, nodes within a rank are spaced along the cross axis and
/// each rank is centered against the widest one. For [`RankDir::LR`] the
/// extents are transposed up front and the axes swapped at the end, the way
/// dagre treats horizontal layouts.
pub fn position(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>) {
    let label = g.graph().clone();
    let (main_extent, cross_extent) = match label.rankdir {
        RankDir::TB => (label.node_height, label.node_width),
        RankDir::LR => (label.node_width, label.node_height),
    };

    let layers = util::build_layer_matrix(g);
    let widest = layers
        .iter()
        .map(|l| layer_span(l.len(), cross_extent, label.nodesep))
        .fold(0.0_f64, f64::max);

    for (rank_idx, layer) in layers.iter().enumerate() {
        let main = rank_idx as f64 * (main_extent + label.ranksep) + main_extent / 2.0;
        let mut cross_cursor =
            (widest - layer_span(layer.len(), cross_extent, label.nodesep)) / 2.0;
        for id in layer {
            let cross = cross_cursor + cross_extent / 2.0;
            if let Some(n) = g.node_mut(id) {
                n.x = Some(cross);
                n.y = Some(main);
            }
            cross_cursor += cross_extent + label.nodesep;
        }
    }

    // Attachment points: tail bottom-center to head top-center in the
    // working frame.
    for key in g.edge_keys() {
        let Some((sx, sy)) = center(g, &key.v) else {
            continue;
        };
        let Some((tx, ty)) = center(g, &key.w) else {
            continue;
        };
        if let Some(e) = g.edge_mut_by_key(&key) {
            e.points.clear();
            e.points.push(Point {
                x: sx,
                y: sy + main_extent / 2.0,
            });
            e.points.push(Point {
                x: tx,
                y: ty - main_extent / 2.0,
            });
        }
    }

    if label.rankdir == RankDir::LR {
        swap_xy(g);
    }
}

fn layer_span(count: usize, extent: f64, sep: f64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    count as f64 * extent + (count - 1) as f64 * sep
}

fn center(g: &Graph<NodeLabel, EdgeLabel, GraphLabel>, id: &str) -> Option<(f64, f64)> {
    let n = g.node(id)?;
    Some((n.x?, n.y?))
}

fn swap_xy(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>) {
    for id in g.node_ids() {
        if let Some(n) = g.node_mut(&id) {
            if let (Some(x), Some(y)) = (n.x, n.y) {
                n.x = Some(y);
                n.y = Some(x);
            }
        }
    }
    for key in g.edge_keys() {
        if let Some(e) = g.edge_mut_by_key(&key) {
            for p in &mut e.points {
                (p.x, p.y) = (p.y, p.x);
            }
        }
    }
}
