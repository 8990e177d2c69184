//! Projection of a [`RoadmapGraph`] onto the switchback layout engine.
//!
//! The output model is renderer-facing: plain positioned rectangles and
//! polylines, serializable as-is for a web embedder.

use serde::{Deserialize, Serialize};
use switchback::graph::{Graph, GraphOptions};
use switchback::{EdgeLabel, GraphLabel, NodeLabel, Point, RankDir};
use trailhead_core::RoadmapGraph;

/// A positioned roadmap, ready for rendering.
///
/// Node coordinates are center points on an unbounded plane; `bounds` is the
/// tight box around every node rectangle and edge point, `None` when the
/// roadmap is empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutGraph {
    pub rankdir: RankDir,
    pub nodes: Vec<LayoutNode>,
    pub edges: Vec<LayoutEdge>,
    pub bounds: Option<Bounds>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutNode {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Layer index assigned by ranking, 0 for roots.
    pub rank: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutEdge {
    pub id: String,
    pub from: String,
    pub to: String,
    /// Attachment points, tail first.
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        let mut it = points.into_iter();
        let (x0, y0) = it.next()?;
        let mut b = Self {
            min_x: x0,
            min_y: y0,
            max_x: x0,
            max_y: y0,
        };
        for (x, y) in it {
            b.min_x = b.min_x.min(x);
            b.min_y = b.min_y.min(y);
            b.max_x = b.max_x.max(x);
            b.max_y = b.max_y.max(y);
        }
        Some(b)
    }
}

/// Positions `graph` and returns the renderer-facing model.
///
/// Every call builds a fresh layout graph, so repeated and concurrent calls
/// cannot observe each other's state. Nodes and edges come back in document
/// order; dropped edges never reach the layout.
pub fn layout(graph: &RoadmapGraph, direction: RankDir) -> LayoutGraph {
    let mut g: Graph<NodeLabel, EdgeLabel, GraphLabel> =
        Graph::new(GraphOptions { multigraph: true });
    g.set_graph(GraphLabel {
        rankdir: direction,
        ..GraphLabel::default()
    });

    for node in graph.nodes() {
        g.set_node(node.id.as_str(), NodeLabel::default());
    }
    for edge in graph.edges() {
        g.set_edge_named(
            edge.source.as_str(),
            edge.target.as_str(),
            Some(edge.id.as_str()),
            Some(EdgeLabel::default()),
        );
    }

    switchback::layout(&mut g);

    let config = g.graph().clone();
    let nodes: Vec<LayoutNode> = graph
        .nodes()
        .iter()
        .map(|node| {
            let placed = g.node(&node.id).cloned().unwrap_or_default();
            LayoutNode {
                id: node.id.clone(),
                x: placed.x.unwrap_or(0.0),
                y: placed.y.unwrap_or(0.0),
                width: config.node_width,
                height: config.node_height,
                rank: placed.rank.unwrap_or(0),
            }
        })
        .collect();

    let edges: Vec<LayoutEdge> = graph
        .edges()
        .iter()
        .map(|edge| {
            let points = g
                .edge(&edge.source, &edge.target, Some(edge.id.as_str()))
                .map(|label| label.points.clone())
                .unwrap_or_default();
            LayoutEdge {
                id: edge.id.clone(),
                from: edge.source.clone(),
                to: edge.target.clone(),
                points,
            }
        })
        .collect();

    let bounds = Bounds::from_points(
        nodes
            .iter()
            .flat_map(|n| {
                [
                    (n.x - n.width / 2.0, n.y - n.height / 2.0),
                    (n.x + n.width / 2.0, n.y + n.height / 2.0),
                ]
            })
            .chain(
                edges
                    .iter()
                    .flat_map(|e| e.points.iter().map(|p| (p.x, p.y))),
            ),
    );

    LayoutGraph {
        rankdir: direction,
        nodes,
        edges,
        bounds,
    }
}
