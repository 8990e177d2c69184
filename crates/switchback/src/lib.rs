//! Layered layout for roadmap-style directed graphs.
//!
//! The pipeline is deliberately small: longest-path ranking, insertion-order
//! in-rank ordering, and centered coordinate assignment with uniform node
//! extents. Every pass reports nodes in insertion order, so the output is a
//! pure function of the input graph and its [`GraphLabel`] configuration.

pub use switchback_graph as graph;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod order;
pub mod position;
pub mod rank;
pub mod util;

use graph::Graph;
use serde::{Deserialize, Serialize};

/// Direction the ranks advance in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RankDir {
    /// Top to bottom; nodes within a rank spread horizontally.
    #[default]
    TB,
    /// Left to right; nodes within a rank spread vertically.
    LR,
}

/// Layout configuration, stored as the graph label.
#[derive(Debug, Clone)]
pub struct GraphLabel {
    pub rankdir: RankDir,
    /// Uniform node extent along the horizontal axis.
    pub node_width: f64,
    /// Uniform node extent along the vertical axis.
    pub node_height: f64,
    /// Gap between neighbouring nodes within a rank.
    pub nodesep: f64,
    /// Gap between consecutive ranks.
    pub ranksep: f64,
}

impl Default for GraphLabel {
    fn default() -> Self {
        Self {
            rankdir: RankDir::TB,
            node_width: 200.0,
            node_height: 60.0,
            nodesep: 50.0,
            ranksep: 50.0,
        }
    }
}

/// Per-node layout state. `x`/`y` are center coordinates, filled in by
/// [`position::position`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeLabel {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub rank: Option<i32>,
    pub order: Option<usize>,
}

/// Per-edge layout state.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeLabel {
    /// Minimum number of ranks the edge must span.
    pub minlen: usize,
    /// Attachment points, tail first.
    pub points: Vec<Point>,
}

impl Default for EdgeLabel {
    fn default() -> Self {
        Self {
            minlen: 1,
            points: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Runs the full pipeline in place: rank, order, position.
pub fn layout(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>) {
    rank::rank(g);
    order::order(g);
    position::position(g);
}
