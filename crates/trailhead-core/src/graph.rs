//! Roadmap document -> validated directed graph.

use crate::model::{EdgeSpec, NodeSpec, RoadmapDocument};
use indexmap::IndexMap;

/// The authoritative graph view of a document: nodes in document order, an
/// id lookup, and only those edges whose endpoints both resolve.
#[derive(Debug, Clone)]
pub struct RoadmapGraph {
    nodes: Vec<NodeSpec>,
    index: IndexMap<String, usize>,
    edges: Vec<EdgeSpec>,
    /// Outgoing neighbor indices per node, in edge document order.
    adjacency: Vec<Vec<usize>>,
    dropped_edges: Vec<EdgeSpec>,
}

/// Builds the graph, enforcing referential integrity.
///
/// An edge whose source or target is not a node id is recorded in
/// [`RoadmapGraph::dropped_edges`] and logged, never an error: documents
/// assembled outside the sanitizer get the same guarantee sanitized ones do.
pub fn build(doc: &RoadmapDocument) -> RoadmapGraph {
    let nodes = doc.nodes.clone();
    let index: IndexMap<String, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.id.clone(), i))
        .collect();

    let mut edges = Vec::with_capacity(doc.edges.len());
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
    let mut dropped_edges = Vec::new();

    for edge in &doc.edges {
        let (Some(&source), Some(&target)) = (index.get(&edge.source), index.get(&edge.target))
        else {
            tracing::warn!(
                "Dropping edge {} ({:?} -> {:?}): endpoint is not a node in this document",
                edge.id,
                edge.source,
                edge.target
            );
            dropped_edges.push(edge.clone());
            continue;
        };
        adjacency[source].push(target);
        edges.push(edge.clone());
    }

    RoadmapGraph {
        nodes,
        index,
        edges,
        adjacency,
        dropped_edges,
    }
}

impl RoadmapGraph {
    /// Nodes in document order.
    pub fn nodes(&self) -> &[NodeSpec] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Edges that survived validation, in document order.
    pub fn edges(&self) -> &[EdgeSpec] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges removed for referencing ids outside the document.
    pub fn dropped_edges(&self) -> &[EdgeSpec] {
        &self.dropped_edges
    }

    pub fn node_index(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn node_by_id(&self, id: &str) -> Option<&NodeSpec> {
        self.node_index(id).map(|i| &self.nodes[i])
    }

    /// Outgoing neighbor indices of the node at `index`, in edge document
    /// order.
    pub fn out_neighbors(&self, index: usize) -> &[usize] {
        self.adjacency.get(index).map(Vec::as_slice).unwrap_or(&[])
    }
}
