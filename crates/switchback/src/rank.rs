//! Longest-path rank assignment.

use crate::graph::Graph;
use crate::{EdgeLabel, GraphLabel, NodeLabel};
use rustc_hash::FxHashMap;

/// Assigns `NodeLabel::rank` to every node.
///
/// Ranks are longest-path distances from the in-degree-zero sources, visited
/// in node insertion order with out-edges relaxed in edge insertion order.
/// An edge whose head is already on the active traversal path is skipped,
/// which terminates cycles without reversing or dropping anything from the
/// graph itself. Nodes left unranked after the source pass (members of cycles
/// no source reaches) are seeded at rank 0, again in insertion order.
pub fn rank(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>) {
    let ids = g.node_ids();
    let index: FxHashMap<&str, usize> = ids
        .iter()
        .enumerate()
        .map(|(i, id)| (id.as_str(), i))
        .collect();

    // (head, minlen) per tail, in edge insertion order.
    let mut adj: Vec<Vec<(usize, i32)>> = vec![Vec::new(); ids.len()];
    for key in g.edge_keys() {
        let (Some(&v), Some(&w)) = (index.get(key.v.as_str()), index.get(key.w.as_str())) else {
            continue;
        };
        let minlen = g.edge_by_key(&key).map(|e| e.minlen).unwrap_or(1).max(1) as i32;
        adj[v].push((w, minlen));
    }

    let mut ranks: Vec<Option<i32>> = vec![None; ids.len()];
    let mut on_path: Vec<bool> = vec![false; ids.len()];

    let sources: Vec<usize> = g
        .sources()
        .into_iter()
        .filter_map(|id| index.get(id).copied())
        .collect();
    for s in sources {
        visit(&adj, s, 0, &mut ranks, &mut on_path);
    }
    for v in 0..ids.len() {
        if ranks[v].is_none() {
            visit(&adj, v, 0, &mut ranks, &mut on_path);
        }
    }

    for (i, id) in ids.iter().enumerate() {
        if let Some(label) = g.node_mut(id) {
            label.rank = ranks[i];
        }
    }
}

fn visit(
    adj: &[Vec<(usize, i32)>],
    v: usize,
    r: i32,
    ranks: &mut [Option<i32>],
    on_path: &mut [bool],
) {
    if ranks[v].is_some_and(|cur| cur >= r) {
        return;
    }
    ranks[v] = Some(r);
    on_path[v] = true;
    for &(w, minlen) in &adj[v] {
        if on_path[w] {
            continue;
        }
        visit(adj, w, r + minlen, ranks, on_path);
    }
    on_path[v] = false;
}
