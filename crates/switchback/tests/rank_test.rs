use switchback::graph::{Graph, GraphOptions};
use switchback::rank;
use switchback::{EdgeLabel, GraphLabel, NodeLabel};

fn graph() -> Graph<NodeLabel, EdgeLabel, GraphLabel> {
    let mut g: Graph<NodeLabel, EdgeLabel, GraphLabel> = Graph::new(GraphOptions::default());
    g.set_graph(GraphLabel::default());
    g.set_default_node_label(NodeLabel::default);
    g.set_default_edge_label(EdgeLabel::default);
    g
}

fn rank_of(g: &Graph<NodeLabel, EdgeLabel, GraphLabel>, id: &str) -> i32 {
    g.node(id)
        .unwrap_or_else(|| panic!("node {id} missing"))
        .rank
        .unwrap_or_else(|| panic!("node {id} has no rank"))
}

#[test]
fn chain_is_ranked_consecutively() {
    let mut g = graph();
    g.set_path(&["a", "b", "c"]);
    rank::rank(&mut g);

    assert_eq!(rank_of(&g, "a"), 0);
    assert_eq!(rank_of(&g, "b"), 1);
    assert_eq!(rank_of(&g, "c"), 2);
}

#[test]
fn longest_path_wins_over_a_shortcut() {
    let mut g = graph();
    g.set_path(&["a", "b", "d"]);
    g.set_edge("a", "d");
    rank::rank(&mut g);

    assert_eq!(rank_of(&g, "d"), 2);
}

#[test]
fn minlen_stretches_an_edge() {
    let mut g = graph();
    g.set_edge_with_label(
        "a",
        "b",
        EdgeLabel {
            minlen: 2,
            ..Default::default()
        },
    );
    rank::rank(&mut g);

    assert_eq!(rank_of(&g, "a"), 0);
    assert_eq!(rank_of(&g, "b"), 2);
}

#[test]
fn every_edge_spans_at_least_its_minlen_in_acyclic_graphs() {
    let mut g = graph();
    g.set_path(&["a", "b", "c", "f"]);
    g.set_path(&["a", "d", "e", "f"]);
    g.set_edge("b", "e");
    rank::rank(&mut g);

    for e in g.edge_keys() {
        let minlen = g.edge_by_key(&e).unwrap().minlen as i32;
        assert!(
            rank_of(&g, &e.w) - rank_of(&g, &e.v) >= minlen,
            "edge {} -> {} violates minlen {}",
            e.v,
            e.w,
            minlen
        );
    }
}

#[test]
fn two_node_cycle_terminates() {
    let mut g = graph();
    g.set_edge("a", "b");
    g.set_edge("b", "a");
    rank::rank(&mut g);

    assert_eq!(rank_of(&g, "a"), 0);
    assert_eq!(rank_of(&g, "b"), 1);
}

#[test]
fn reranking_is_stable() {
    let mut g = graph();
    g.set_edge("a", "b");
    g.set_edge("b", "a");
    rank::rank(&mut g);
    let first: Vec<i32> = g.node_ids().iter().map(|id| rank_of(&g, id)).collect();

    rank::rank(&mut g);
    let second: Vec<i32> = g.node_ids().iter().map(|id| rank_of(&g, id)).collect();

    assert_eq!(first, second);
}

#[test]
fn cycle_entered_from_a_source_ranks_past_the_entry() {
    let mut g = graph();
    g.set_edge("entry", "a");
    g.set_edge("a", "b");
    g.set_edge("b", "a");
    rank::rank(&mut g);

    assert_eq!(rank_of(&g, "entry"), 0);
    assert_eq!(rank_of(&g, "a"), 1);
    assert_eq!(rank_of(&g, "b"), 2);
}

#[test]
fn pure_cycle_seeds_from_the_first_inserted_node() {
    let mut g = graph();
    g.set_path(&["a", "b", "c"]);
    g.set_edge("c", "a");
    rank::rank(&mut g);

    assert_eq!(rank_of(&g, "a"), 0);
    assert_eq!(rank_of(&g, "b"), 1);
    assert_eq!(rank_of(&g, "c"), 2);
}

#[test]
fn cycle_unreachable_from_any_source_still_gets_ranks() {
    let mut g = graph();
    g.set_edge("s", "x");
    g.set_edge("c1", "c2");
    g.set_edge("c2", "c1");
    rank::rank(&mut g);

    assert_eq!(rank_of(&g, "s"), 0);
    assert_eq!(rank_of(&g, "x"), 1);
    assert_eq!(rank_of(&g, "c1"), 0);
    assert_eq!(rank_of(&g, "c2"), 1);
}

#[test]
fn isolated_node_is_a_rank_zero_source() {
    let mut g = graph();
    g.set_node("alone", NodeLabel::default());
    g.set_path(&["a", "b"]);
    rank::rank(&mut g);

    assert_eq!(rank_of(&g, "alone"), 0);
    assert_eq!(rank_of(&g, "a"), 0);
    assert_eq!(rank_of(&g, "b"), 1);
}

#[test]
fn self_loop_does_not_raise_ranks() {
    let mut g = graph();
    g.set_edge("a", "a");
    g.set_edge("a", "b");
    rank::rank(&mut g);

    assert_eq!(rank_of(&g, "a"), 0);
    assert_eq!(rank_of(&g, "b"), 1);
}
