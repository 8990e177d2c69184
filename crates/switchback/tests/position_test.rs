use switchback::graph::{Graph, GraphOptions};
use switchback::{EdgeLabel, GraphLabel, NodeLabel, RankDir, layout};

fn graph_with(label: GraphLabel) -> Graph<NodeLabel, EdgeLabel, GraphLabel> {
    let mut g: Graph<NodeLabel, EdgeLabel, GraphLabel> = Graph::new(GraphOptions::default());
    g.set_graph(label);
    g.set_default_node_label(NodeLabel::default);
    g.set_default_edge_label(EdgeLabel::default);
    g
}

fn center(g: &Graph<NodeLabel, EdgeLabel, GraphLabel>, id: &str) -> (f64, f64) {
    let n = g.node(id).unwrap_or_else(|| panic!("node {id} missing"));
    (n.x.expect("x assigned"), n.y.expect("y assigned"))
}

#[test]
fn tb_stacks_ranks_vertically() {
    let mut g = graph_with(GraphLabel::default());
    g.set_path(&["a", "b"]);
    layout(&mut g);

    // 200x60 nodes with a 50 rank gap: centers sit at 30 and 30 + 60 + 50.
    assert_eq!(center(&g, "a"), (100.0, 30.0));
    assert_eq!(center(&g, "b"), (100.0, 140.0));
}

#[test]
fn ranks_center_against_the_widest_layer() {
    let mut g = graph_with(GraphLabel::default());
    g.set_edge("a", "b");
    g.set_edge("a", "c");
    layout(&mut g);

    // The two-node rank spans 450; the lone parent centers over it.
    assert_eq!(center(&g, "a"), (225.0, 30.0));
    assert_eq!(center(&g, "b"), (100.0, 140.0));
    assert_eq!(center(&g, "c"), (350.0, 140.0));
}

#[test]
fn edge_points_attach_bottom_center_to_top_center() {
    let mut g = graph_with(GraphLabel::default());
    g.set_edge("a", "b");
    g.set_edge("a", "c");
    layout(&mut g);

    let points = &g.edge("a", "b", None).unwrap().points;
    assert_eq!(points.len(), 2);
    assert_eq!((points[0].x, points[0].y), (225.0, 60.0));
    assert_eq!((points[1].x, points[1].y), (100.0, 110.0));
}

#[test]
fn lr_swaps_the_axes() {
    let mut g = graph_with(GraphLabel {
        rankdir: RankDir::LR,
        ..Default::default()
    });
    g.set_path(&["a", "b"]);
    layout(&mut g);

    // Ranks advance horizontally: 100, then 100 + 200 + 50 + 100.
    assert_eq!(center(&g, "a"), (100.0, 30.0));
    assert_eq!(center(&g, "b"), (350.0, 30.0));

    let points = &g.edge("a", "b", None).unwrap().points;
    assert_eq!((points[0].x, points[0].y), (200.0, 30.0));
    assert_eq!((points[1].x, points[1].y), (250.0, 30.0));
}

#[test]
fn custom_extents_and_gaps_flow_through() {
    let mut g = graph_with(GraphLabel {
        node_width: 100.0,
        node_height: 40.0,
        nodesep: 10.0,
        ranksep: 20.0,
        ..Default::default()
    });
    g.set_path(&["a", "b"]);
    g.set_edge("a", "c");
    layout(&mut g);

    // Rank 1 spans 100 + 10 + 100 = 210; rank 0 centers against it.
    assert_eq!(center(&g, "a"), (105.0, 20.0));
    assert_eq!(center(&g, "b"), (50.0, 80.0));
    assert_eq!(center(&g, "c"), (160.0, 80.0));
}

#[test]
fn repositioning_replaces_stale_edge_points() {
    let mut g = graph_with(GraphLabel::default());
    g.set_path(&["a", "b"]);
    layout(&mut g);
    let first = g.edge("a", "b", None).unwrap().points.clone();

    layout(&mut g);
    let second = &g.edge("a", "b", None).unwrap().points;

    assert_eq!(&first, second);
    assert_eq!(second.len(), 2);
}
