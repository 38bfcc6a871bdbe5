use arbor_core::{DirectedGraph, WeightedGraph};

/// Five-vertex graph whose shortest distances from 0 are `[0, 3, 1, 4, 7]`.
#[must_use]
pub fn five_vertex_graph() -> WeightedGraph {
    WeightedGraph::from_edges(
        5,
        [(0, 1, 4), (0, 2, 1), (1, 3, 1), (2, 1, 2), (2, 3, 5), (3, 4, 3)],
    )
    .expect("fixture edges are valid")
}

/// Four-vertex graph whose minimum spanning tree weighs 19.
#[must_use]
pub fn square_graph() -> WeightedGraph {
    WeightedGraph::from_edges(
        4,
        [(0, 1, 10), (0, 2, 6), (0, 3, 5), (1, 3, 15), (2, 3, 4)],
    )
    .expect("fixture edges are valid")
}

/// Two components: `{0, 1}` and `{2, 3}`, plus isolated vertex 4.
#[must_use]
pub fn split_graph() -> WeightedGraph {
    WeightedGraph::from_edges(5, [(0, 1, 1), (2, 3, 2)]).expect("fixture edges are valid")
}

/// Diamond-shaped DAG `0 -> {1, 2} -> 3 -> 4`.
#[must_use]
pub fn diamond_dag() -> DirectedGraph {
    let mut graph = DirectedGraph::new(5);
    for (from, to) in [(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)] {
        graph.add_edge(from, to).expect("fixture edges are valid");
    }
    graph
}
