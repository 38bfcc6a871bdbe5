//! Structural invariants of both spanning tree builders.
//!
//! For connected inputs the tree must have `n - 1` edges, be acyclic, avoid
//! self-loops, and use only edges present in the graph with their stored
//! weight. Disconnected inputs must yield an empty tree.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{SpanningTree, WeightedGraph};

use super::helpers::{count_components, find_root};
use super::types::MstFixture;

/// Runs the structural property against Kruskal and Prim.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let connected = count_components(fixture.vertex_count, &fixture.edges) == 1;

    let kruskal = graph.kruskal_mst();
    validate_tree(fixture, &graph, &kruskal, connected, "kruskal")?;
    for edge in kruskal.edges() {
        if edge.source() >= edge.target() {
            return Err(TestCaseError::fail(format!(
                "kruskal edge {edge:?} is not in scan order ({})",
                fixture.describe()
            )));
        }
    }

    let prim = graph.prim_mst();
    validate_tree(fixture, &graph, &prim, connected, "prim")
}

fn validate_tree(
    fixture: &MstFixture,
    graph: &WeightedGraph,
    tree: &SpanningTree,
    connected: bool,
    builder: &str,
) -> TestCaseResult {
    if !connected {
        if !tree.is_empty() {
            return Err(TestCaseError::fail(format!(
                "{builder} kept {} edges of a disconnected graph ({})",
                tree.len(),
                fixture.describe()
            )));
        }
        return Ok(());
    }

    if !tree.is_spanning(fixture.vertex_count) {
        return Err(TestCaseError::fail(format!(
            "{builder} returned {} edges, expected {} ({})",
            tree.len(),
            fixture.vertex_count - 1,
            fixture.describe()
        )));
    }

    let mut parent: Vec<usize> = (0..fixture.vertex_count).collect();
    for edge in tree.edges() {
        if edge.source() == edge.target() {
            return Err(TestCaseError::fail(format!(
                "{builder} kept self-loop {edge:?} ({})",
                fixture.describe()
            )));
        }
        let present = graph
            .adjacency()
            .get(edge.source())
            .is_some_and(|neighbours| neighbours.contains(&(edge.target(), edge.weight())));
        if !present {
            return Err(TestCaseError::fail(format!(
                "{builder} invented edge {edge:?} ({})",
                fixture.describe()
            )));
        }
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left == right {
            return Err(TestCaseError::fail(format!(
                "{builder} edge {edge:?} closes a cycle ({})",
                fixture.describe()
            )));
        }
        parent[right] = left;
    }
    Ok(())
}
