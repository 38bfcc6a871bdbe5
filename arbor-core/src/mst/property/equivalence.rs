//! Agreement between Kruskal, Prim, and the sequential oracle.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use super::oracle::sequential_kruskal;
use super::types::MstFixture;

/// Checks that both builders find a tree exactly when the oracle's forest
/// has one component, and that all three agree on its weight.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let oracle = sequential_kruskal(fixture.vertex_count, &fixture.edges);
    let kruskal = graph.kruskal_mst();
    let prim = graph.prim_mst();

    if oracle.component_count != 1 {
        if kruskal.is_empty() && prim.is_empty() {
            return Ok(());
        }
        return Err(TestCaseError::fail(format!(
            "oracle found {} components but kruskal={} prim={} edges ({})",
            oracle.component_count,
            kruskal.len(),
            prim.len(),
            fixture.describe()
        )));
    }

    for (builder, tree) in [("kruskal", &kruskal), ("prim", &prim)] {
        if tree.len() != oracle.edge_count || tree.total_weight() != oracle.total_weight {
            return Err(TestCaseError::fail(format!(
                "{builder}: {} edges weighing {}, oracle: {} edges weighing {} ({})",
                tree.len(),
                tree.total_weight(),
                oracle.edge_count,
                oracle.total_weight,
                fixture.describe()
            )));
        }
    }
    Ok(())
}
