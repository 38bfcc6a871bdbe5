//! Sequential Kruskal oracle for MST property verification.
//!
//! Uses an unstable sort and union by rank so that it shares no code path
//! with the builders under test. Only totals are compared, since tie order
//! may select different but equally light trees.

use super::helpers::find_root;

/// Minimum spanning forest summary computed by the oracle.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct OracleForest {
    /// Sum of accepted edge weights.
    pub total_weight: u64,
    /// Number of accepted edges.
    pub edge_count: usize,
    /// Number of components left after all merges.
    pub component_count: usize,
}

/// Computes a minimum spanning forest summary with sequential Kruskal.
pub(super) fn sequential_kruskal(vertex_count: usize, edges: &[(usize, usize, i64)]) -> OracleForest {
    let mut sorted: Vec<(u64, usize, usize)> = edges
        .iter()
        .filter(|&&(from, to, _)| from != to)
        .map(|&(from, to, weight)| (weight.unsigned_abs(), from, to))
        .collect();
    sorted.sort_unstable();

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut rank = vec![0_u8; vertex_count];
    let mut forest = OracleForest {
        total_weight: 0,
        edge_count: 0,
        component_count: vertex_count,
    };

    for (weight, from, to) in sorted {
        let left = find_root(&mut parent, from);
        let right = find_root(&mut parent, to);
        if left == right {
            continue;
        }
        let (root, child) = if rank[left] >= rank[right] {
            (left, right)
        } else {
            (right, left)
        };
        parent[child] = root;
        if rank[root] == rank[child] {
            rank[root] += 1;
        }
        forest.total_weight += weight;
        forest.edge_count += 1;
        forest.component_count -= 1;
    }

    forest
}
