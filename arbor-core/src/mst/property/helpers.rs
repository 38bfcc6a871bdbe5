//! Union-find helpers shared by the MST property modules.

/// Path-halving find over a plain parent array.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Counts connected components of the undirected edge list.
pub(super) fn count_components(vertex_count: usize, edges: &[(usize, usize, i64)]) -> usize {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut components = vertex_count;
    for &(from, to, _) in edges {
        let left = find_root(&mut parent, from);
        let right = find_root(&mut parent, to);
        if left != right {
            parent[right] = left;
            components -= 1;
        }
    }
    components
}
