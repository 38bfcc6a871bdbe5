//! Minimum spanning tree construction.
//!
//! Two independent greedy builders share the adjacency model of
//! [`WeightedGraph`]: Kruskal's algorithm over a stable weight-sorted edge
//! list with a call-scoped [`DisjointSet`], and Prim's algorithm growing a
//! tree from vertex 0 with a lazily pruned min-heap. Both return an empty
//! [`SpanningTree`] when the graph cannot be spanned.

use std::{cmp::Reverse, collections::BinaryHeap};

use tracing::{debug, error, instrument};

use crate::{disjoint_set::DisjointSet, error::DisjointSetError, graph::WeightedGraph};

/// A single tree edge.
///
/// Kruskal reports edges as discovered by the `source < target` adjacency
/// scan. Prim reports `(parent, child)` in the order vertices join the tree.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: u64,
}

impl Edge {
    /// Creates an edge.
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: u64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> u64 { self.weight }
}

/// Edges of a minimum spanning tree.
///
/// Empty when no spanning tree exists, and also for graphs with fewer than
/// two vertices, whose spanning tree has no edges.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SpanningTree {
    edges: Vec<Edge>,
}

impl SpanningTree {
    /// Returns the tree edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Consumes the tree and returns its edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn into_edges(self) -> Vec<Edge> { self.edges }

    /// Returns the number of edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.edges.len() }

    /// Returns `true` when the tree holds no edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.edges.is_empty() }

    /// Sums the edge weights, saturating at `u64::MAX`.
    #[must_use]
    pub fn total_weight(&self) -> u64 {
        self.edges
            .iter()
            .fold(0_u64, |total, edge| total.saturating_add(edge.weight))
    }

    /// Returns `true` when the tree has exactly `vertex_count - 1` edges.
    #[must_use]
    pub fn is_spanning(&self, vertex_count: usize) -> bool {
        vertex_count > 0 && self.edges.len() == vertex_count - 1
    }

    /// Keeps `edges` only when they span `vertex_count` vertices.
    fn complete_or_empty(edges: Vec<Edge>, vertex_count: usize, builder: &'static str) -> Self {
        let tree = Self { edges };
        if tree.is_spanning(vertex_count) {
            debug!(
                builder,
                edges = tree.len(),
                total_weight = tree.total_weight(),
                "spanning tree built"
            );
            return tree;
        }

        debug!(
            builder,
            accepted = tree.len(),
            required = vertex_count.saturating_sub(1),
            reason = "disconnected",
            "discarding partial spanning tree"
        );
        #[cfg(feature = "metrics")]
        metrics::counter!("mst_discarded_partial_trees").increment(1);
        Self::default()
    }
}

impl WeightedGraph {
    /// Collects every edge once, in `source < target` adjacency scan order.
    fn scan_edges(&self) -> Vec<Edge> {
        self.adjacency()
            .iter()
            .enumerate()
            .flat_map(|(source, neighbours)| {
                neighbours
                    .iter()
                    .filter(move |&&(target, _)| source < target)
                    .map(move |&(target, weight)| Edge::new(source, target, weight))
            })
            .collect()
    }

    /// Builds a minimum spanning tree with Kruskal's algorithm.
    ///
    /// Edges are stably sorted by weight, so ties resolve in the order they
    /// appear when scanning vertices `0..n`. The result is empty when the
    /// graph is disconnected.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::WeightedGraph;
    ///
    /// let graph = WeightedGraph::from_edges(
    ///     4,
    ///     [(0, 1, 10), (0, 2, 6), (0, 3, 5), (1, 3, 15), (2, 3, 4)],
    /// )?;
    /// let tree = graph.kruskal_mst();
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.total_weight(), 19);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    #[instrument(
        name = "graph.kruskal_mst",
        skip(self),
        fields(vertex_count = self.vertex_count(), edge_count = self.edge_count()),
    )]
    pub fn kruskal_mst(&self) -> SpanningTree {
        if self.vertex_count() == 0 {
            return SpanningTree::default();
        }
        let mut candidates = self.scan_edges();
        candidates.sort_by_key(Edge::weight);
        match select_forest_edges(self.vertex_count(), candidates) {
            Ok(edges) => SpanningTree::complete_or_empty(edges, self.vertex_count(), "kruskal"),
            Err(err) => {
                // Scanned endpoints always lie inside the graph.
                error!(error = %err, "kruskal scanned an endpoint outside the graph");
                SpanningTree::default()
            }
        }
    }

    /// Builds a minimum spanning tree with Prim's algorithm, growing from
    /// vertex 0.
    ///
    /// When vertex 0 cannot reach every vertex the partial tree is discarded
    /// and the result is empty.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Edge, WeightedGraph};
    ///
    /// let graph = WeightedGraph::from_edges(3, [(0, 1, 2), (1, 2, 1), (0, 2, 5)])?;
    /// let tree = graph.prim_mst();
    /// assert_eq!(tree.edges(), &[Edge::new(0, 1, 2), Edge::new(1, 2, 1)]);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    #[instrument(
        name = "graph.prim_mst",
        skip(self),
        fields(vertex_count = self.vertex_count(), edge_count = self.edge_count()),
    )]
    pub fn prim_mst(&self) -> SpanningTree {
        let vertex_count = self.vertex_count();
        if vertex_count == 0 {
            return SpanningTree::default();
        }

        let mut key = vec![u64::MAX; vertex_count];
        let mut parent: Vec<Option<usize>> = vec![None; vertex_count];
        let mut in_tree = vec![false; vertex_count];
        let mut frontier = BinaryHeap::new();
        let mut edges = Vec::with_capacity(vertex_count - 1);

        key[0] = 0;
        frontier.push(Reverse((0_u64, 0_usize)));

        while let Some(Reverse((_, vertex))) = frontier.pop() {
            if in_tree[vertex] {
                continue;
            }
            in_tree[vertex] = true;

            if let Some(from) = parent[vertex] {
                edges.push(Edge::new(from, vertex, key[vertex]));
            }

            for &(next, weight) in &self.adjacency()[vertex] {
                if !in_tree[next] && weight < key[next] {
                    key[next] = weight;
                    parent[next] = Some(vertex);
                    frontier.push(Reverse((weight, next)));
                }
            }
        }

        SpanningTree::complete_or_empty(edges, vertex_count, "prim")
    }
}

/// Accepts weight-ordered `candidates` that join separate components of a
/// `vertex_count`-element forest, stopping after `vertex_count - 1` accepts.
///
/// # Errors
/// Returns [`DisjointSetError::OutOfBounds`] for an endpoint outside the
/// forest.
fn select_forest_edges(
    vertex_count: usize,
    candidates: Vec<Edge>,
) -> Result<Vec<Edge>, DisjointSetError> {
    let required = vertex_count.saturating_sub(1);
    let mut components = DisjointSet::new(vertex_count);
    let mut accepted = Vec::with_capacity(required);
    for edge in candidates {
        if components.union(edge.source, edge.target)? {
            accepted.push(edge);
            if accepted.len() == required {
                break;
            }
        }
    }
    Ok(accepted)
}


#[cfg(test)]
mod property;
