//! Undirected weighted graph stored as adjacency lists.
//!
//! Vertices are the indices `0..vertex_count`, fixed at construction. Edges
//! are only ever appended; the query algorithms in [`crate::shortest_path`]
//! and [`crate::mst`] borrow the graph immutably and keep their working state
//! local to each call.

use tracing::trace;

use crate::error::{GraphError, Result};

/// An adjacency entry: the neighbouring vertex and the connecting weight.
pub type Neighbour = (usize, u64);

/// Undirected graph with non-negative integer edge weights.
///
/// Every accepted edge `(u, v, w)` is recorded twice, as `(v, w)` under `u`
/// and `(u, w)` under `v`. A self-loop therefore appears twice in its
/// vertex's list.
///
/// # Examples
/// ```
/// use arbor_core::WeightedGraph;
///
/// let mut graph = WeightedGraph::new(3);
/// graph.add_edge(0, 1, 4)?;
/// graph.add_edge(1, 2, 1)?;
/// assert_eq!(graph.neighbours(1)?, &[(0, 4), (2, 1)]);
/// assert_eq!(graph.edge_count(), 2);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeightedGraph {
    adjacency: Vec<Vec<Neighbour>>,
    edge_count: usize,
}

impl WeightedGraph {
    /// Creates a graph with `vertex_count` isolated vertices.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Creates a graph whose adjacency lists reserve `per_vertex` entries up
    /// front.
    #[must_use]
    pub(crate) fn with_capacity(vertex_count: usize, per_vertex: usize) -> Self {
        Self {
            adjacency: (0..vertex_count)
                .map(|_| Vec::with_capacity(per_vertex))
                .collect(),
            edge_count: 0,
        }
    }

    /// Builds a graph from `(from, to, weight)` triples, stopping at the first
    /// invalid edge.
    ///
    /// # Errors
    /// Returns [`crate::GraphBuilderError::InvalidEdge`] describing the first
    /// rejected edge.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::WeightedGraph;
    ///
    /// let graph = WeightedGraph::from_edges(3, [(0, 1, 2), (1, 2, 3)])?;
    /// assert_eq!(graph.dijkstra(0)?, vec![0, 2, 5]);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_edges<I>(
        vertex_count: usize,
        edges: I,
    ) -> core::result::Result<Self, crate::GraphBuilderError>
    where
        I: IntoIterator<Item = (usize, usize, i64)>,
    {
        crate::GraphBuilder::new(vertex_count)
            .with_edges(edges)
            .build()
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.adjacency.len() }

    /// Returns the number of edges accepted by [`Self::add_edge`].
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edge_count }

    /// Returns the full adjacency structure, indexed by vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn adjacency(&self) -> &[Vec<Neighbour>] { &self.adjacency }

    /// Returns the adjacency entries of `vertex` in insertion order.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for an unknown vertex.
    pub fn neighbours(&self, vertex: usize) -> Result<&[Neighbour]> {
        self.check_vertex(vertex)?;
        Ok(&self.adjacency[vertex])
    }

    /// Adds the undirected edge `(from, to)` with the given weight.
    ///
    /// Both endpoints and the weight are validated before anything is
    /// written, so a rejected edge leaves the graph untouched.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either endpoint is not a
    /// vertex of the graph, and [`GraphError::NegativeWeight`] when `weight`
    /// is negative.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: i64) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        let Ok(weight) = u64::try_from(weight) else {
            trace!(from, to, weight, "rejecting negative edge weight");
            return Err(GraphError::NegativeWeight { from, to, weight });
        };

        self.adjacency[from].push((to, weight));
        self.adjacency[to].push((from, weight));
        self.edge_count += 1;
        Ok(())
    }

    pub(crate) fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            trace!(
                vertex,
                vertex_count = self.vertex_count(),
                "vertex out of range"
            );
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }
}
