//! Builder for constructing a [`WeightedGraph`] from a batch of edges.
//!
//! Edges are queued without validation and checked in insertion order by
//! [`GraphBuilder::build`], which reports the first rejection together with
//! its position.

use tracing::debug;

use crate::{error::GraphBuilderError, graph::WeightedGraph};

/// Configures and constructs [`WeightedGraph`] instances.
///
/// # Examples
/// ```
/// use arbor_core::GraphBuilder;
///
/// let graph = GraphBuilder::new(3)
///     .with_edge(0, 1, 4)
///     .with_edge(1, 2, 1)
///     .with_capacity_hint(2)
///     .build()
///     .expect("edges are valid");
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GraphBuilder {
    vertex_count: usize,
    edges: Vec<(usize, usize, i64)>,
    capacity_hint: Option<usize>,
}

impl GraphBuilder {
    /// Creates a builder for a graph with `vertex_count` vertices and no
    /// edges.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::GraphBuilder;
    ///
    /// let builder = GraphBuilder::new(4);
    /// assert_eq!(builder.vertex_count(), 4);
    /// assert!(builder.pending_edges().is_empty());
    /// ```
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            ..Self::default()
        }
    }

    /// Queues the undirected edge `(from, to)` with `weight`.
    #[must_use]
    pub fn with_edge(mut self, from: usize, to: usize, weight: i64) -> Self {
        self.edges.push((from, to, weight));
        self
    }

    /// Queues every `(from, to, weight)` triple yielded by `edges`.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::GraphBuilder;
    ///
    /// let builder = GraphBuilder::new(3).with_edges([(0, 1, 1), (1, 2, 2)]);
    /// assert_eq!(builder.pending_edges(), &[(0, 1, 1), (1, 2, 2)]);
    /// ```
    #[must_use]
    pub fn with_edges<I>(mut self, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, i64)>,
    {
        self.edges.extend(edges);
        self
    }

    /// Reserves `per_vertex` adjacency slots for every vertex when the graph
    /// is built.
    #[must_use]
    pub fn with_capacity_hint(mut self, per_vertex: usize) -> Self {
        self.capacity_hint = Some(per_vertex);
        self
    }

    /// Returns the configured number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the queued edges in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn pending_edges(&self) -> &[(usize, usize, i64)] { &self.edges }

    /// Validates the queued edges and constructs the graph.
    ///
    /// # Errors
    /// Returns [`GraphBuilderError::InvalidEdge`] for the first edge that
    /// [`WeightedGraph::add_edge`] rejects.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{GraphBuilder, GraphBuilderError, GraphError};
    ///
    /// let err = GraphBuilder::new(2)
    ///     .with_edge(0, 1, 3)
    ///     .with_edge(1, 0, -1)
    ///     .build()
    ///     .unwrap_err();
    /// assert!(matches!(
    ///     err,
    ///     GraphBuilderError::InvalidEdge {
    ///         index: 1,
    ///         error: GraphError::NegativeWeight { .. },
    ///     }
    /// ));
    /// ```
    pub fn build(self) -> Result<WeightedGraph, GraphBuilderError> {
        let mut graph = match self.capacity_hint {
            Some(per_vertex) => WeightedGraph::with_capacity(self.vertex_count, per_vertex),
            None => WeightedGraph::new(self.vertex_count),
        };

        for (index, &(from, to, weight)) in self.edges.iter().enumerate() {
            graph
                .add_edge(from, to, weight)
                .map_err(|error| GraphBuilderError::InvalidEdge { index, error })?;
        }

        debug!(
            vertex_count = graph.vertex_count(),
            edge_count = graph.edge_count(),
            "graph built"
        );
        Ok(graph)
    }
}
