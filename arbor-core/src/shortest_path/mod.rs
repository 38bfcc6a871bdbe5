//! Single-source shortest paths with Dijkstra's algorithm.
//!
//! The frontier is a binary min-heap of `(distance, vertex)` pairs. Priorities
//! are never decreased in place: an improved distance pushes a fresh entry and
//! outdated entries are discarded when popped.
//!
//! Path costs that would reach [`UNREACHABLE`] are never stored. When such a
//! cost is the only way to reach a vertex the query fails with
//! [`GraphError::PathCostOverflow`] instead of reporting the vertex as
//! unreachable.

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, VecDeque},
};

use tracing::{debug, instrument};

use crate::{
    error::{GraphError, Result},
    graph::WeightedGraph,
};

/// Distance reported for vertices that cannot be reached from the source.
pub const UNREACHABLE: u64 = u64::MAX;

type Frontier = BinaryHeap<Reverse<(u64, usize)>>;

fn overflow_error(vertex: usize) -> GraphError {
    debug!(vertex, reason = "overflow", "shortest path cost exceeds distance range");
    GraphError::PathCostOverflow { vertex }
}

/// Per-call bookkeeping shared by both Dijkstra variants.
struct Search<'g> {
    graph: &'g WeightedGraph,
    distance: Vec<u64>,
    finalised: Vec<bool>,
    frontier: Frontier,
    overflowed: bool,
    stale_pops: usize,
    relaxations: usize,
}

impl<'g> Search<'g> {
    fn new(graph: &'g WeightedGraph, start: usize) -> Self {
        let mut distance = vec![UNREACHABLE; graph.vertex_count()];
        distance[start] = 0;
        let mut frontier = BinaryHeap::new();
        frontier.push(Reverse((0, start)));
        Self {
            graph,
            distance,
            finalised: vec![false; graph.vertex_count()],
            frontier,
            overflowed: false,
            stale_pops: 0,
            relaxations: 0,
        }
    }

    /// Pops the next vertex whose distance is final, skipping stale entries.
    fn settle_next(&mut self) -> Option<(usize, u64)> {
        while let Some(Reverse((dist, vertex))) = self.frontier.pop() {
            if self.finalised[vertex] || dist > self.distance[vertex] {
                self.stale_pops += 1;
                continue;
            }
            self.finalised[vertex] = true;
            return Some((vertex, dist));
        }
        None
    }

    fn relax_from(&mut self, vertex: usize, dist: u64) {
        for &(next, weight) in &self.graph.adjacency()[vertex] {
            let Some(candidate) = dist.checked_add(weight).filter(|&cost| cost < UNREACHABLE)
            else {
                self.overflowed = true;
                continue;
            };
            if candidate < self.distance[next] {
                self.distance[next] = candidate;
                self.frontier.push(Reverse((candidate, next)));
                self.relaxations += 1;
            }
        }
    }

    /// Marks the vertices `start` reaches that were never settled.
    ///
    /// Once the frontier is exhausted every marked vertex was only offered
    /// path costs that overflowed. Nothing is marked when no relaxation
    /// overflowed.
    fn overflowed_vertices(&self, start: usize) -> Vec<bool> {
        let mut reached = vec![false; self.graph.vertex_count()];
        if !self.overflowed {
            return reached;
        }
        reached[start] = true;
        let mut queue = VecDeque::from([start]);
        while let Some(vertex) = queue.pop_front() {
            for &(next, _) in &self.graph.adjacency()[vertex] {
                if !reached[next] {
                    reached[next] = true;
                    queue.push_back(next);
                }
            }
        }
        for (vertex, settled) in self.finalised.iter().enumerate() {
            reached[vertex] &= !settled;
        }
        reached
    }

    fn report(&self, span: &'static str) {
        debug!(
            search = span,
            stale_pops = self.stale_pops,
            relaxations = self.relaxations,
            "dijkstra search finished"
        );
        #[cfg(feature = "metrics")]
        {
            metrics::counter!("dijkstra_stale_pops").increment(self.stale_pops as u64);
            metrics::counter!("dijkstra_relaxations").increment(self.relaxations as u64);
        }
    }
}

impl WeightedGraph {
    /// Computes the shortest distance from `start` to every vertex.
    ///
    /// Unreachable vertices carry [`UNREACHABLE`]. A graph without vertices
    /// yields an empty vector for any `start`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when `start` is not a vertex
    /// of a non-empty graph, and [`GraphError::PathCostOverflow`] when a
    /// reachable vertex's distance would not fit below [`UNREACHABLE`].
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{UNREACHABLE, WeightedGraph};
    ///
    /// let mut graph = WeightedGraph::new(4);
    /// graph.add_edge(0, 1, 4)?;
    /// graph.add_edge(0, 2, 1)?;
    /// graph.add_edge(2, 1, 2)?;
    /// assert_eq!(graph.dijkstra(0)?, vec![0, 3, 1, UNREACHABLE]);
    /// # Ok::<(), arbor_core::GraphError>(())
    /// ```
    #[instrument(
        name = "graph.dijkstra",
        err,
        skip(self),
        fields(vertex_count = self.vertex_count()),
    )]
    pub fn dijkstra(&self, start: usize) -> Result<Vec<u64>> {
        if self.vertex_count() == 0 {
            return Ok(Vec::new());
        }
        self.check_vertex(start)?;

        let mut search = Search::new(self, start);
        while let Some((vertex, dist)) = search.settle_next() {
            search.relax_from(vertex, dist);
        }

        search.report("all");
        if let Some(vertex) = search.overflowed_vertices(start).iter().position(|&hit| hit) {
            return Err(overflow_error(vertex));
        }
        Ok(search.distance)
    }

    /// Computes the shortest distance from `start` to `end`.
    ///
    /// Returns `None` when `end` cannot be reached. The search stops as soon as
    /// `end` is settled, since later pops can only carry larger distances.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either endpoint is not a
    /// vertex of the graph, and [`GraphError::PathCostOverflow`] when `end` is
    /// reachable but its distance would not fit below [`UNREACHABLE`].
    ///
    /// # Examples
    /// ```
    /// use arbor_core::WeightedGraph;
    ///
    /// let mut graph = WeightedGraph::new(3);
    /// graph.add_edge(0, 1, 1)?;
    /// assert_eq!(graph.dijkstra_to(0, 1)?, Some(1));
    /// assert_eq!(graph.dijkstra_to(0, 2)?, None);
    /// # Ok::<(), arbor_core::GraphError>(())
    /// ```
    #[instrument(
        name = "graph.dijkstra_to",
        err,
        skip(self),
        fields(vertex_count = self.vertex_count()),
    )]
    pub fn dijkstra_to(&self, start: usize, end: usize) -> Result<Option<u64>> {
        self.check_vertex(start)?;
        self.check_vertex(end)?;

        let mut search = Search::new(self, start);
        while let Some((vertex, dist)) = search.settle_next() {
            if vertex == end {
                search.report("single");
                return Ok(Some(dist));
            }
            search.relax_from(vertex, dist);
        }

        search.report("single");
        if search.overflowed_vertices(start)[end] {
            return Err(overflow_error(end));
        }
        Ok(None)
    }
}
