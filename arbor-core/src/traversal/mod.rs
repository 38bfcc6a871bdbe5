//! Unweighted directed graphs with breadth-first, depth-first, and
//! topological traversals.
//!
//! Every traversal allocates its own bookkeeping and reports per-vertex
//! results indexed by vertex id, with `None` for vertices the traversal never
//! reached.

use std::collections::VecDeque;

use tracing::{debug, instrument};

use crate::error::{GraphError, Result};

/// Directed graph with unweighted edges stored as successor lists.
///
/// # Examples
/// ```
/// use arbor_core::DirectedGraph;
///
/// let mut graph = DirectedGraph::new(3);
/// graph.add_edge(0, 1)?;
/// graph.add_edge(1, 2)?;
/// assert_eq!(graph.topological_sort(), vec![0, 1, 2]);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectedGraph {
    successors: Vec<Vec<usize>>,
}

/// Breadth-first search tree rooted at the start vertex.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BfsTree {
    /// Predecessor of each vertex on a fewest-hops path; `None` for the start
    /// vertex and for unreached vertices.
    pub parent: Vec<Option<usize>>,
    /// Hop count from the start vertex; `None` when unreachable.
    pub distance: Vec<Option<usize>>,
}

/// Depth-first search tree rooted at the start vertex.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DfsTree {
    /// Vertex from which each vertex was discovered; `None` for the start
    /// vertex and for unreached vertices.
    pub parent: Vec<Option<usize>>,
    /// Zero-based discovery time; `None` when unreachable.
    pub discovery: Vec<Option<usize>>,
}

impl DfsTree {
    fn new(vertex_count: usize) -> Self {
        Self {
            parent: vec![None; vertex_count],
            discovery: vec![None; vertex_count],
        }
    }
}

impl DirectedGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            successors: vec![Vec::new(); vertex_count],
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.successors.len() }

    /// Adds the directed edge `from -> to`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either endpoint is not a
    /// vertex of the graph.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.successors[from].push(to);
        Ok(())
    }

    /// Returns the successors of `vertex` in insertion order.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for an unknown vertex.
    pub fn successors(&self, vertex: usize) -> Result<&[usize]> {
        self.check_vertex(vertex)?;
        Ok(&self.successors[vertex])
    }

    /// Runs a breadth-first search from `start`.
    ///
    /// Vertices are marked when enqueued, so each parent is the first vertex
    /// that discovered it.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when `start` is not a vertex.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::DirectedGraph;
    ///
    /// let mut graph = DirectedGraph::new(3);
    /// graph.add_edge(0, 1)?;
    /// graph.add_edge(1, 2)?;
    /// let tree = graph.bfs(0)?;
    /// assert_eq!(tree.distance, vec![Some(0), Some(1), Some(2)]);
    /// assert_eq!(tree.parent, vec![None, Some(0), Some(1)]);
    /// # Ok::<(), arbor_core::GraphError>(())
    /// ```
    #[instrument(
        name = "graph.bfs",
        err,
        skip(self),
        fields(vertex_count = self.vertex_count()),
    )]
    pub fn bfs(&self, start: usize) -> Result<BfsTree> {
        self.check_vertex(start)?;
        let vertex_count = self.vertex_count();
        let mut tree = BfsTree {
            parent: vec![None; vertex_count],
            distance: vec![None; vertex_count],
        };
        let mut queue = VecDeque::from([start]);
        tree.distance[start] = Some(0);

        while let Some(current) = queue.pop_front() {
            let next_distance = tree.distance[current].map(|hops| hops + 1);
            for &next in &self.successors[current] {
                if tree.distance[next].is_none() {
                    tree.distance[next] = next_distance;
                    tree.parent[next] = Some(current);
                    queue.push_back(next);
                }
            }
        }
        Ok(tree)
    }

    /// Runs an iterative, stack-based depth-first search from `start`.
    ///
    /// Undiscovered successors are pushed in insertion order, each recording
    /// the current vertex as its parent. A vertex pushed more than once keeps
    /// the parent of its latest push.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when `start` is not a vertex.
    #[instrument(
        name = "graph.dfs",
        err,
        skip(self),
        fields(vertex_count = self.vertex_count()),
    )]
    pub fn dfs(&self, start: usize) -> Result<DfsTree> {
        self.check_vertex(start)?;
        let mut tree = DfsTree::new(self.vertex_count());
        let mut stack = vec![start];
        let mut time = 0;

        while let Some(current) = stack.pop() {
            if tree.discovery[current].is_some() {
                continue;
            }
            tree.discovery[current] = Some(time);
            time += 1;
            for &next in &self.successors[current] {
                if tree.discovery[next].is_none() {
                    tree.parent[next] = Some(current);
                    stack.push(next);
                }
            }
        }
        Ok(tree)
    }

    /// Runs a depth-first search in nested-visit order: the first successor
    /// is explored completely before the second is considered.
    ///
    /// Frames live on an explicit stack, so long chains do not grow the call
    /// stack.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when `start` is not a vertex.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::DirectedGraph;
    ///
    /// let mut graph = DirectedGraph::new(3);
    /// graph.add_edge(0, 1)?;
    /// graph.add_edge(0, 2)?;
    /// let tree = graph.dfs_recursive(0)?;
    /// assert_eq!(tree.discovery, vec![Some(0), Some(1), Some(2)]);
    /// # Ok::<(), arbor_core::GraphError>(())
    /// ```
    #[instrument(
        name = "graph.dfs_recursive",
        err,
        skip(self),
        fields(vertex_count = self.vertex_count()),
    )]
    pub fn dfs_recursive(&self, start: usize) -> Result<DfsTree> {
        self.check_vertex(start)?;
        let mut tree = DfsTree::new(self.vertex_count());
        // (vertex, index of the next successor to examine)
        let mut frames = vec![(start, 0_usize)];
        tree.discovery[start] = Some(0);
        let mut time = 1;

        while let Some(frame) = frames.last_mut() {
            let (vertex, cursor) = *frame;
            let Some(&next) = self.successors[vertex].get(cursor) else {
                frames.pop();
                continue;
            };
            frame.1 += 1;
            if tree.discovery[next].is_none() {
                tree.parent[next] = Some(vertex);
                tree.discovery[next] = Some(time);
                time += 1;
                frames.push((next, 0));
            }
        }
        Ok(tree)
    }

    /// Orders the vertices so every edge points forward, using Kahn's
    /// algorithm with a FIFO queue seeded in ascending vertex order.
    ///
    /// Returns an empty vector when the graph contains a cycle.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::DirectedGraph;
    ///
    /// let mut graph = DirectedGraph::new(3);
    /// graph.add_edge(0, 1)?;
    /// graph.add_edge(1, 2)?;
    /// graph.add_edge(2, 0)?;
    /// assert!(graph.topological_sort().is_empty());
    /// # Ok::<(), arbor_core::GraphError>(())
    /// ```
    #[must_use]
    #[instrument(
        name = "graph.topological_sort",
        skip(self),
        fields(vertex_count = self.vertex_count()),
    )]
    pub fn topological_sort(&self) -> Vec<usize> {
        let vertex_count = self.vertex_count();
        let mut in_degree = vec![0_usize; vertex_count];
        for &target in self.successors.iter().flatten() {
            in_degree[target] += 1;
        }

        let mut queue: VecDeque<usize> = (0..vertex_count)
            .filter(|&vertex| in_degree[vertex] == 0)
            .collect();
        let mut order = Vec::with_capacity(vertex_count);

        while let Some(current) = queue.pop_front() {
            order.push(current);
            for &next in &self.successors[current] {
                in_degree[next] -= 1;
                if in_degree[next] == 0 {
                    queue.push_back(next);
                }
            }
        }

        if order.len() == vertex_count {
            return order;
        }
        debug!(
            ordered = order.len(),
            vertex_count,
            reason = "cycle",
            "discarding partial topological order"
        );
        Vec::new()
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }
}
