//! Arbor core library.
//!
//! Weighted undirected graphs with shortest-path and minimum spanning tree
//! queries, a disjoint-set forest, and unweighted directed traversals.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod disjoint_set;
mod error;
mod graph;
pub mod mst;
pub mod shortest_path;
mod traversal;


pub use crate::{
    builder::GraphBuilder,
    disjoint_set::DisjointSet,
    error::{
        DisjointSetError, DisjointSetErrorCode, GraphBuilderError, GraphBuilderErrorCode,
        GraphError, GraphErrorCode, Result,
    },
    graph::{Neighbour, WeightedGraph},
    mst::{Edge, SpanningTree},
    shortest_path::UNREACHABLE,
    traversal::{BfsTree, DfsTree, DirectedGraph},
};
