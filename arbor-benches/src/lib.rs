//! Benchmark support crate for arbor.
//!
//! Provides seeded synthetic graphs and parameter labels used by the
//! Criterion benchmarks for shortest paths and spanning trees.

pub mod error;
pub mod params;
pub mod synthetic;
