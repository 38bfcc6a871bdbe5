//! Seeded synthetic weighted graphs.
//!
//! Every graph is connected: a random spanning path over a shuffled vertex
//! order is laid down first, then extra uniformly random edges are added.
//! Identical configurations always yield identical graphs.

use arbor_core::{GraphBuilder, WeightedGraph};
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

use crate::{error::BenchSetupError, params::GraphBenchParams};

/// Configuration for [`generate`].
#[derive(Clone, Copy, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Extra random edges per vertex beyond the spanning path.
    pub extra_edges_per_vertex: usize,
    /// Inclusive upper bound for edge weights.
    pub max_weight: i64,
    /// Seed for the random number generator.
    pub seed: u64,
}

impl SyntheticGraphConfig {
    /// Returns the benchmark label for this configuration.
    #[must_use]
    pub const fn params(&self) -> GraphBenchParams {
        GraphBenchParams {
            vertex_count: self.vertex_count,
            extra_edges_per_vertex: self.extra_edges_per_vertex,
        }
    }
}

/// Generates a connected graph described by `config`.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `vertex_count` is zero and
/// [`BenchSetupError::NegativeMaxWeight`] when `max_weight` is negative.
///
/// # Examples
/// ```
/// use arbor_benches::synthetic::{SyntheticGraphConfig, generate};
///
/// let graph = generate(&SyntheticGraphConfig {
///     vertex_count: 16,
///     extra_edges_per_vertex: 2,
///     max_weight: 100,
///     seed: 7,
/// })?;
/// assert_eq!(graph.vertex_count(), 16);
/// assert_eq!(graph.kruskal_mst().len(), 15);
/// # Ok::<(), arbor_benches::error::BenchSetupError>(())
/// ```
pub fn generate(config: &SyntheticGraphConfig) -> Result<WeightedGraph, BenchSetupError> {
    if config.vertex_count == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "vertex_count",
        });
    }
    if config.max_weight < 0 {
        return Err(BenchSetupError::NegativeMaxWeight {
            max_weight: config.max_weight,
        });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut order: Vec<usize> = (0..config.vertex_count).collect();
    order.shuffle(&mut rng);

    let extra = config
        .vertex_count
        .saturating_mul(config.extra_edges_per_vertex);
    let mut edges = Vec::with_capacity(config.vertex_count.saturating_sub(1).saturating_add(extra));
    for (&from, &to) in order.iter().zip(order.iter().skip(1)) {
        edges.push((from, to, rng.gen_range(0..=config.max_weight)));
    }
    for _ in 0..extra {
        let from = rng.gen_range(0..config.vertex_count);
        let to = rng.gen_range(0..config.vertex_count);
        edges.push((from, to, rng.gen_range(0..=config.max_weight)));
    }

    let graph = GraphBuilder::new(config.vertex_count)
        .with_capacity_hint(config.extra_edges_per_vertex.saturating_mul(2).saturating_add(2))
        .with_edges(edges)
        .build()?;
    Ok(graph)
}
