//! Graph generators for MST property tests.
//!
//! Each topology is produced from a seeded [`SmallRng`] so that rstest cases
//! can pin a seed while proptest samples seeds freely.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{EdgeList, MstFixture, Topology};

const MIN_VERTICES: usize = 8;
const MAX_VERTICES: usize = 48;
/// Dense graphs stay small to bound the quadratic edge count.
const DENSE_MAX_VERTICES: usize = 24;
const MAX_WEIGHT: i64 = 1_000;

/// Samples a topology and a seed, then generates the fixture.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<Topology>(), any::<u64>()).prop_map(|(topology, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(topology, &mut rng)
    })
}

/// Generates a fixture for an explicit topology.
pub(super) fn generate_fixture(topology: Topology, rng: &mut SmallRng) -> MstFixture {
    let (vertex_count, edges) = match topology {
        Topology::Unique => {
            let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            let probability = rng.gen_range(0.2..=0.6);
            let edges = random_pairs(vertex_count, probability, rng, |r| r.gen_range(0..=MAX_WEIGHT));
            (vertex_count, edges)
        }
        Topology::ManyIdentical => {
            let pool: Vec<i64> = (0..rng.gen_range(1..=3))
                .map(|_| rng.gen_range(1..=10))
                .collect();
            let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            let probability = rng.gen_range(0.3..=0.7);
            let edges = random_pairs(vertex_count, probability, rng, |r| {
                pool[r.gen_range(0..pool.len())]
            });
            (vertex_count, edges)
        }
        Topology::Sparse => generate_sparse(rng),
        Topology::Dense => {
            let vertex_count = rng.gen_range(MIN_VERTICES..=DENSE_MAX_VERTICES);
            let probability = rng.gen_range(0.7..=0.95);
            let edges = random_pairs(vertex_count, probability, rng, |r| r.gen_range(0..=MAX_WEIGHT));
            (vertex_count, edges)
        }
        Topology::Disconnected => generate_disconnected(rng),
    };

    MstFixture {
        vertex_count,
        edges,
        topology,
    }
}

/// Adds each unordered pair with the given probability. Endpoint order is
/// randomised so that both adjacency directions are exercised.
fn random_pairs(
    vertex_count: usize,
    probability: f64,
    rng: &mut SmallRng,
    mut weight: impl FnMut(&mut SmallRng) -> i64,
) -> EdgeList {
    let mut edges = Vec::new();
    for low in 0..vertex_count {
        for high in (low + 1)..vertex_count {
            if rng.gen_bool(probability) {
                let w = weight(rng);
                if rng.gen_bool(0.5) {
                    edges.push((low, high, w));
                } else {
                    edges.push((high, low, w));
                }
            }
        }
    }
    if edges.is_empty() {
        edges.push((0, 1, weight(rng)));
    }
    edges
}

fn generate_sparse(rng: &mut SmallRng) -> (usize, EdgeList) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut order: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut order, rng);

    let mut edges: EdgeList = order
        .windows(2)
        .map(|pair| (pair[0], pair[1], rng.gen_range(0..=MAX_WEIGHT)))
        .collect();

    for _ in 0..rng.gen_range(vertex_count / 2..=vertex_count) {
        let from = rng.gen_range(0..vertex_count);
        let to = rng.gen_range(0..vertex_count);
        edges.push((from, to, rng.gen_range(0..=MAX_WEIGHT)));
    }

    // Parallel copy of an existing edge with a different weight.
    let (from, to, _) = edges[rng.gen_range(0..edges.len())];
    edges.push((to, from, rng.gen_range(0..=MAX_WEIGHT)));

    (vertex_count, edges)
}

/// Two to five components of three to twelve vertices, each internally
/// connected by a random path plus extra pairs.
fn generate_disconnected(rng: &mut SmallRng) -> (usize, EdgeList) {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=5))
        .map(|_| rng.gen_range(3..=12))
        .collect();
    let mut edges = Vec::new();
    let mut offset = 0;
    for size in sizes {
        for vertex in offset + 1..offset + size {
            edges.push((vertex - 1, vertex, rng.gen_range(0..=MAX_WEIGHT)));
        }
        for low in offset..offset + size {
            for high in (low + 2)..offset + size {
                if rng.gen_bool(0.3) {
                    edges.push((low, high, rng.gen_range(0..=MAX_WEIGHT)));
                }
            }
        }
        offset += size;
    }
    (offset, edges)
}

/// Fisher-Yates shuffle.
fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}
