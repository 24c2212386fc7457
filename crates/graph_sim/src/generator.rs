use std::collections::HashSet;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::graph::{NodeId, WeightedGraph};

const W_MAX: u64 = 1_000_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GraphCase {
    SparseUndirected,
    DenseUndirected,
    GridUndirected,
    ManyEqualWeights,
    SparseDirected,
}

impl GraphCase {
    pub fn label(self) -> &'static str {
        match self {
            Self::SparseUndirected => "sparse_undirected",
            Self::DenseUndirected => "dense_undirected",
            Self::GridUndirected => "grid_undirected",
            Self::ManyEqualWeights => "many_equal_weights",
            Self::SparseDirected => "sparse_directed",
        }
    }

    pub fn is_directed(self) -> bool {
        matches!(self, Self::SparseDirected)
    }
}

#[derive(Clone, Debug)]
pub struct GeneratedGraph {
    pub graph: WeightedGraph,
    pub source: NodeId,
}

impl GeneratedGraph {
    pub fn source_name(&self) -> &str {
        self.graph.name(self.source)
    }
}

/// Undirected cases are connected: a random spanning tree is laid down first.
pub fn generate_case(case: GraphCase, size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = size.max(2);
    let graph = match case {
        GraphCase::SparseUndirected => random_connected(n, n * 2, W_MAX, &mut rng),
        GraphCase::DenseUndirected => {
            let n = floor_sqrt(n * 8).clamp(2, n);
            random_connected(n, n * (n - 1) / 4, W_MAX, &mut rng)
        }
        GraphCase::GridUndirected => grid(n, &mut rng),
        GraphCase::ManyEqualWeights => random_connected(n, n * 2, 3, &mut rng),
        GraphCase::SparseDirected => random_directed(n, n * 4, W_MAX, &mut rng),
    };
    let source = rng.random_range(0..graph.node_count());
    GeneratedGraph { graph, source }
}

/// Connected undirected graph on `n` nodes with `n - 1 + extra` distinct edges
/// (fewer if the graph saturates). Weights are drawn from `0..=max_weight`.
pub fn random_connected<R: Rng + ?Sized>(
    n: usize,
    extra: usize,
    max_weight: u64,
    rng: &mut R,
) -> WeightedGraph {
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);

    let mut pairs = Vec::with_capacity(n + extra);
    let mut used = HashSet::with_capacity((n + extra) * 2);
    for i in 1..n {
        let parent = order[rng.random_range(0..i)];
        push_unique_pair(&mut pairs, &mut used, order[i], parent, rng.random_range(0..=max_weight));
    }

    let target = (n - 1 + extra).min(n * (n - 1) / 2);
    while pairs.len() < target {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        push_unique_pair(&mut pairs, &mut used, u, v, rng.random_range(0..=max_weight));
    }

    symmetric(n, &pairs)
}

/// Directed graph with up to `m` distinct arcs; not necessarily connected.
pub fn random_directed<R: Rng + ?Sized>(
    n: usize,
    m: usize,
    max_weight: u64,
    rng: &mut R,
) -> WeightedGraph {
    let m = m.min(n * (n - 1));
    let mut used = HashSet::with_capacity(m * 2);
    let mut edges = Vec::with_capacity(m);
    while edges.len() < m {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        if u != v && used.insert((u, v)) {
            edges.push((u, v, rng.random_range(0..=max_weight)));
        }
    }
    WeightedGraph::from_edges(node_names(n), &edges)
}

fn grid<R: Rng + ?Sized>(size: usize, rng: &mut R) -> WeightedGraph {
    let side = floor_sqrt(size).max(2);
    let n = side * side;
    let mut pairs = Vec::with_capacity(n * 2);
    for r in 0..side {
        for c in 0..side {
            let v = r * side + c;
            if c + 1 < side {
                pairs.push((v, v + 1, rng.random_range(1..=W_MAX)));
            }
            if r + 1 < side {
                pairs.push((v, v + side, rng.random_range(1..=W_MAX)));
            }
        }
    }
    symmetric(n, &pairs)
}

fn symmetric(n: usize, pairs: &[(NodeId, NodeId, u64)]) -> WeightedGraph {
    let mut edges = Vec::with_capacity(pairs.len() * 2);
    for &(u, v, w) in pairs {
        edges.push((u, v, w));
        edges.push((v, u, w));
    }
    WeightedGraph::from_edges(node_names(n), &edges)
}

fn node_names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("n{i}")).collect()
}

#[inline]
fn floor_sqrt(value: usize) -> usize {
    (value as f64).sqrt().floor() as usize
}

#[inline]
fn push_unique_pair(
    pairs: &mut Vec<(NodeId, NodeId, u64)>,
    used: &mut HashSet<(NodeId, NodeId)>,
    u: NodeId,
    v: NodeId,
    weight: u64,
) -> bool {
    if u == v {
        return false;
    }
    if used.insert((u.min(v), u.max(v))) {
        pairs.push((u, v, weight));
        return true;
    }
    false
}
