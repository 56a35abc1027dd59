//! Centrality snapshot module
//!
//! All three measures are computed once at startup from the loaded graph and
//! cached for the life of the process. Everything served later is a pure
//! projection over this snapshot.

pub mod degree;
pub mod betweenness;
pub mod closeness;

use crate::config::Config;
use crate::graph::CompressedGraph;
use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use rayon::prelude::*;
use std::collections::HashMap;

/// One-shot centrality results over the loaded graph.
///
/// Degree and betweenness cover every node; closeness covers only the
/// sampled subset. Nodes outside the sample project to 0.0, never absence.
pub struct CentralitySnapshot {
    /// Normalized degree centrality, indexed by node
    pub degree: Vec<f64>,

    /// Pivot-sampled betweenness estimate, indexed by node
    pub betweenness: Vec<f64>,

    /// Closeness for the sampled nodes only
    pub closeness: HashMap<u32, f64>,

    /// Sampled node indices, in sample order
    pub sample: Vec<u32>,

    /// Sampled nodes sorted by degree descending; ties keep sample order
    pub ranking: Vec<u32>,
}

impl CentralitySnapshot {
    /// Closeness for a node, defaulting to 0.0 outside the sample
    pub fn closeness_or_zero(&self, node: u32) -> f64 {
        self.closeness.get(&node).copied().unwrap_or(0.0)
    }

    /// The highest-degree sampled nodes, at most `n` of them
    pub fn top_nodes(&self, n: usize) -> &[u32] {
        &self.ranking[..n.min(self.ranking.len())]
    }
}

/// Compute the centrality snapshot for a loaded graph.
///
/// Betweenness pivots are drawn with the configured fixed seed, so the
/// estimate is reproducible across runs. The closeness sample is unseeded
/// unless `closeness_seed` is set: the sampled node set then varies per
/// process but stays fixed for its lifetime.
pub fn compute_snapshot(graph: &CompressedGraph, config: &Config) -> CentralitySnapshot {
    let n = graph.node_count;

    log::info!("Computing degree centrality for {} nodes", n);
    let degree = degree::degree_centrality(graph);

    log::info!(
        "Estimating betweenness centrality from {} pivots (seed {})",
        config.top_n.min(n),
        config.seed
    );
    let betweenness = betweenness::betweenness_centrality(graph, config.top_n, config.seed);

    let sample_size = config.sample_size.min(n);
    let sample = match config.closeness_seed {
        Some(seed) => sample_nodes(&mut XorShiftRng::seed_from_u64(seed), n, sample_size),
        None => sample_nodes(&mut rand::thread_rng(), n, sample_size),
    };

    log::info!("Computing closeness centrality for {} sampled nodes", sample.len());
    let closeness: HashMap<u32, f64> = sample
        .par_iter()
        .map(|&v| (v, closeness::closeness_centrality(graph, v as usize)))
        .collect();

    // Stable sort keeps sample order for equal degrees
    let mut ranking = sample.clone();
    ranking.sort_by(|&a, &b| degree[b as usize].total_cmp(&degree[a as usize]));

    CentralitySnapshot {
        degree,
        betweenness,
        closeness,
        sample,
        ranking,
    }
}

/// Draw `size` distinct node indices uniformly at random.
fn sample_nodes<R: Rng + ?Sized>(rng: &mut R, n: usize, size: usize) -> Vec<u32> {
    let nodes: Vec<u32> = (0..n as u32).collect();
    nodes.choose_multiple(rng, size).copied().collect()
}
