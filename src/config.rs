//! Configuration for the centrality server

/// Runtime constants consumed by the snapshot and query layers
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of nodes sampled for closeness centrality (capped at |V|)
    pub sample_size: usize,

    /// Top-N count for rankings, charts, and the network view; also the
    /// betweenness pivot-sample size
    pub top_n: usize,

    /// Fixed seed for betweenness pivots and the layout
    pub seed: u64,

    /// Optional seed for the closeness sample; unseeded when absent
    pub closeness_seed: Option<u64>,

    /// Port the HTTP API listens on
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_size: 200,
            top_n: 10,
            seed: 42,
            closeness_seed: None,
            port: 8000,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(
        sample_size: usize,
        top_n: usize,
        seed: u64,
        closeness_seed: Option<u64>,
        port: u16,
    ) -> Self {
        Self {
            sample_size,
            top_n,
            seed,
            closeness_seed,
            port,
        }
    }
}
