use anyhow::Result;
use clap::Parser;

mod config;
mod data;
mod graph;
mod centrality;
mod viz;
mod server;

#[derive(Parser, Debug)]
#[clap(
    name = "graph-centrality-server",
    about = "Centrality analysis API over a social-network edge list"
)]
struct Cli {
    /// Path to the input CSV edge list (source,target columns)
    #[clap(long)]
    input: String,

    /// Port to serve the HTTP API on
    #[clap(long, default_value = "8000")]
    port: u16,

    /// Number of nodes sampled for closeness centrality
    #[clap(long, default_value = "200")]
    sample_size: usize,

    /// Number of top-ranked nodes for charts and the network view
    #[clap(long, default_value = "10")]
    top_n: usize,

    /// Random seed for betweenness pivots and the layout
    #[clap(long, default_value = "42")]
    seed: u64,

    /// Optional seed for the closeness sample (unseeded when omitted)
    #[clap(long)]
    closeness_seed: Option<u64>,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    // Set number of threads
    let num_threads = if args.threads > 0 {
        args.threads
    } else {
        num_cpus::get()
    };

    log::info!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    let config = config::Config::new(
        args.sample_size,
        args.top_n,
        args.seed,
        args.closeness_seed,
        args.port,
    );

    log::info!("Starting centrality analysis");
    log::info!("Input: {}", args.input);

    // 1. Load the edge list; any failure here must prevent serving
    let graph = data::edgelist::load_edge_list(&args.input)?;

    log::info!(
        "Loaded graph with {} nodes and {} edges",
        graph.node_count,
        graph.edge_count
    );
    log::debug!("Graph memory footprint: {} bytes", graph.memory_usage());

    // 2. Compute the one-shot centrality snapshot
    let snapshot = centrality::compute_snapshot(&graph, &config);

    log::info!(
        "Snapshot ready: {} degree scores, {} betweenness scores, {} closeness samples",
        snapshot.degree.len(),
        snapshot.betweenness.len(),
        snapshot.closeness.len()
    );

    // 3. Serve read-only queries over the immutable snapshot
    server::run_server(graph, snapshot, config).await
}
