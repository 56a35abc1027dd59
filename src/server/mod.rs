//! Read-only HTTP API over the centrality snapshot.
//!
//! Every handler is a pure projection: the graph and snapshot are immutable
//! after startup, so concurrent requests share them through `Arc` with no
//! locking and no handler has an error path.

use std::sync::Arc;

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;

use crate::centrality::CentralitySnapshot;
use crate::config::Config;
use crate::graph::CompressedGraph;
use crate::viz;

/// Shared application state.
pub struct AppState {
    graph: CompressedGraph,
    snapshot: CentralitySnapshot,
    top_n: usize,
    layout_seed: u64,
}

// ---------- response types ----------

#[derive(Serialize)]
pub struct CentralityEntry {
    node: String,
    value: f64,
}

/// Top-N chart row, keyed the way the front-end charts expect
#[derive(Serialize)]
pub struct CentralityRow {
    #[serde(rename = "Node")]
    node: String,
    #[serde(rename = "Degree")]
    degree: f64,
    #[serde(rename = "Betweenness")]
    betweenness: f64,
    #[serde(rename = "Closeness")]
    closeness: f64,
}

// ---------- handlers ----------

async fn handle_degree(State(state): State<Arc<AppState>>) -> Json<Vec<CentralityEntry>> {
    let entries = state
        .snapshot
        .degree
        .iter()
        .enumerate()
        .map(|(v, &value)| CentralityEntry {
            node: state.graph.node_ids[v].clone(),
            value,
        })
        .collect();
    Json(entries)
}

async fn handle_betweenness(State(state): State<Arc<AppState>>) -> Json<Vec<CentralityEntry>> {
    let entries = state
        .snapshot
        .betweenness
        .iter()
        .enumerate()
        .map(|(v, &value)| CentralityEntry {
            node: state.graph.node_ids[v].clone(),
            value,
        })
        .collect();
    Json(entries)
}

async fn handle_closeness(State(state): State<Arc<AppState>>) -> Json<Vec<CentralityEntry>> {
    let entries = state
        .snapshot
        .sample
        .iter()
        .map(|&v| CentralityEntry {
            node: state.graph.node_ids[v as usize].clone(),
            value: state.snapshot.closeness_or_zero(v),
        })
        .collect();
    Json(entries)
}

async fn handle_top_rows(State(state): State<Arc<AppState>>) -> Json<Vec<CentralityRow>> {
    let rows = state
        .snapshot
        .top_nodes(state.top_n)
        .iter()
        .map(|&v| CentralityRow {
            node: state.graph.node_ids[v as usize].clone(),
            degree: state.snapshot.degree[v as usize],
            betweenness: state.snapshot.betweenness[v as usize],
            closeness: state.snapshot.closeness_or_zero(v),
        })
        .collect();
    Json(rows)
}

async fn handle_network_nodes(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<viz::SubgraphNode>> {
    let (nodes, _) = viz::network_view(&state.graph, &state.snapshot, state.top_n, state.layout_seed);
    Json(nodes)
}

async fn handle_network_edges(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<viz::SubgraphEdge>> {
    let (_, edges) = viz::network_view(&state.graph, &state.snapshot, state.top_n, state.layout_seed);
    Json(edges)
}

// ---------- router ----------

pub fn build_router(graph: CompressedGraph, snapshot: CentralitySnapshot, config: &Config) -> Router {
    let state = Arc::new(AppState {
        graph,
        snapshot,
        top_n: config.top_n,
        layout_seed: config.seed,
    });

    // The grouped-bar and centrality-top10 charts consume the same rows
    Router::new()
        .route("/degree/", get(handle_degree))
        .route("/betweenness/", get(handle_betweenness))
        .route("/closeness/", get(handle_closeness))
        .route("/plot/grouped-bar/", get(handle_top_rows))
        .route("/plot/centrality-top10/", get(handle_top_rows))
        .route("/plot/network-nodes/", get(handle_network_nodes))
        .route("/plot/network-edges/", get(handle_network_edges))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Run the HTTP API server on the configured port.
pub async fn run_server(
    graph: CompressedGraph,
    snapshot: CentralitySnapshot,
    config: Config,
) -> anyhow::Result<()> {
    let port = config.port;
    let app = build_router(graph, snapshot, &config);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    log::info!("Serving centrality API on http://0.0.0.0:{port}");
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::centrality::compute_snapshot;
    use crate::graph::builder::GraphBuilder;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::util::ServiceExt;

    fn test_state() -> (CompressedGraph, Config) {
        // hub with three spokes and a short tail off one spoke
        let mut builder = GraphBuilder::with_capacity(8);
        builder.add_edge("hub", "a");
        builder.add_edge("hub", "b");
        builder.add_edge("hub", "c");
        builder.add_edge("c", "tail");
        let graph = builder.build();
        // Seed the closeness sample so assertions are deterministic
        let config = Config::new(5, 2, 42, Some(7), 0);
        (graph, config)
    }

    fn test_router() -> Router {
        let (graph, config) = test_state();
        let snapshot = compute_snapshot(&graph, &config);
        build_router(graph, snapshot, &config)
    }

    async fn get_json(app: Router, uri: &str) -> serde_json::Value {
        let resp = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_degree_covers_all_nodes() {
        let json = get_json(test_router(), "/degree/").await;
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 5);

        let hub = entries.iter().find(|e| e["node"] == "hub").unwrap();
        assert!((hub["value"].as_f64().unwrap() - 0.75).abs() < 1e-12);
    }

    #[tokio::test]
    async fn test_betweenness_covers_all_nodes() {
        let json = get_json(test_router(), "/betweenness/").await;
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 5);
        for entry in entries {
            assert!(entry["value"].as_f64().is_some());
        }
    }

    #[tokio::test]
    async fn test_closeness_covers_sample_only() {
        let json = get_json(test_router(), "/closeness/").await;
        let entries = json.as_array().unwrap();
        // sample_size 5 covers the whole 5-node graph
        assert_eq!(entries.len(), 5);
        for entry in entries {
            assert!(entry["value"].as_f64().unwrap() >= 0.0);
        }
    }

    #[tokio::test]
    async fn test_top_rows_sorted_by_degree() {
        let json = get_json(test_router(), "/plot/centrality-top10/").await;
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 2);

        let first = rows[0]["Degree"].as_f64().unwrap();
        let second = rows[1]["Degree"].as_f64().unwrap();
        assert!(first >= second);
        assert_eq!(rows[0]["Node"], "hub");
    }

    #[tokio::test]
    async fn test_grouped_bar_matches_top10() {
        let app = test_router();
        let bar = get_json(app.clone(), "/plot/grouped-bar/").await;
        let top = get_json(app, "/plot/centrality-top10/").await;
        assert_eq!(bar, top);
    }

    #[tokio::test]
    async fn test_network_nodes_shape() {
        let json = get_json(test_router(), "/plot/network-nodes/").await;
        let nodes = json.as_array().unwrap();
        assert!(!nodes.is_empty());
        for node in nodes {
            assert!(node["node"].as_str().is_some());
            assert!(node["x"].as_f64().unwrap().abs() <= 1.0 + 1e-9);
            assert!(node["y"].as_f64().unwrap().abs() <= 1.0 + 1e-9);
            assert!(node["degree"].as_f64().is_some());
            assert!(node["betweenness"].as_f64().is_some());
            assert!(node["closeness"].as_f64().is_some());
        }
    }

    #[tokio::test]
    async fn test_network_edges_within_node_set() {
        let app = test_router();
        let nodes = get_json(app.clone(), "/plot/network-nodes/").await;
        let edges = get_json(app, "/plot/network-edges/").await;

        let names: Vec<&str> = nodes
            .as_array()
            .unwrap()
            .iter()
            .map(|n| n["node"].as_str().unwrap())
            .collect();

        for edge in edges.as_array().unwrap() {
            assert!(names.contains(&edge["source"].as_str().unwrap()));
            assert!(names.contains(&edge["target"].as_str().unwrap()));
        }
    }
}
