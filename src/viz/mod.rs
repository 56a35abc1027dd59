//! Network-view derivation for the node-link diagram.
//!
//! The view is the induced subgraph over the top-N ranked nodes plus all of
//! their direct neighbors, laid out in 2-D with a force-directed pass.

pub mod layout;

use crate::centrality::CentralitySnapshot;
use crate::graph::CompressedGraph;
use itertools::Itertools;
use serde::Serialize;
use std::collections::HashSet;

/// A positioned node of the induced subgraph
#[derive(Debug, Clone, Serialize)]
pub struct SubgraphNode {
    pub node: String,
    pub x: f64,
    pub y: f64,
    pub degree: f64,
    pub betweenness: f64,
    pub closeness: f64,
}

/// An edge of the induced subgraph
#[derive(Debug, Clone, Serialize)]
pub struct SubgraphEdge {
    pub source: String,
    pub target: String,
}

/// Take the induced subgraph over `seeds` and all their direct neighbors.
///
/// Returns the member nodes in ascending index order and each undirected
/// edge once.
pub fn induced_subgraph(graph: &CompressedGraph, seeds: &[u32]) -> (Vec<u32>, Vec<(u32, u32)>) {
    let mut members: HashSet<u32> = seeds.iter().copied().collect();
    for &s in seeds {
        members.extend(graph.neighbors(s as usize).iter().copied());
    }

    let nodes: Vec<u32> = members.iter().copied().sorted_unstable().collect();

    let mut edges = Vec::new();
    for &u in &nodes {
        for &v in graph.neighbors(u as usize) {
            // Emit each undirected edge at its lower endpoint
            if v >= u && members.contains(&v) {
                edges.push((u, v));
            }
        }
    }

    (nodes, edges)
}

/// Build the positioned node and edge records for the network endpoints.
pub fn network_view(
    graph: &CompressedGraph,
    snapshot: &CentralitySnapshot,
    top_n: usize,
    seed: u64,
) -> (Vec<SubgraphNode>, Vec<SubgraphEdge>) {
    let seeds = snapshot.top_nodes(top_n);
    let (nodes, edges) = induced_subgraph(graph, seeds);
    let positions = layout::force_directed(&nodes, &edges, seed);

    let node_records = nodes
        .iter()
        .zip(&positions)
        .map(|(&v, p)| SubgraphNode {
            node: graph.node_ids[v as usize].clone(),
            x: p.x,
            y: p.y,
            degree: snapshot.degree[v as usize],
            betweenness: snapshot.betweenness[v as usize],
            closeness: snapshot.closeness_or_zero(v),
        })
        .collect();

    let edge_records = edges
        .iter()
        .map(|&(u, v)| SubgraphEdge {
            source: graph.node_ids[u as usize].clone(),
            target: graph.node_ids[v as usize].clone(),
        })
        .collect();

    (node_records, edge_records)
}
