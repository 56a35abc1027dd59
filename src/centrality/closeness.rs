//! Closeness centrality for individual nodes.
//!
//! Closeness is the inverse of a node's average shortest-path distance to
//! the nodes it can reach. For graphs that may be disconnected the raw value
//! is scaled by the fraction of the graph that is reachable
//! (Wasserman-Faust), so a node in a small component cannot outrank a
//! well-placed node in the main component.

use crate::graph::CompressedGraph;
use std::collections::VecDeque;

/// Compute closeness centrality for a single node.
///
/// Returns `((r-1) / Σd) · ((r-1) / (n-1))` where r is the number of nodes
/// reachable from `source` (itself included) and Σd the sum of their
/// shortest-path distances. Isolated nodes score 0.0.
pub fn closeness_centrality(graph: &CompressedGraph, source: usize) -> f64 {
    let n = graph.node_count;
    if n <= 1 {
        return 0.0;
    }

    let dist = bfs_distances(graph, source);

    let mut total_dist = 0_u64;
    let mut reachable = 1_usize; // the source itself
    for (v, &d) in dist.iter().enumerate() {
        if v != source && d > 0 {
            total_dist += d as u64;
            reachable += 1;
        }
    }

    if total_dist == 0 {
        return 0.0;
    }

    let closeness = (reachable - 1) as f64 / total_dist as f64;
    closeness * ((reachable - 1) as f64 / (n - 1) as f64)
}

/// BFS distances from source. -1 means unreachable, 0 means self.
fn bfs_distances(graph: &CompressedGraph, source: usize) -> Vec<i64> {
    let n = graph.node_count;
    let mut dist = vec![-1_i64; n];
    dist[source] = 0;

    let mut queue = VecDeque::new();
    queue.push_back(source as u32);

    while let Some(v) = queue.pop_front() {
        let v_dist = dist[v as usize];

        for &w in graph.neighbors(v as usize) {
            if dist[w as usize] < 0 {
                dist[w as usize] = v_dist + 1;
                queue.push_back(w);
            }
        }
    }

    dist
}
