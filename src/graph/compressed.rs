//! Memory-efficient undirected graph representation

use std::mem;
use serde::{Serialize, Deserialize};

/// Compressed sparse representation of an undirected, unweighted, simple graph.
///
/// Each undirected edge appears in both endpoints' adjacency ranges; a
/// self-loop appears once. Built once at startup and never mutated after.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressedGraph {
    /// Number of nodes in the graph
    pub node_count: usize,

    /// Number of unique undirected edges
    pub edge_count: usize,

    /// Offset array: index where each node's neighbors begin
    /// offsets[i] to offsets[i+1] defines the neighbor range for node i
    pub offsets: Vec<u32>,

    /// Neighbor array: concatenated, sorted adjacency lists
    pub edges: Vec<u32>,

    /// Mapping from internal node indices to original string IDs
    pub node_ids: Vec<String>,
}

impl CompressedGraph {
    /// Get the neighbors of a node
    pub fn neighbors(&self, node: usize) -> &[u32] {
        let start = self.offsets[node] as usize;
        let end = self.offsets[node + 1] as usize;
        &self.edges[start..end]
    }

    /// Get the degree (neighbor count) of a node
    pub fn degree(&self, node: usize) -> usize {
        let start = self.offsets[node] as usize;
        let end = self.offsets[node + 1] as usize;
        end - start
    }

    /// Check whether an edge exists between two nodes
    pub fn has_edge(&self, src: usize, dst: u32) -> bool {
        self.neighbors(src).binary_search(&dst).is_ok()
    }

    /// Estimate memory usage in bytes
    pub fn memory_usage(&self) -> usize {
        let base = mem::size_of::<Self>();
        let offsets = self.offsets.capacity() * mem::size_of::<u32>();
        let edges = self.edges.capacity() * mem::size_of::<u32>();
        let ids = self.node_ids.iter().map(|s| s.capacity()).sum::<usize>();

        base + offsets + edges + ids
    }
}
