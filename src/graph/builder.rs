//! Graph construction module

use crate::graph::CompressedGraph;
use std::collections::HashMap;

/// Builder for incrementally constructing a CompressedGraph from an edge list
pub struct GraphBuilder {
    /// Number of nodes
    node_count: usize,

    /// Mapping from string IDs to node indices
    id_to_index: HashMap<String, u32>,

    /// Node string IDs
    node_ids: Vec<String>,

    /// Adjacency lists for each node
    adjacency_lists: Vec<Vec<u32>>,
}

impl GraphBuilder {
    /// Create a new graph builder with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            node_count: 0,
            id_to_index: HashMap::with_capacity(capacity),
            node_ids: Vec::with_capacity(capacity),
            adjacency_lists: Vec::with_capacity(capacity),
        }
    }

    /// Get or create a node index for the given string ID
    pub fn get_or_create_node(&mut self, id: &str) -> u32 {
        if let Some(&idx) = self.id_to_index.get(id) {
            return idx;
        }

        // Create a new node
        let idx = self.node_count as u32;
        self.id_to_index.insert(id.to_string(), idx);
        self.node_ids.push(id.to_string());
        self.adjacency_lists.push(Vec::new());
        self.node_count += 1;

        idx
    }

    /// Add an undirected edge between two nodes
    pub fn add_edge(&mut self, src_id: &str, dst_id: &str) {
        let src = self.get_or_create_node(src_id);
        let dst = self.get_or_create_node(dst_id);

        self.adjacency_lists[src as usize].push(dst);

        // A self-loop is stored once
        if src != dst {
            self.adjacency_lists[dst as usize].push(src);
        }
    }

    /// Build the compressed graph
    pub fn build(mut self) -> CompressedGraph {
        // Sort and collapse parallel edges
        for list in &mut self.adjacency_lists {
            list.sort_unstable();
            list.dedup();
        }

        // Create offsets array
        let mut offsets = Vec::with_capacity(self.node_count + 1);
        offsets.push(0);

        let mut offset = 0;
        for list in &self.adjacency_lists {
            offset += list.len() as u32;
            offsets.push(offset);
        }

        // Create edges array and count unique undirected edges
        let mut edges = Vec::with_capacity(offset as usize);
        let mut edge_count = 0;
        for (u, list) in self.adjacency_lists.iter().enumerate() {
            // Each non-loop edge is counted at its lower endpoint
            edge_count += list.iter().filter(|&&v| v as usize >= u).count();
            edges.extend_from_slice(list);
        }

        CompressedGraph {
            node_count: self.node_count,
            edge_count,
            offsets,
            edges,
            node_ids: self.node_ids,
        }
    }
}
