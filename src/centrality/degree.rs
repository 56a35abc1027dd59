//! Degree centrality

use crate::graph::CompressedGraph;

/// Compute normalized degree centrality for every node.
///
/// The score for a node is its neighbor count divided by (|V| - 1), giving
/// values in [0, 1]. Exact, O(V + E).
pub fn degree_centrality(graph: &CompressedGraph) -> Vec<f64> {
    let n = graph.node_count;
    if n <= 1 {
        return vec![0.0; n];
    }

    let norm = (n - 1) as f64;
    (0..n).map(|v| graph.degree(v) as f64 / norm).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::GraphBuilder;

    #[test]
    fn path_graph_degrees() {
        let mut builder = GraphBuilder::with_capacity(4);
        builder.add_edge("a", "b");
        builder.add_edge("b", "c");
        builder.add_edge("c", "d");
        let graph = builder.build();

        let degree = degree_centrality(&graph);
        // Endpoints touch 1 of 3 other nodes, inner nodes touch 2 of 3
        assert!((degree[0] - 1.0 / 3.0).abs() < 1e-12);
        assert!((degree[1] - 2.0 / 3.0).abs() < 1e-12);
        assert!((degree[2] - 2.0 / 3.0).abs() < 1e-12);
        assert!((degree[3] - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn star_graph_hub_is_maximal() {
        let mut builder = GraphBuilder::with_capacity(4);
        builder.add_edge("hub", "a");
        builder.add_edge("hub", "b");
        builder.add_edge("hub", "c");
        let graph = builder.build();

        let degree = degree_centrality(&graph);
        assert!((degree[0] - 1.0).abs() < 1e-12);
        for &leaf in &degree[1..] {
            assert!((leaf - 1.0 / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn one_entry_per_node() {
        let mut builder = GraphBuilder::with_capacity(8);
        builder.add_edge("a", "b");
        builder.add_edge("c", "d");
        let graph = builder.build();

        assert_eq!(degree_centrality(&graph).len(), graph.node_count);
    }
}
