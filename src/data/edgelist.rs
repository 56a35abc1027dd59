//! CSV edge-list loading

use anyhow::Result;
use polars::prelude::*;
use thiserror::Error;
use crate::graph::builder::GraphBuilder;
use crate::graph::CompressedGraph;
use log;

/// Load-time failures that must prevent the process from serving.
#[derive(Debug, Error)]
pub enum EdgeListError {
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("edge list is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("edge list {0} contains no edges")]
    Empty(String),
}

/// Load an undirected graph from a two-column CSV edge list.
///
/// The node set is the union of the `source` and `target` columns; parallel
/// edges collapse to one, self-loops are accepted as-is. Any malformed input
/// is a fatal error: the caller must not reach a servable state with a
/// partially-built graph.
pub fn load_edge_list(path: &str) -> Result<CompressedGraph> {
    log::info!("Reading edge list: {}", path);

    if !std::path::Path::new(path).exists() {
        return Err(EdgeListError::FileNotFound(path.to_string()).into());
    }

    // Node IDs are opaque strings, so skip schema inference entirely
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .finish()?
        .collect()?;

    log::info!("File schema: {:?}", df.schema());
    log::info!("Loaded {} edge rows", df.height());

    if df.height() == 0 {
        return Err(EdgeListError::Empty(path.to_string()).into());
    }

    let source_col = df
        .column("source")
        .map_err(|_| EdgeListError::MissingColumn("source"))?
        .str()?;
    let target_col = df
        .column("target")
        .map_err(|_| EdgeListError::MissingColumn("target"))?
        .str()?;

    log::info!("Building compressed graph representation...");

    let mut builder = GraphBuilder::with_capacity(df.height());
    for i in 0..df.height() {
        let (Some(src), Some(dst)) = (source_col.get(i), target_col.get(i)) else {
            continue;
        };
        builder.add_edge(src, dst);
    }

    let graph = builder.build();
    if graph.node_count == 0 {
        return Err(EdgeListError::Empty(path.to_string()).into());
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_edge_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_undirected_graph() {
        let file = write_edge_csv("source,target\na,b\nb,c\na,b\n");
        let graph = load_edge_list(file.path().to_str().unwrap()).unwrap();

        assert_eq!(graph.node_count, 3);
        assert_eq!(graph.edge_count, 2);
        assert_eq!(graph.node_ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = load_edge_list("/nonexistent/edges.csv").unwrap_err();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn missing_column_is_fatal() {
        let file = write_edge_csv("from,to\na,b\n");
        let err = load_edge_list(file.path().to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("missing required column"));
    }

    #[test]
    fn empty_edge_list_is_fatal() {
        let file = write_edge_csv("source,target\n");
        let err = load_edge_list(file.path().to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("no edges"));
    }
}
