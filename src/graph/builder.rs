use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::graph::graph::{RouteGraph, Weight};
use crate::graph::vertex_index::VertexIndex;

/// One directed edge as supplied by an input source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeTriplet {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

impl EdgeTriplet {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: Weight) -> Self {
        EdgeTriplet {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

/// Builds a graph whose matrix is exactly as large as the number of distinct
/// labels among `triplets`. Later triplets overwrite earlier ones for the
/// same vertex pair.
pub fn build_graph(triplets: &[EdgeTriplet]) -> RouteGraph {
    let mut index = VertexIndex::new();
    let edges: Vec<(usize, usize, Weight)> = triplets
        .iter()
        .map(|t| {
            let v = index.resolve_or_create(&t.from);
            let w = index.resolve_or_create(&t.to);
            (v, w, t.weight)
        })
        .collect();

    let mut graph = RouteGraph::with_index(index);
    for (v, w, weight) in edges {
        graph.set_edge(v, w, weight);
    }

    debug!(
        "built graph from {} triplets: {} vertices, {} edges",
        triplets.len(),
        graph.vertex_count(),
        graph.edge_count()
    );
    graph
}

/// Builds a graph into a matrix of caller-declared size. Fails if the
/// capacity is negative or too small for the distinct labels.
pub fn build_graph_with_capacity(
    triplets: &[EdgeTriplet],
    declared: i64,
) -> Result<RouteGraph, GraphError> {
    let mut graph = RouteGraph::with_declared_capacity(declared)?;
    for t in triplets {
        graph.add_edge(&t.from, &t.to, t.weight)?;
    }
    debug!(
        "built graph with declared capacity {declared}: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}
