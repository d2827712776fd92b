pub mod error;
pub mod graph;
pub mod input;

pub use error::{GraphError, InputError};
pub use graph::builder::{build_graph, build_graph_with_capacity, EdgeTriplet};
pub use graph::graph::{Neighbors, RouteGraph, Weight};
pub use graph::route::{route_distance, RouteDistance};
pub use graph::vertex_index::VertexIndex;
