pub mod builder;
pub mod graph;
pub mod route;
pub mod vertex_index;
