pub mod dijkstra;
pub mod visibility;

pub use dijkstra::shortest_route;
pub use visibility::{VisibilityGraph, build_graph, build_graph_parallel};
