//! iceberg-nav - Shortest collision-free ship routes around convex icebergs
//!
//! The route is found on a visibility graph: every obstacle vertex plus the
//! start and end is a waypoint, every pair of waypoints whose straight
//! segment stays out of all obstacle interiors is an edge, and Dijkstra's
//! algorithm picks the shortest chain of edges.

pub mod config;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod io;
pub mod route;

pub use domain::{Obstacle, Point, Segment};
pub use error::{ParseError, RouteError};
pub use route::{Problem, Route, SolveOptions, get_shortest_route};
