//! Visibility graph over all waypoints
//!
//! Nodes are the start, the end and every obstacle vertex (deduplicated by
//! coordinate). Every unordered pair of nodes is tested against all
//! obstacles; navigable pairs become undirected edges weighted by their
//! Euclidean length. No pruning is done, so building is O(n^2 * m) for n
//! nodes and m obstacles.

use rayon::prelude::*;
use std::collections::HashMap;
use tracing::{debug, trace};

use crate::domain::{Obstacle, Point};
use crate::geometry::is_navigable;

/// Weighted undirected graph of navigable waypoint pairs
#[derive(Debug, Clone, Default)]
pub struct VisibilityGraph {
    nodes: Vec<Point>,
    index: HashMap<Point, usize>,
    /// adjacency[i] = [(neighbor, distance), ...]
    adjacency: Vec<Vec<(usize, f64)>>,
    edge_count: usize,
}

impl VisibilityGraph {
    /// Create a graph with the given nodes and no edges
    ///
    /// Duplicate points keep the position of their first occurrence.
    pub fn with_nodes(points: impl IntoIterator<Item = Point>) -> Self {
        let mut graph = Self::default();
        for point in points {
            graph.add_node(point);
        }
        graph
    }

    fn add_node(&mut self, point: Point) -> usize {
        if let Some(&i) = self.index.get(&point) {
            return i;
        }
        let i = self.nodes.len();
        self.nodes.push(point);
        self.index.insert(point, i);
        self.adjacency.push(Vec::new());
        i
    }

    /// Add an undirected edge weighted by Euclidean distance
    ///
    /// Adding the same pair twice or a self-loop is ignored.
    pub fn add_edge(&mut self, a: usize, b: usize) {
        if a == b || self.has_edge(a, b) {
            return;
        }
        self.push_edge(a, b);
    }

    /// Insert an edge known to be new, skipping the duplicate scan
    fn push_edge(&mut self, a: usize, b: usize) {
        let weight = self.nodes[a].distance(&self.nodes[b]);
        self.adjacency[a].push((b, weight));
        self.adjacency[b].push((a, weight));
        self.edge_count += 1;
    }

    pub fn nodes(&self) -> &[Point] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn node_index(&self, point: &Point) -> Option<usize> {
        self.index.get(point).copied()
    }

    pub fn point(&self, index: usize) -> Point {
        self.nodes[index]
    }

    pub fn neighbors(&self, index: usize) -> &[(usize, f64)] {
        &self.adjacency[index]
    }

    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.adjacency[a].iter().any(|&(n, _)| n == b)
    }

    /// Adjacency lists indexed by node, for the search
    pub fn adjacency(&self) -> &[Vec<(usize, f64)>] {
        &self.adjacency
    }
}

fn waypoints(start: Point, end: Point, obstacles: &[Obstacle]) -> VisibilityGraph {
    VisibilityGraph::with_nodes(
        [start, end]
            .into_iter()
            .chain(obstacles.iter().flat_map(|o| o.vertices().iter().copied())),
    )
}

/// Navigable partners j > i of node i, in increasing order
fn visible_from(nodes: &[Point], i: usize, obstacles: &[Obstacle]) -> Vec<usize> {
    (i + 1..nodes.len())
        .filter(|&j| {
            let navigable = is_navigable(nodes[i], nodes[j], obstacles);
            if !navigable {
                trace!("blocked: {} -> {}", nodes[i], nodes[j]);
            }
            navigable
        })
        .collect()
}

fn assemble(mut graph: VisibilityGraph, rows: Vec<Vec<usize>>) -> VisibilityGraph {
    for (i, row) in rows.into_iter().enumerate() {
        // rows only hold j > i, so every pair arrives once
        for j in row {
            graph.push_edge(i, j);
        }
    }
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built visibility graph"
    );
    graph
}

/// Build the visibility graph for a problem instance
pub fn build_graph(start: Point, end: Point, obstacles: &[Obstacle]) -> VisibilityGraph {
    let graph = waypoints(start, end, obstacles);
    let rows = (0..graph.node_count())
        .map(|i| visible_from(graph.nodes(), i, obstacles))
        .collect();
    assemble(graph, rows)
}

/// Same as [`build_graph`], evaluating node rows on the rayon thread pool
///
/// Each row is computed independently and merged in row order, so the
/// result is identical to the serial build.
pub fn build_graph_parallel(start: Point, end: Point, obstacles: &[Obstacle]) -> VisibilityGraph {
    let graph = waypoints(start, end, obstacles);
    let rows = (0..graph.node_count())
        .into_par_iter()
        .map(|i| visible_from(graph.nodes(), i, obstacles))
        .collect();
    assemble(graph, rows)
}
