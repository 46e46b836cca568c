//! Dijkstra's shortest path over the visibility graph.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::debug;

use super::VisibilityGraph;
use crate::domain::Point;
use crate::error::{Result, RouteError};
use crate::route::Route;

/// Relative tolerance under which two path costs count as equal
const COST_TOLERANCE: f64 = 1e-9;

fn costs_equal(a: f64, b: f64) -> bool {
    a.is_finite()
        && b.is_finite()
        && (a - b).abs() <= COST_TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

/// Path cost with tie-breaking: lower cost, then fewer hops
#[derive(Clone, Copy, Debug)]
struct Cost {
    distance: f64,
    hops: usize,
}

impl Cost {
    const INFINITE: Cost = Cost {
        distance: f64::INFINITY,
        hops: usize::MAX,
    };

    fn compare(&self, other: &Cost) -> Ordering {
        if costs_equal(self.distance, other.distance) {
            self.hops.cmp(&other.hops)
        } else {
            self.distance
                .partial_cmp(&other.distance)
                .unwrap_or(Ordering::Equal)
        }
    }
}

/// State for the priority queue
#[derive(Clone, Copy, Debug)]
struct State {
    cost: Cost,
    node: usize,
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap (BinaryHeap is max-heap by default);
        // lower node index wins exact ties so results are reproducible
        other
            .cost
            .compare(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the shortest route from `start` to `end`
///
/// Costs within a relative 1e-9 of each other are treated as equal and
/// resolved by hop count, so a straight edge is preferred over the same
/// line broken at collinear vertices.
///
/// # Errors
/// `NoRouteFound` when either point is not a graph node or the two are
/// not connected.
pub fn shortest_route(graph: &VisibilityGraph, start: Point, end: Point) -> Result<Route> {
    let no_route = || RouteError::NoRouteFound { start, end };
    let source = graph.node_index(&start).ok_or_else(no_route)?;
    let goal = graph.node_index(&end).ok_or_else(no_route)?;

    if source == goal {
        return Ok(Route::new(vec![start]));
    }

    let n = graph.node_count();
    let mut best = vec![Cost::INFINITE; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut settled = vec![false; n];
    best[source] = Cost {
        distance: 0.0,
        hops: 0,
    };

    let mut heap = BinaryHeap::new();
    heap.push(State {
        cost: best[source],
        node: source,
    });

    while let Some(State { cost, node }) = heap.pop() {
        if settled[node] {
            continue;
        }
        settled[node] = true;

        if node == goal {
            break;
        }

        for &(neighbor, weight) in graph.neighbors(node) {
            if settled[neighbor] {
                continue;
            }
            let candidate = Cost {
                distance: cost.distance + weight,
                hops: cost.hops + 1,
            };
            if candidate.compare(&best[neighbor]) == Ordering::Less {
                best[neighbor] = candidate;
                prev[neighbor] = Some(node);
                heap.push(State {
                    cost: candidate,
                    node: neighbor,
                });
            }
        }
    }

    if !settled[goal] {
        return Err(no_route());
    }

    let mut path = vec![goal];
    let mut current = goal;
    while let Some(p) = prev[current] {
        path.push(p);
        current = p;
    }
    path.reverse();

    let route = Route::new(path.into_iter().map(|i| graph.point(i)).collect());
    debug!(
        waypoints = route.points().len(),
        length = route.length(),
        "found shortest route"
    );
    Ok(route)
}
