//! Problem definition and the end-to-end routing entry points

use tracing::warn;

use crate::domain::{Obstacle, Point};
use crate::error::{Result, RouteError};
use crate::geometry::validate_obstacle;
use crate::graph::{VisibilityGraph, build_graph, build_graph_parallel, shortest_route};

/// An ordered list of waypoints from start to end
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    points: Vec<Point>,
    length: f64,
}

impl Route {
    pub fn new(points: Vec<Point>) -> Self {
        let length = points.windows(2).map(|w| w[0].distance(&w[1])).sum();
        Self { points, length }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Total Euclidean length
    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn reversed(&self) -> Route {
        Route::new(self.points.iter().rev().copied().collect())
    }
}

/// Knobs for a single solve
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveOptions {
    /// Evaluate waypoint pairs on the rayon thread pool
    pub parallel: bool,
    /// Reject degenerate or non-convex obstacles instead of warning
    pub strict: bool,
}

/// A routing problem: travel from `start` to `end` around `obstacles`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub start: Point,
    pub end: Point,
    pub obstacles: Vec<Obstacle>,
}

impl Problem {
    pub fn new(start: Point, end: Point, obstacles: Vec<Obstacle>) -> Self {
        Self {
            start,
            end,
            obstacles,
        }
    }

    /// Check coordinate ranges and obstacle shapes
    ///
    /// Out-of-range coordinates are always an error. Shape issues are an
    /// error in strict mode and a logged warning otherwise.
    pub fn validate(&self, strict: bool) -> Result<()> {
        let all_points = [self.start, self.end]
            .into_iter()
            .chain(self.obstacles.iter().flat_map(|o| o.vertices().iter().copied()));
        for point in all_points {
            if !point.in_range() {
                return Err(RouteError::CoordinateOutOfRange(point));
            }
        }

        for (index, obstacle) in self.obstacles.iter().enumerate() {
            if let Err(issue) = validate_obstacle(obstacle) {
                if strict {
                    return Err(RouteError::DegenerateObstacle { index, issue });
                }
                warn!(index, %issue, "obstacle outside supported shape class");
            }
        }

        Ok(())
    }

    pub fn visibility_graph(&self, parallel: bool) -> VisibilityGraph {
        if parallel {
            build_graph_parallel(self.start, self.end, &self.obstacles)
        } else {
            build_graph(self.start, self.end, &self.obstacles)
        }
    }

    /// Validate, build the visibility graph and search it
    pub fn solve(&self, options: &SolveOptions) -> Result<Route> {
        self.validate(options.strict)?;
        let graph = self.visibility_graph(options.parallel);
        shortest_route(&graph, self.start, self.end)
    }
}

/// Calculate the shortest safe route from `start` to `end`
///
/// A safe route never passes through the interior of an obstacle; it may
/// run along sides and touch vertices.
pub fn get_shortest_route(start: Point, end: Point, obstacles: &[Obstacle]) -> Result<Route> {
    Problem::new(start, end, obstacles.to_vec()).solve(&SolveOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MAX_COORDINATE;
    use crate::geometry::ObstacleIssue;

    fn p(x: i64, y: i64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_route_length() {
        let route = Route::new(vec![p(0, 0), p(3, 4), p(3, 10)]);
        assert_eq!(route.length(), 11.0);
        assert_eq!(route.reversed().points(), &[p(3, 10), p(3, 4), p(0, 0)]);
        assert_eq!(Route::new(vec![p(1, 1)]).length(), 0.0);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let far = p(MAX_COORDINATE + 1, 0);
        let problem = Problem::new(p(0, 0), far, Vec::new());
        assert_eq!(
            problem.solve(&SolveOptions::default()),
            Err(RouteError::CoordinateOutOfRange(far))
        );
    }

    #[test]
    fn test_strict_rejects_degenerate() {
        let flat = Obstacle::new(vec![p(0, 0), p(1, 1), p(2, 2)]);
        let problem = Problem::new(p(0, 5), p(5, 0), vec![flat]);

        let strict = SolveOptions {
            strict: true,
            ..Default::default()
        };
        assert_eq!(
            problem.solve(&strict),
            Err(RouteError::DegenerateObstacle {
                index: 0,
                issue: ObstacleIssue::ZeroArea
            })
        );

        // lenient mode still solves; a flat obstacle has no interior
        let route = problem.solve(&SolveOptions::default()).unwrap();
        assert_eq!(route.points(), &[p(0, 5), p(5, 0)]);
    }

    #[test]
    fn test_enclosed_start_has_no_route() {
        let square = Obstacle::new(vec![p(0, 0), p(10, 0), p(10, 10), p(0, 10)]);
        let result = get_shortest_route(p(5, 5), p(20, 20), &[square]);
        assert_eq!(
            result,
            Err(RouteError::NoRouteFound {
                start: p(5, 5),
                end: p(20, 20)
            })
        );
    }
}
