//! Obstacle sanity checks
//!
//! Collision classification assumes simple convex polygons with at least
//! three vertices and a non-zero area. Inputs that break those assumptions
//! get an unspecified (but non-panicking) classification, so they are
//! reported here before solving:
//! - fewer than 3 distinct vertices
//! - zero area (all vertices collinear)
//! - turns in both directions, or winds around more than once (not convex)

use geo::{IsConvex, LineString};
use std::collections::HashSet;
use thiserror::Error;

use super::cross;
use crate::domain::Obstacle;

/// Why an obstacle falls outside the supported shape class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ObstacleIssue {
    #[error("needs at least 3 distinct vertices, found {0}")]
    TooFewVertices(usize),
    #[error("vertices are collinear (zero area)")]
    ZeroArea,
    #[error("polygon is not convex")]
    NotConvex,
}

/// Check that an obstacle is a proper convex polygon
pub fn validate_obstacle(obstacle: &Obstacle) -> Result<(), ObstacleIssue> {
    let distinct: HashSet<_> = obstacle.vertices().iter().collect();
    if distinct.len() < 3 {
        return Err(ObstacleIssue::TooFewVertices(distinct.len()));
    }

    let winding = obstacle.double_signed_area().signum();
    if winding == 0 {
        return Err(ObstacleIssue::ZeroArea);
    }

    let mut ring: LineString<f64> = obstacle
        .vertices()
        .iter()
        .map(|p| geo::coord! { x: p.x as f64, y: p.y as f64 })
        .collect();
    ring.close();

    if !ring.is_convex() {
        return Err(ObstacleIssue::NotConvex);
    }

    // Same-direction turns still admit self-intersecting stars; a simple
    // convex ring keeps every vertex on the inner side of every side.
    let outside = obstacle
        .edges()
        .filter(|(from, to)| from != to)
        .any(|(from, to)| {
            obstacle
                .vertices()
                .iter()
                .any(|&p| winding * cross(from, to, p) < 0)
        });
    if outside {
        return Err(ObstacleIssue::NotConvex);
    }

    Ok(())
}
