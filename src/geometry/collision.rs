//! Segment vs. obstacle collision classification
//!
//! A segment between two waypoints is navigable when it never enters the
//! interior of any obstacle. Touching the boundary is allowed:
//! - following a side of an obstacle
//! - touching a single vertex
//! - meeting the boundary at one point
//!
//! All tests run on exact integer arithmetic. Coordinates must lie within
//! [`MAX_COORDINATE`](crate::domain::MAX_COORDINATE) for the ratio
//! comparisons below to stay inside `i128`.

use std::cmp::Ordering;

use super::cross;
use crate::domain::{Obstacle, Point, Segment};

/// Check whether the straight segment u -> v avoids every obstacle
pub fn is_navigable(u: Point, v: Point, obstacles: &[Obstacle]) -> bool {
    !obstacles.iter().any(|obstacle| blocks(obstacle, u, v))
}

/// Check whether a single obstacle blocks the segment u -> v
///
/// # Algorithm
/// 1. A segment that is one of the obstacle's sides never blocks
/// 2. Any other segment joining two of its vertices is a diagonal of a
///    convex polygon and cuts through it
/// 3. Otherwise the segment blocks iff it overlaps the open interior
pub fn blocks(obstacle: &Obstacle, u: Point, v: Point) -> bool {
    if obstacle.has_side(&Segment::new(u, v)) {
        return false;
    }

    if obstacle.has_vertex(&u) && obstacle.has_vertex(&v) {
        return true;
    }

    crosses_interior(obstacle, u, v)
}

/// Fraction num / den with den > 0
#[derive(Debug, Clone, Copy)]
struct Ratio {
    num: i128,
    den: i128,
}

impl Ratio {
    const ZERO: Ratio = Ratio { num: 0, den: 1 };
    const ONE: Ratio = Ratio { num: 1, den: 1 };

    fn compare(&self, other: &Ratio) -> Ordering {
        (self.num * other.den).cmp(&(other.num * self.den))
    }
}

/// Check whether the open segment u -> v overlaps the open polygon interior
///
/// Clips the segment parameter t in (0, 1) against the strict inner
/// half-plane of every side. Each side contributes `a + b*t > 0`; the
/// segment reaches the interior iff the surviving interval is non-empty.
/// Polygons with zero area have no interior and never report a crossing.
pub fn crosses_interior(obstacle: &Obstacle, u: Point, v: Point) -> bool {
    let winding = obstacle.double_signed_area().signum();
    if winding == 0 || u == v {
        return false;
    }

    let mut lower = Ratio::ZERO;
    let mut upper = Ratio::ONE;

    for (from, to) in obstacle.edges() {
        if from == to {
            continue;
        }

        // cross() is affine in its last argument, so along the segment
        // f(t) = f(u) + t * (f(v) - f(u))
        let at_u = cross(from, to, u);
        let a = winding * at_u;
        let b = winding * (cross(from, to, v) - at_u);

        match b.cmp(&0) {
            Ordering::Equal => {
                if a <= 0 {
                    return false;
                }
            }
            Ordering::Greater => {
                let bound = Ratio { num: -a, den: b };
                if bound.compare(&lower) == Ordering::Greater {
                    lower = bound;
                }
            }
            Ordering::Less => {
                let bound = Ratio { num: a, den: -b };
                if bound.compare(&upper) == Ordering::Less {
                    upper = bound;
                }
            }
        }

        if lower.compare(&upper) != Ordering::Less {
            return false;
        }
    }

    true
}
