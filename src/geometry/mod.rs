pub mod collision;
pub mod validation;

use crate::domain::Point;

pub use collision::{blocks, crosses_interior, is_navigable};
pub use validation::{ObstacleIssue, validate_obstacle};

/// Cross product of (a - o) and (b - o)
///
/// Positive when o -> a -> b turns counter-clockwise, negative when
/// clockwise, zero when the three points are collinear.
pub fn cross(o: Point, a: Point, b: Point) -> i128 {
    let (ax, ay) = (a.x as i128 - o.x as i128, a.y as i128 - o.y as i128);
    let (bx, by) = (b.x as i128 - o.x as i128, b.y as i128 - o.y as i128);
    ax * by - ay * bx
}
