use super::{Point, Segment};

/// A convex polygonal iceberg
///
/// Vertices are kept in input order; the closing side from the last vertex
/// back to the first is implied. Convexity is assumed, not enforced here
/// (see [`crate::geometry::validate_obstacle`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Obstacle {
    vertices: Vec<Point>,
}

impl Obstacle {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn has_vertex(&self, point: &Point) -> bool {
        self.vertices.contains(point)
    }

    /// Iterate over the sides as (from, to) in vertex order, closing side last
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    pub fn sides(&self) -> impl Iterator<Item = Segment> + '_ {
        self.edges().map(|(a, b)| Segment::new(a, b))
    }

    pub fn has_side(&self, segment: &Segment) -> bool {
        self.sides().any(|side| side == *segment)
    }

    /// Twice the signed area (positive for counter-clockwise winding)
    pub fn double_signed_area(&self) -> i128 {
        self.edges()
            .map(|(a, b)| a.x as i128 * b.y as i128 - b.x as i128 * a.y as i128)
            .sum()
    }
}

impl FromIterator<Point> for Obstacle {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
