use std::fmt;

/// Largest supported coordinate magnitude.
///
/// Collision tests compare ratios of cross products exactly in `i128`;
/// keeping |x|, |y| at or below 2^30 keeps those products in range.
pub const MAX_COORDINATE: i64 = 1 << 30;

/// An integer point on the map
///
/// Points are used directly as graph node identities, so equality and
/// hashing are by coordinate value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = (self.x as i128 - other.x as i128) as f64;
        let dy = (self.y as i128 - other.y as i128) as f64;
        dx.hypot(dy)
    }

    /// Whether both coordinates lie within [`MAX_COORDINATE`]
    pub fn in_range(&self) -> bool {
        self.x.abs() <= MAX_COORDINATE && self.y.abs() <= MAX_COORDINATE
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
