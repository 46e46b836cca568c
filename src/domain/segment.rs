use super::Point;

/// An unordered pair of points
///
/// The endpoints are stored in sorted order so `Segment::new(a, b)` and
/// `Segment::new(b, a)` compare and hash equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    a: Point,
    b: Point,
}

impl Segment {
    pub fn new(p: Point, q: Point) -> Self {
        if p <= q {
            Self { a: p, b: q }
        } else {
            Self { a: q, b: p }
        }
    }

    pub fn endpoints(&self) -> (Point, Point) {
        (self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_is_unordered() {
        let p = Point::new(1, 2);
        let q = Point::new(-3, 7);
        assert_eq!(Segment::new(p, q), Segment::new(q, p));
        assert_eq!(Segment::new(q, p).endpoints(), (q, p));
    }
}
