//! Problem input parsing
//!
//! # Format
//! 1. Number of obstacles N
//! 2. N lines, one obstacle each: whitespace separated `x,y` vertices
//! 3. Start point `x,y`
//! 4. End point `x,y`
//!
//! Coordinates are integers. Anything after the end point is ignored.

use std::io::BufRead;

use crate::domain::{Obstacle, Point};
use crate::error::ParseError;
use crate::route::Problem;

/// Yields trimmed lines along with their 1-based line number
struct Lines<R> {
    inner: std::io::Lines<R>,
    line: usize,
}

impl<R: BufRead> Lines<R> {
    fn new(reader: R) -> Self {
        Self {
            inner: reader.lines(),
            line: 0,
        }
    }

    fn next(&mut self, expected: &'static str) -> Result<(usize, String), ParseError> {
        self.line += 1;
        match self.inner.next() {
            Some(Ok(text)) => Ok((self.line, text.trim().to_string())),
            Some(Err(e)) => Err(ParseError::Io(e.to_string())),
            None => Err(ParseError::MissingLine {
                line: self.line,
                expected,
            }),
        }
    }
}

/// Parse a single `x,y` token
pub fn parse_point(token: &str, line: usize) -> Result<Point, ParseError> {
    let invalid = || ParseError::InvalidPoint {
        line,
        token: token.to_string(),
    };

    let (x, y) = token.split_once(',').ok_or_else(invalid)?;
    let x: i64 = x.trim().parse().map_err(|_| invalid())?;
    let y: i64 = y.trim().parse().map_err(|_| invalid())?;

    let point = Point::new(x, y);
    if !point.in_range() {
        return Err(ParseError::CoordinateOutOfRange { line, point });
    }
    Ok(point)
}

fn parse_obstacle(text: &str, line: usize) -> Result<Obstacle, ParseError> {
    let vertices = text
        .split_whitespace()
        .map(|token| parse_point(token, line))
        .collect::<Result<Vec<_>, _>>()?;

    if vertices.len() < 3 {
        return Err(ParseError::TooFewVertices {
            line,
            count: vertices.len(),
        });
    }

    Ok(Obstacle::new(vertices))
}

/// Read a routing problem from a text stream
pub fn read_problem<R: BufRead>(reader: R) -> Result<Problem, ParseError> {
    let mut lines = Lines::new(reader);

    let (line, text) = lines.next("obstacle count")?;
    let count: usize = text.parse().map_err(|_| ParseError::InvalidCount {
        line,
        value: text.clone(),
    })?;

    let mut obstacles = Vec::with_capacity(count);
    for _ in 0..count {
        let (line, text) = lines.next("obstacle vertices")?;
        obstacles.push(parse_obstacle(&text, line)?);
    }

    let (line, text) = lines.next("start point")?;
    let start = parse_point(&text, line)?;

    let (line, text) = lines.next("end point")?;
    let end = parse_point(&text, line)?;

    Ok(Problem::new(start, end, obstacles))
}
