use thiserror::Error;

use crate::domain::{MAX_COORDINATE, Point};
use crate::geometry::ObstacleIssue;

/// Malformed problem input, with the 1-based line it was found on
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: unexpected end of input, expected {expected}")]
    MissingLine { line: usize, expected: &'static str },

    #[error("line {line}: invalid obstacle count {value:?}")]
    InvalidCount { line: usize, value: String },

    #[error("line {line}: invalid point {token:?}, expected x,y with integer coordinates")]
    InvalidPoint { line: usize, token: String },

    #[error("line {line}: obstacle has {count} vertices, at least 3 are required")]
    TooFewVertices { line: usize, count: usize },

    #[error("line {line}: point {point} is outside the supported range of +/-{max}", max = MAX_COORDINATE)]
    CoordinateOutOfRange { line: usize, point: Point },

    #[error("failed to read input: {0}")]
    Io(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("no route found from {start} to {end}")]
    NoRouteFound { start: Point, end: Point },

    #[error("obstacle #{index} is degenerate: {issue}")]
    DegenerateObstacle { index: usize, issue: ObstacleIssue },

    #[error("point {0} is outside the supported range of +/-{max}", max = MAX_COORDINATE)]
    CoordinateOutOfRange(Point),
}

pub type Result<T, E = RouteError> = std::result::Result<T, E>;
