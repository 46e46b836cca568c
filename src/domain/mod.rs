pub mod obstacle;
pub mod point;
pub mod segment;

pub use obstacle::Obstacle;
pub use point::{MAX_COORDINATE, Point};
pub use segment::Segment;
