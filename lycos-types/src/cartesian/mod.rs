//! Types and functions on geometries in projected (cartesian) coordinates.

mod point;
mod rect;
mod traits;

pub use point::Point2d;
pub use rect::Rect;
pub use traits::CartesianPoint2d;
