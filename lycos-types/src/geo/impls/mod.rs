//! Implementations of geodetic types and projections.

mod point;
pub mod projection;

pub use point::GeoPoint2d;
