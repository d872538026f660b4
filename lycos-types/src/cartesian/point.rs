use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::cartesian::traits::CartesianPoint2d;

/// A point in the projected (planar, meters) coordinate space.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point2d {
    x: f64,
    y: f64,
}

impl Point2d {
    /// Creates a new point with the given coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns coordinates of the point as an `(x, y)` tuple.
    pub fn coords(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Returns true if both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl CartesianPoint2d for Point2d {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl From<(f64, f64)> for Point2d {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point2d> for (f64, f64) {
    fn from(value: Point2d) -> Self {
        value.coords()
    }
}

impl From<Point2d> for ::geo::Coord<f64> {
    fn from(value: Point2d) -> Self {
        ::geo::Coord {
            x: value.x,
            y: value.y,
        }
    }
}

impl From<::geo::Coord<f64>> for Point2d {
    fn from(value: ::geo::Coord<f64>) -> Self {
        Self::new(value.x, value.y)
    }
}

impl AbsDiffEq for Point2d {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}
