use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle.
///
/// Used both for projected extents and for geodetic ones, in which case `x` is the longitude and `y` is the latitude.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
}

impl Rect {
    /// Creates a new rectangle from its bounds.
    pub const fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Minimum x.
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    /// Maximum x.
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// Minimum y.
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    /// Maximum y.
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// Returns true if the point lies inside the rectangle or on its border.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.x_min <= x && self.x_max >= x && self.y_min <= y && self.y_max >= y
    }

    /// Returns a rectangle grown by `amount` on every side.
    pub fn expand(&self, amount: f64) -> Self {
        Self {
            x_min: self.x_min - amount,
            y_min: self.y_min - amount,
            x_max: self.x_max + amount,
            y_max: self.y_max + amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains() {
        let rect = Rect::new(0.0, 0.0, 2.0, 1.0);
        assert!(rect.contains(0.0, 0.0));
        assert!(rect.contains(1.0, 0.5));
        assert!(rect.contains(2.0, 1.0));
        assert!(!rect.contains(2.1, 0.5));
        assert!(!rect.contains(1.0, -0.1));
        assert!(!rect.contains(f64::NAN, 0.5));
    }

    #[test]
    fn expand() {
        let rect = Rect::new(0.0, 0.0, 2.0, 1.0).expand(1.0);
        assert_eq!(rect, Rect::new(-1.0, -1.0, 3.0, 2.0));
        assert!(rect.contains(-0.5, 1.5));
    }

    #[test]
    fn bounds() {
        let rect = Rect::new(-1.0, 2.0, 3.0, 4.0);
        assert_eq!(rect.x_min(), -1.0);
        assert_eq!(rect.y_min(), 2.0);
        assert_eq!(rect.x_max(), 3.0);
        assert_eq!(rect.y_max(), 4.0);
    }
}
